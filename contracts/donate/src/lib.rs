#![no_std]

//! Donation router.
//!
//! Accepts donations for projects in the listing registry, checks the DAO's
//! verdict, credits the project's running total in the registry and pays the
//! donated tokens straight to the project owner.

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, token, Address, Env};

mod events;
mod interfaces;
mod storage;
mod types;

#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_flow;

use interfaces::{RegistryClient, VotingClient};
use storage::{
    bump_instance, get_contribution, get_total_routed, load_config, save_config, set_contribution,
    set_total_routed,
};
pub use types::DonateConfig;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    ZeroValue = 2,
    UnknownProject = 3,
    ProjectNotApproved = 4,
    Overflow = 5,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    TotalRouted,
    Contribution(Address, u64), // (donor, project_id)
}

#[contract]
pub struct Donate;

#[contractimpl]
impl Donate {
    /// Deploy the router against an already deployed registry and DAO.
    ///
    /// With `require_approval` set, projects must be approved by the DAO before
    /// they accept donations.
    pub fn __constructor(
        env: Env,
        listing_registry: Address,
        dao: Address,
        payment_token: Address,
        require_approval: bool,
    ) {
        save_config(
            &env,
            &DonateConfig {
                listing_registry,
                dao,
                payment_token,
                require_approval,
            },
        );
        bump_instance(&env);
    }

    /// Donate `amount` to `project_id`.
    ///
    /// The registry credits the amount to the project and the tokens move from
    /// `donor` to the project owner in the same invocation. Returns the
    /// project's new donation total.
    pub fn donate(env: Env, donor: Address, project_id: u64, amount: i128) -> Result<i128, Error> {
        donor.require_auth();

        if amount <= 0 {
            return Err(Error::ZeroValue);
        }

        let config = load_config(&env);
        let registry = RegistryClient::new(&env, &config.listing_registry);
        if !registry.is_listed(&project_id) {
            return Err(Error::UnknownProject);
        }
        if config.require_approval && !VotingClient::new(&env, &config.dao).is_approved(&project_id)
        {
            return Err(Error::ProjectNotApproved);
        }

        let contribution = get_contribution(&env, &donor, project_id)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let total_routed = get_total_routed(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        let project =
            registry.record_donation(&env.current_contract_address(), &project_id, &amount);

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&donor, &project.owner, &amount);

        set_contribution(&env, &donor, project_id, contribution);
        set_total_routed(&env, total_routed);
        bump_instance(&env);

        events::emit_donation_received(&env, project_id, donor, amount);

        Ok(project.total_donations)
    }

    // ─── Queries ─────────────────────────────────────────

    /// Total `donor` has given to `project_id` through this router.
    pub fn contribution(env: Env, donor: Address, project_id: u64) -> i128 {
        get_contribution(&env, &donor, project_id)
    }

    /// Sum of every donation routed so far.
    pub fn total_routed(env: Env) -> i128 {
        get_total_routed(&env)
    }

    pub fn config(env: Env) -> DonateConfig {
        load_config(&env)
    }
}
