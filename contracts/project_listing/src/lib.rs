#![no_std]

//! Subscription-based project registry.
//!
//! Project owners pay the subscription fee to publish a project. Every new
//! listing is forwarded to the DAO as a project request under the same id, and
//! the donate contract credits donations back to the listed project.
//!
//! The DAO and donate addresses are not known when the registry is deployed, so
//! both are wired afterwards by the admin. Operations depending on a slot fail
//! until it is set.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, panic_with_error, token, Address,
    Env, String,
};

mod events;
mod storage;
mod types;
mod voting;


use storage::{
    bump_instance, get_collected_fees, get_dao_contract, get_donate_contract, get_project_count,
    load_config, load_project, next_project_id, save_config, save_project, set_collected_fees,
    set_dao_contract, set_donate_contract,
};
pub use types::{ListingConfig, Project, SUBSCRIPTION_PERIOD};
use voting::VotingClient;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    InsufficientFee = 2,
    Unauthorized = 3,
    UnknownProject = 4,
    DaoNotConfigured = 5,
    DonateNotConfigured = 6,
    AlreadyConfigured = 7,
    ZeroValue = 8,
    InvalidConfig = 9,
    Overflow = 10,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    ProjectCount,
    DaoContract,
    DonateContract,
    CollectedFees,
    Project(u64),
}

#[contract]
pub struct ProjectListing;

#[contractimpl]
impl ProjectListing {
    /// Deploy the registry.
    ///
    /// - `admin` wires the DAO and donate contracts and withdraws collected fees.
    /// - `payment_token` is the asset fees are paid in.
    /// - `subscription_fee` must not be negative.
    pub fn __constructor(env: Env, admin: Address, payment_token: Address, subscription_fee: i128) {
        if subscription_fee < 0 {
            panic_with_error!(&env, Error::InvalidConfig);
        }

        save_config(
            &env,
            &ListingConfig {
                admin,
                payment_token,
                subscription_fee,
            },
        );
        bump_instance(&env);
    }

    /// Pay the subscription fee and publish a project.
    ///
    /// The project gets the next sequential id and is forwarded to the DAO under
    /// that id. If the DAO rejects the request the whole listing is reverted.
    pub fn list_project(
        env: Env,
        owner: Address,
        name: String,
        description: String,
        payment: i128,
    ) -> Result<Project, Error> {
        owner.require_auth();

        let config = load_config(&env);
        if payment < config.subscription_fee {
            return Err(Error::InsufficientFee);
        }
        let dao = get_dao_contract(&env).ok_or(Error::DaoNotConfigured)?;

        let fees = get_collected_fees(&env)
            .checked_add(payment)
            .ok_or(Error::Overflow)?;
        let subscription_end_time = env
            .ledger()
            .timestamp()
            .checked_add(SUBSCRIPTION_PERIOD)
            .ok_or(Error::Overflow)?;

        if payment > 0 {
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&owner, &env.current_contract_address(), &payment);
        }
        set_collected_fees(&env, fees);

        let project = Project {
            id: next_project_id(&env),
            name,
            description,
            owner,
            subscription_end_time,
            is_listed: true,
            total_donations: 0,
        };
        save_project(&env, &project);
        bump_instance(&env);

        VotingClient::new(&env, &dao).receive_project_request(
            &env.current_contract_address(),
            &project.id,
            &project.owner,
            &project.name,
            &project.description,
        );

        events::emit_project_listed(
            &env,
            project.id,
            project.owner.clone(),
            project.name.clone(),
        );

        Ok(project)
    }

    /// Pay the fee again to extend a project's subscription by one period.
    ///
    /// The period is added to the current end time, or to now if it already lapsed.
    /// Returns the new end time.
    pub fn renew_subscription(
        env: Env,
        owner: Address,
        project_id: u64,
        payment: i128,
    ) -> Result<u64, Error> {
        owner.require_auth();

        let config = load_config(&env);
        let mut project = load_project(&env, project_id).ok_or(Error::UnknownProject)?;
        if project.owner != owner {
            return Err(Error::Unauthorized);
        }
        if payment < config.subscription_fee {
            return Err(Error::InsufficientFee);
        }

        let fees = get_collected_fees(&env)
            .checked_add(payment)
            .ok_or(Error::Overflow)?;
        let start = project.subscription_end_time.max(env.ledger().timestamp());
        project.subscription_end_time = start
            .checked_add(SUBSCRIPTION_PERIOD)
            .ok_or(Error::Overflow)?;

        if payment > 0 {
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&owner, &env.current_contract_address(), &payment);
        }
        set_collected_fees(&env, fees);
        save_project(&env, &project);
        bump_instance(&env);

        events::emit_subscription_renewed(&env, project_id, project.subscription_end_time);

        Ok(project.subscription_end_time)
    }

    /// Credit a donation to a listed project. Only the wired donate contract may call.
    ///
    /// Returns the updated project.
    pub fn record_donation(
        env: Env,
        caller: Address,
        project_id: u64,
        amount: i128,
    ) -> Result<Project, Error> {
        caller.require_auth();

        let donate = get_donate_contract(&env).ok_or(Error::DonateNotConfigured)?;
        if caller != donate {
            return Err(Error::Unauthorized);
        }
        if amount <= 0 {
            return Err(Error::ZeroValue);
        }

        let mut project = load_project(&env, project_id)
            .filter(|p| p.is_listed)
            .ok_or(Error::UnknownProject)?;
        project.total_donations = project
            .total_donations
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        save_project(&env, &project);
        bump_instance(&env);

        events::emit_donation_recorded(&env, project_id, amount, project.total_donations);

        Ok(project)
    }

    /// Wire the DAO contract. Admin only.
    ///
    /// Re-setting the same address is a no-op; a different address is rejected once set.
    pub fn set_dao_contract(env: Env, admin: Address, dao: Address) -> Result<(), Error> {
        require_admin(&env, &admin)?;

        match get_dao_contract(&env) {
            Some(current) if current == dao => Ok(()),
            Some(_) => Err(Error::AlreadyConfigured),
            None => {
                set_dao_contract(&env, &dao);
                bump_instance(&env);
                log!(&env, "dao wired", dao);
                Ok(())
            }
        }
    }

    /// Wire the donate contract. Admin only. Same one-time rule as `set_dao_contract`.
    pub fn set_donate_contract(env: Env, admin: Address, donate: Address) -> Result<(), Error> {
        require_admin(&env, &admin)?;

        match get_donate_contract(&env) {
            Some(current) if current == donate => Ok(()),
            Some(_) => Err(Error::AlreadyConfigured),
            None => {
                set_donate_contract(&env, &donate);
                bump_instance(&env);
                log!(&env, "donate wired", donate);
                Ok(())
            }
        }
    }

    /// Transfer every collected fee to `to`. Admin only. Returns the amount sent.
    pub fn withdraw_fees(env: Env, admin: Address, to: Address) -> Result<i128, Error> {
        require_admin(&env, &admin)?;

        let config = load_config(&env);
        let amount = get_collected_fees(&env);
        if amount > 0 {
            set_collected_fees(&env, 0);
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&env.current_contract_address(), &to, &amount);
        }
        bump_instance(&env);

        Ok(amount)
    }

    // ─── Queries ─────────────────────────────────────────

    pub fn get_project(env: Env, project_id: u64) -> Result<Project, Error> {
        load_project(&env, project_id).ok_or(Error::UnknownProject)
    }

    pub fn is_listed(env: Env, project_id: u64) -> bool {
        load_project(&env, project_id)
            .map(|p| p.is_listed)
            .unwrap_or(false)
    }

    pub fn is_subscription_active(env: Env, project_id: u64) -> bool {
        let now = env.ledger().timestamp();
        load_project(&env, project_id)
            .map(|p| p.is_subscription_active(now))
            .unwrap_or(false)
    }

    /// Number of projects listed so far; also the id of the latest one.
    pub fn project_count(env: Env) -> u64 {
        get_project_count(&env)
    }

    pub fn subscription_fee(env: Env) -> i128 {
        load_config(&env).subscription_fee
    }

    pub fn dao_contract(env: Env) -> Option<Address> {
        get_dao_contract(&env)
    }

    pub fn donate_contract(env: Env) -> Option<Address> {
        get_donate_contract(&env)
    }

    pub fn collected_fees(env: Env) -> i128 {
        get_collected_fees(&env)
    }

    pub fn config(env: Env) -> ListingConfig {
        load_config(&env)
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if caller != &load_config(env).admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
