#![no_std]

//! Membership staking and project-request voting.
//!
//! Accounts join by staking at least `min_stake_amount` of the stake token.
//! The listing registry forwards every newly listed project here as a
//! `ProjectRequest`; members cast one yes/no ballot each, and the request is
//! approved for good the first time the configured `ApprovalPolicy` holds.

#[cfg(test)]
extern crate std;

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, panic_with_error, token, Address,
    Env, String,
};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use storage::{
    bump_instance, get_member_count, get_total_staked, has_request, increment_member_count,
    load_config, load_member, load_request, load_vote, save_config, save_member, save_request,
    save_vote, set_total_staked,
};
pub use types::{ApprovalPolicy, DaoConfig, Member, ProjectRequest, BPS_DENOMINATOR};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    InsufficientStake = 2,
    Unauthorized = 3,
    NotAMember = 4,
    UnknownRequest = 5,
    DuplicateRequest = 6,
    AlreadyVoted = 7,
    InvalidConfig = 8,
    Overflow = 9,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    MemberCount,
    TotalStaked,
    Member(Address),
    Request(u64),
    Vote(u64, Address), // (project_id, voter)
}

#[contract]
pub struct Dao;

#[contractimpl]
impl Dao {
    /// Deploy the DAO.
    ///
    /// - `admin` may later swap the approval policy.
    /// - `listing_registry` is the only address allowed to submit project requests.
    /// - `stake_token` is the asset members stake with.
    /// - `min_stake_amount` must be positive.
    ///
    /// Starts with `ApprovalPolicy::Majority`.
    pub fn __constructor(
        env: Env,
        admin: Address,
        listing_registry: Address,
        stake_token: Address,
        min_stake_amount: i128,
    ) {
        if min_stake_amount <= 0 {
            panic_with_error!(&env, Error::InvalidConfig);
        }

        save_config(
            &env,
            &DaoConfig {
                admin,
                listing_registry,
                stake_token,
                min_stake_amount,
                policy: ApprovalPolicy::Majority,
            },
        );
        bump_instance(&env);
    }

    /// Stake `amount` of the stake token and become (or stay) a member.
    ///
    /// Every call must carry at least `min_stake_amount`. Repeated calls add to
    /// the existing stake. The staked tokens are held by this contract.
    pub fn join_dao(env: Env, member: Address, amount: i128) -> Result<Member, Error> {
        member.require_auth();

        let config = load_config(&env);
        if amount < config.min_stake_amount {
            return Err(Error::InsufficientStake);
        }

        let mut record = load_member(&env, &member);
        let first_join = !record.is_member;
        record.staked_amount = record
            .staked_amount
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        record.is_member = true;

        let total = get_total_staked(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        let token_client = token::Client::new(&env, &config.stake_token);
        token_client.transfer(&member, &env.current_contract_address(), &amount);

        save_member(&env, &member, &record);
        set_total_staked(&env, total);
        if first_join {
            let count = increment_member_count(&env);
            log!(&env, "new member", member, count);
        }
        bump_instance(&env);

        events::emit_member_joined(&env, member, amount, record.staked_amount);

        Ok(record)
    }

    /// Accept a project request forwarded by the listing registry.
    ///
    /// `caller` must be the registry configured at construction.
    pub fn receive_project_request(
        env: Env,
        caller: Address,
        id: u64,
        owner: Address,
        name: String,
        description: String,
    ) -> Result<(), Error> {
        caller.require_auth();

        let config = load_config(&env);
        if caller != config.listing_registry {
            return Err(Error::Unauthorized);
        }
        if has_request(&env, id) {
            return Err(Error::DuplicateRequest);
        }

        let request = ProjectRequest {
            id,
            project_owner: owner.clone(),
            name: name.clone(),
            description,
            yes_votes: 0,
            no_votes: 0,
            is_approved: false,
        };
        save_request(&env, &request);
        bump_instance(&env);

        events::emit_request_received(&env, id, owner, name);

        Ok(())
    }

    /// Cast `voter`'s single ballot on request `id` and re-evaluate approval.
    ///
    /// Returns the updated request.
    pub fn vote_on_project(
        env: Env,
        voter: Address,
        id: u64,
        support: bool,
    ) -> Result<ProjectRequest, Error> {
        voter.require_auth();

        if !load_member(&env, &voter).is_member {
            return Err(Error::NotAMember);
        }
        let mut request = load_request(&env, id).ok_or(Error::UnknownRequest)?;
        if load_vote(&env, id, &voter).is_some() {
            return Err(Error::AlreadyVoted);
        }

        if support {
            request.yes_votes = request.yes_votes.checked_add(1).ok_or(Error::Overflow)?;
        } else {
            request.no_votes = request.no_votes.checked_add(1).ok_or(Error::Overflow)?;
        }
        save_vote(&env, id, &voter, support);
        events::emit_vote_cast(&env, id, voter, support);

        // Approval only ever moves false -> true.
        if !request.is_approved {
            let config = load_config(&env);
            let members = get_member_count(&env);
            if config
                .policy
                .is_satisfied(request.yes_votes, request.no_votes, members)
            {
                request.is_approved = true;
                log!(&env, "request approved", id);
                events::emit_project_approved(&env, id, request.yes_votes, request.no_votes);
            }
        }

        save_request(&env, &request);
        bump_instance(&env);

        Ok(request)
    }

    /// Replace the approval policy. Admin only.
    ///
    /// Takes effect from the next ballot; already approved requests stay approved.
    pub fn set_approval_policy(
        env: Env,
        admin: Address,
        policy: ApprovalPolicy,
    ) -> Result<(), Error> {
        admin.require_auth();

        let mut config = load_config(&env);
        if admin != config.admin {
            return Err(Error::Unauthorized);
        }
        if !policy.is_valid() {
            return Err(Error::InvalidConfig);
        }

        config.policy = policy;
        save_config(&env, &config);
        bump_instance(&env);
        Ok(())
    }

    // ─── Queries ─────────────────────────────────────────

    /// Staking record of `addr`; zero-valued if the address never joined.
    pub fn member(env: Env, addr: Address) -> Member {
        load_member(&env, &addr)
    }

    /// Read a request. Has no side effects; approval is only evaluated by `vote_on_project`.
    pub fn project_request(env: Env, id: u64) -> Result<ProjectRequest, Error> {
        load_request(&env, id).ok_or(Error::UnknownRequest)
    }

    /// `false` for unknown ids.
    pub fn is_approved(env: Env, id: u64) -> bool {
        load_request(&env, id)
            .map(|r| r.is_approved)
            .unwrap_or(false)
    }

    pub fn has_voted(env: Env, id: u64, voter: Address) -> bool {
        load_vote(&env, id, &voter).is_some()
    }

    /// The ballot `voter` cast on `id`: `Some(true)` for yes, `Some(false)` for no.
    pub fn vote_of(env: Env, id: u64, voter: Address) -> Option<bool> {
        load_vote(&env, id, &voter)
    }

    pub fn member_count(env: Env) -> u32 {
        get_member_count(&env)
    }

    pub fn total_staked(env: Env) -> i128 {
        get_total_staked(&env)
    }

    pub fn min_stake_amount(env: Env) -> i128 {
        load_config(&env).min_stake_amount
    }

    pub fn config(env: Env) -> DaoConfig {
        load_config(&env)
    }
}
