// contracts/dao/src/types.rs
//
// Records kept by the DAO:
//   - Member         one per address that has ever staked enough to join
//   - ProjectRequest one per project forwarded by the listing registry
//   - DaoConfig      constructor parameters plus the active approval policy
//
// Ballots are not a struct of their own; they live under DataKey::Vote(id, voter)
// as the `support` flag so a second vote from the same voter can be detected.

use soroban_sdk::{contracttype, Address, String};

/// Basis-point denominator used by quorum policies.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Staking record of an account.
///
/// Unknown accounts read back as the zero-valued record (`is_member == false`,
/// `staked_amount == 0`), the same as an unset entry in a public mapping.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub is_member: bool,
    /// Total value held by the DAO for this account. Accumulates across joins.
    pub staked_amount: i128,
}

impl Member {
    pub fn empty() -> Self {
        Member {
            is_member: false,
            staked_amount: 0,
        }
    }
}

/// DAO-side view of a listed project awaiting, or having received, votes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectRequest {
    /// Same id the listing registry assigned to the project.
    pub id: u64,
    pub project_owner: Address,
    pub name: String,
    pub description: String,
    pub yes_votes: u32,
    pub no_votes: u32,
    /// Set once the approval policy is met. Never cleared.
    pub is_approved: bool,
}

/// Rule deciding when a request becomes approved.
///
/// Every variant requires strictly more yes than no votes; a tie never approves.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApprovalPolicy {
    /// `yes > no`.
    Majority,
    /// `yes > no` and yes votes cover at least this many basis points of the membership.
    MajorityWithQuorum(u32),
}

impl ApprovalPolicy {
    /// Pure evaluation of the policy against a tally and the current membership size.
    pub fn is_satisfied(&self, yes_votes: u32, no_votes: u32, member_count: u32) -> bool {
        if yes_votes <= no_votes {
            return false;
        }
        match *self {
            ApprovalPolicy::Majority => true,
            ApprovalPolicy::MajorityWithQuorum(bps) => {
                // u64 keeps both products exact for any u32 inputs.
                (yes_votes as u64) * (BPS_DENOMINATOR as u64) >= (bps as u64) * (member_count as u64)
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        match *self {
            ApprovalPolicy::Majority => true,
            ApprovalPolicy::MajorityWithQuorum(bps) => bps <= BPS_DENOMINATOR,
        }
    }
}

/// Constructor parameters, kept in instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoConfig {
    /// May change the approval policy.
    pub admin: Address,
    /// Only principal allowed to submit project requests.
    pub listing_registry: Address,
    /// Asset contract members stake with.
    pub stake_token: Address,
    pub min_stake_amount: i128,
    pub policy: ApprovalPolicy,
}
