// contracts/dao/src/storage.rs
//
// Storage helpers for the DAO contract.
//
// Layout:
//   instance   DataKey::Config              → DaoConfig
//   instance   DataKey::MemberCount         → u32
//   instance   DataKey::TotalStaked         → i128
//   persistent DataKey::Member(addr)        → Member
//   persistent DataKey::Request(id)         → ProjectRequest
//   persistent DataKey::Vote(id, voter)     → bool (support)

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    types::{DaoConfig, Member, ProjectRequest},
    DataKey, Error,
};

/// ~30 days at 5s per ledger.
const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
const PERSISTENT_THRESHOLD_LEDGERS: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;
const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
const INSTANCE_THRESHOLD_LEDGERS: u32 = INSTANCE_BUMP_LEDGERS - 17_280;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

// ─────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────

pub fn save_config(env: &Env, config: &DaoConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Load the config written by the constructor. Panics with `Error::NotInitialized` if missing.
pub fn load_config(env: &Env) -> DaoConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

// ─────────────────────────────────────────────────────────
// Members
// ─────────────────────────────────────────────────────────

/// Read a member record. Unknown addresses yield the zero-valued record.
pub fn load_member(env: &Env, addr: &Address) -> Member {
    env.storage()
        .persistent()
        .get(&DataKey::Member(addr.clone()))
        .unwrap_or_else(Member::empty)
}

pub fn save_member(env: &Env, addr: &Address, member: &Member) {
    let key = DataKey::Member(addr.clone());
    env.storage().persistent().set(&key, member);
    bump_persistent(env, &key);
}

pub fn get_member_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::MemberCount)
        .unwrap_or(0)
}

/// Increment the member counter and return the new count.
pub fn increment_member_count(env: &Env) -> u32 {
    let count = get_member_count(env) + 1;
    env.storage().instance().set(&DataKey::MemberCount, &count);
    count
}

pub fn get_total_staked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0)
}

pub fn set_total_staked(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalStaked, &total);
}

// ─────────────────────────────────────────────────────────
// Project requests
// ─────────────────────────────────────────────────────────

pub fn has_request(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Request(id))
}

pub fn load_request(env: &Env, id: u64) -> Option<ProjectRequest> {
    env.storage().persistent().get(&DataKey::Request(id))
}

/// Persist a request. Overwrites any existing record at the same id.
pub fn save_request(env: &Env, request: &ProjectRequest) {
    let key = DataKey::Request(request.id);
    env.storage().persistent().set(&key, request);
    bump_persistent(env, &key);
}

// ─────────────────────────────────────────────────────────
// Ballots
// ─────────────────────────────────────────────────────────

/// The recorded ballot of `voter` on request `id`, if any.
pub fn load_vote(env: &Env, id: u64, voter: &Address) -> Option<bool> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(id, voter.clone()))
}

pub fn save_vote(env: &Env, id: u64, voter: &Address, support: bool) {
    let key = DataKey::Vote(id, voter.clone());
    env.storage().persistent().set(&key, &support);
    bump_persistent(env, &key);
}
