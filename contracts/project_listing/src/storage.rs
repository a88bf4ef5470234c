// contracts/project_listing/src/storage.rs
//
// Storage helpers for ProjectListing.
//
// Layout:
//   instance   DataKey::Config         → ListingConfig
//   instance   DataKey::ProjectCount   → u64 (last id handed out)
//   instance   DataKey::DaoContract    → Address  (unset until wired)
//   instance   DataKey::DonateContract → Address  (unset until wired)
//   instance   DataKey::CollectedFees  → i128
//   persistent DataKey::Project(id)    → Project

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    types::{ListingConfig, Project},
    DataKey, Error,
};

const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
const PERSISTENT_THRESHOLD_LEDGERS: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;
const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
const INSTANCE_THRESHOLD_LEDGERS: u32 = INSTANCE_BUMP_LEDGERS - 17_280;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

// ─────────────────────────────────────────────────────────
// Config and wiring
// ─────────────────────────────────────────────────────────

pub fn save_config(env: &Env, config: &ListingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn load_config(env: &Env) -> ListingConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn get_dao_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::DaoContract)
}

pub fn set_dao_contract(env: &Env, dao: &Address) {
    env.storage().instance().set(&DataKey::DaoContract, dao);
}

pub fn get_donate_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::DonateContract)
}

pub fn set_donate_contract(env: &Env, donate: &Address) {
    env.storage().instance().set(&DataKey::DonateContract, donate);
}

// ─────────────────────────────────────────────────────────
// Fee ledger
// ─────────────────────────────────────────────────────────

pub fn get_collected_fees(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CollectedFees)
        .unwrap_or(0)
}

pub fn set_collected_fees(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::CollectedFees, &amount);
}

// ─────────────────────────────────────────────────────────
// Project counter
// ─────────────────────────────────────────────────────────

pub fn get_project_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(0)
}

/// Advance the project counter and return the id for the new project.
/// Ids start at 1.
pub fn next_project_id(env: &Env) -> u64 {
    let id = get_project_count(env) + 1;
    env.storage().instance().set(&DataKey::ProjectCount, &id);
    id
}

// ─────────────────────────────────────────────────────────
// Project CRUD
// ─────────────────────────────────────────────────────────

/// Persist a project. Overwrites any existing record at the same id.
pub fn save_project(env: &Env, project: &Project) {
    let key = DataKey::Project(project.id);
    env.storage().persistent().set(&key, project);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_THRESHOLD_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

pub fn load_project(env: &Env, id: u64) -> Option<Project> {
    env.storage().persistent().get(&DataKey::Project(id))
}
