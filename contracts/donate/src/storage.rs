// contracts/donate/src/storage.rs
//
// Layout:
//   instance   DataKey::Config                      → DonateConfig
//   instance   DataKey::TotalRouted                 → i128
//   persistent DataKey::Contribution(donor, id)     → i128

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{types::DonateConfig, DataKey, Error};

const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
const PERSISTENT_THRESHOLD_LEDGERS: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;
const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
const INSTANCE_THRESHOLD_LEDGERS: u32 = INSTANCE_BUMP_LEDGERS - 17_280;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

pub fn save_config(env: &Env, config: &DonateConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn load_config(env: &Env) -> DonateConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn get_total_routed(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRouted)
        .unwrap_or(0)
}

pub fn set_total_routed(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalRouted, &total);
}

/// Amount `donor` has given to `project_id` through this router. 0 if never.
pub fn get_contribution(env: &Env, donor: &Address, project_id: u64) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(donor.clone(), project_id))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, donor: &Address, project_id: u64, amount: i128) {
    let key = DataKey::Contribution(donor.clone(), project_id);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_THRESHOLD_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}
