// Clients for the two contracts the router consults.
//
// `Project` mirrors the registry's record field for field so it decodes from the
// value `record_donation` returns.

use soroban_sdk::{contractclient, contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub owner: Address,
    pub subscription_end_time: u64,
    pub is_listed: bool,
    pub total_donations: i128,
}

#[allow(dead_code)]
#[contractclient(name = "RegistryClient")]
pub trait RegistryInterface {
    fn is_listed(env: Env, project_id: u64) -> bool;

    fn record_donation(env: Env, caller: Address, project_id: u64, amount: i128) -> Project;
}

#[allow(dead_code)]
#[contractclient(name = "VotingClient")]
pub trait VotingInterface {
    fn is_approved(env: Env, id: u64) -> bool;
}
