// Client for the DAO entry point the registry forwards listings to.

use soroban_sdk::{contractclient, Address, Env, String};

#[allow(dead_code)]
#[contractclient(name = "VotingClient")]
pub trait VotingInterface {
    fn receive_project_request(
        env: Env,
        caller: Address,
        id: u64,
        owner: Address,
        name: String,
        description: String,
    );
}
