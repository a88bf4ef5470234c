use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceived {
    pub project_id: u64,
    pub donor: Address,
    pub amount: i128,
}

pub fn emit_donation_received(env: &Env, project_id: u64, donor: Address, amount: i128) {
    let topics = (symbol_short!("donated"), project_id);
    let data = DonationReceived {
        project_id,
        donor,
        amount,
    };
    env.events().publish(topics, data);
}
