use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectListed {
    pub project_id: u64,
    pub owner: Address,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscriptionRenewed {
    pub project_id: u64,
    pub subscription_end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationRecorded {
    pub project_id: u64,
    pub amount: i128,
    pub total_donations: i128,
}

pub fn emit_project_listed(env: &Env, project_id: u64, owner: Address, name: String) {
    let topics = (symbol_short!("listed"), project_id);
    let data = ProjectListed {
        project_id,
        owner,
        name,
    };
    env.events().publish(topics, data);
}

pub fn emit_subscription_renewed(env: &Env, project_id: u64, subscription_end_time: u64) {
    let topics = (symbol_short!("renewed"), project_id);
    let data = SubscriptionRenewed {
        project_id,
        subscription_end_time,
    };
    env.events().publish(topics, data);
}

pub fn emit_donation_recorded(env: &Env, project_id: u64, amount: i128, total_donations: i128) {
    let topics = (symbol_short!("credited"), project_id);
    let data = DonationRecorded {
        project_id,
        amount,
        total_donations,
    };
    env.events().publish(topics, data);
}
