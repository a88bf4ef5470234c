use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberJoined {
    pub member: Address,
    pub amount: i128,
    pub total_staked: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestReceived {
    pub project_id: u64,
    pub owner: Address,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    pub project_id: u64,
    pub voter: Address,
    pub support: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectApproved {
    pub project_id: u64,
    pub yes_votes: u32,
    pub no_votes: u32,
}

pub fn emit_member_joined(env: &Env, member: Address, amount: i128, total_staked: i128) {
    let topics = (symbol_short!("joined"), member.clone());
    let data = MemberJoined {
        member,
        amount,
        total_staked,
    };
    env.events().publish(topics, data);
}

pub fn emit_request_received(env: &Env, project_id: u64, owner: Address, name: String) {
    let topics = (symbol_short!("received"), project_id);
    let data = RequestReceived {
        project_id,
        owner,
        name,
    };
    env.events().publish(topics, data);
}

pub fn emit_vote_cast(env: &Env, project_id: u64, voter: Address, support: bool) {
    let topics = (symbol_short!("voted"), project_id);
    let data = VoteCast {
        project_id,
        voter,
        support,
    };
    env.events().publish(topics, data);
}

pub fn emit_project_approved(env: &Env, project_id: u64, yes_votes: u32, no_votes: u32) {
    let topics = (symbol_short!("approved"), project_id);
    let data = ProjectApproved {
        project_id,
        yes_votes,
        no_votes,
    };
    env.events().publish(topics, data);
}
