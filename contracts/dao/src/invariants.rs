// Property tests for the vote tally.
//
// Drives random ballot sequences from a small member pool and checks that
//   - each member contributes at most one ballot per request,
//   - yes + no equals the number of distinct successful voters,
//   - approval never flips back once set, even across a policy change,
//   - approval matches the policy in force at the moment it is set.

extern crate std;

use proptest::prelude::*;
use soroban_sdk::{testutils::Address as _, token, Address, Env, String};
use std::vec::Vec;

use crate::{ApprovalPolicy, Dao, DaoClient, Error};

const MIN_STAKE: i128 = 10;
const POOL: usize = 5;

/// Runs `ballots` under `initial`, switching to `later` just before ballot `switch_at`.
fn run_ballots(
    ballots: &[(usize, bool)],
    initial: ApprovalPolicy,
    later: ApprovalPolicy,
    switch_at: usize,
) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let listing = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(
        Dao,
        (admin.clone(), listing.clone(), token.clone(), MIN_STAKE),
    );
    let client = DaoClient::new(&env, &contract_id);
    client.set_approval_policy(&admin, &initial);

    let members: Vec<Address> = (0..POOL)
        .map(|_| {
            let m = Address::generate(&env);
            token::StellarAssetClient::new(&env, &token).mint(&m, &MIN_STAKE);
            client.join_dao(&m, &MIN_STAKE);
            m
        })
        .collect();

    client.receive_project_request(
        &listing,
        &1,
        &members[0],
        &String::from_str(&env, "p"),
        &String::from_str(&env, "d"),
    );

    let mut voted = [false; POOL];
    let mut yes = 0u32;
    let mut no = 0u32;
    let mut approved = false;
    let mut policy = initial;
    let mut seen_approved = false;

    for (step, &(idx, support)) in ballots.iter().enumerate() {
        if step == switch_at {
            client.set_approval_policy(&admin, &later);
            policy = later;
            assert_eq!(client.is_approved(&1), approved);
        }

        let result = client.try_vote_on_project(&members[idx], &1, &support);
        if voted[idx] {
            assert_eq!(result, Err(Ok(Error::AlreadyVoted)));
        } else {
            assert!(result.is_ok());
            voted[idx] = true;
            if support {
                yes += 1;
            } else {
                no += 1;
            }
            if !approved && policy.is_satisfied(yes, no, POOL as u32) {
                approved = true;
            }
        }

        let request = client.project_request(&1);
        let distinct = voted.iter().filter(|v| **v).count() as u32;
        assert_eq!(request.yes_votes, yes);
        assert_eq!(request.no_votes, no);
        assert_eq!(request.yes_votes + request.no_votes, distinct);
        assert_eq!(request.is_approved, approved);
        assert!(request.is_approved || !seen_approved);
        seen_approved = request.is_approved;
    }
}

fn policy() -> impl Strategy<Value = ApprovalPolicy> {
    prop_oneof![
        Just(ApprovalPolicy::Majority),
        (0u32..=10_000).prop_map(ApprovalPolicy::MajorityWithQuorum),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn tally_matches_distinct_voters(
        ballots in proptest::collection::vec((0..POOL, any::<bool>()), 0..12),
        initial in policy(),
        later in policy(),
        switch_at in 0usize..12,
    ) {
        run_ballots(&ballots, initial, later, switch_at);
    }
}
