extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{MemberJoined, ProjectApproved, RequestReceived, VoteCast};
use crate::{Dao, DaoClient};

const MIN_STAKE: i128 = 100;

fn setup() -> (Env, DaoClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let listing = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    let contract_id = env.register(
        Dao,
        (admin, listing.clone(), token.clone(), MIN_STAKE),
    );
    let client = DaoClient::new(&env, &contract_id);
    (env, client, listing, token)
}

fn join(env: &Env, client: &DaoClient, token: &Address) -> Address {
    let user = Address::generate(env);
    token::StellarAssetClient::new(env, token).mint(&user, &MIN_STAKE);
    client.join_dao(&user, &MIN_STAKE);
    user
}

#[test]
fn test_member_joined_event() {
    let (env, client, _, token) = setup();
    let user = join(&env, &client, &token);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("joined").into_val(&env),
        user.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: MemberJoined = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        MemberJoined {
            member: user,
            amount: MIN_STAKE,
            total_staked: MIN_STAKE,
        }
    );
}

#[test]
fn test_request_received_event() {
    let (env, client, listing, _) = setup();
    let owner = Address::generate(&env);
    let name = String::from_str(&env, "Solar Plant");

    client.receive_project_request(
        &listing,
        &3,
        &owner,
        &name,
        &String::from_str(&env, "Renewable energy project"),
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("received").into_val(&env),
        3u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: RequestReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RequestReceived {
            project_id: 3,
            owner,
            name,
        }
    );
}

#[test]
fn test_vote_cast_event_without_approval() {
    let (env, client, listing, token) = setup();
    let user = join(&env, &client, &token);
    client.receive_project_request(
        &listing,
        &1,
        &user,
        &String::from_str(&env, "Wind Farm"),
        &String::from_str(&env, "Green Energy"),
    );

    client.vote_on_project(&user, &1, &false);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("voted").into_val(&env),
        1u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: VoteCast = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        VoteCast {
            project_id: 1,
            voter: user,
            support: false,
        }
    );
}

#[test]
fn test_project_approved_event() {
    let (env, client, listing, token) = setup();
    let user = join(&env, &client, &token);
    client.receive_project_request(
        &listing,
        &1,
        &user,
        &String::from_str(&env, "Wind Farm"),
        &String::from_str(&env, "Green Energy"),
    );

    client.vote_on_project(&user, &1, &true);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("approved").into_val(&env),
        1u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectApproved = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProjectApproved {
            project_id: 1,
            yes_votes: 1,
            no_votes: 0,
        }
    );
}
