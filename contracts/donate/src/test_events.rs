extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::Events,
    vec, IntoVal, TryIntoVal,
};

use crate::events::DonationReceived;
use crate::test::{deploy, funded, list_approved};

#[test]
fn test_donation_received_event() {
    let p = deploy(true);
    let (_, id) = list_approved(&p);
    let donor = funded(&p, 5);

    p.donate.donate(&donor, &id, &5);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("donated"), project_id)
    assert_eq!(last_event.0, p.donate.address);
    let expected_topics = vec![
        &p.env,
        symbol_short!("donated").into_val(&p.env),
        id.into_val(&p.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: DonationReceived = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(
        event_data,
        DonationReceived {
            project_id: id,
            donor,
            amount: 5,
        }
    );
}
