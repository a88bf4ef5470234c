// End-to-end platform scenarios: join, list, vote, donate.

extern crate std;

use proptest::prelude::*;
use std::vec::Vec;

use crate::test::{balance, deploy, funded, join, list, list_approved, FEE, MIN_STAKE};
use crate::Error;

#[test]
fn test_listing_voting_and_donating() {
    let p = deploy(true);

    let user1 = join(&p);
    let user2 = join(&p);
    assert!(p.dao.member(&user1).is_member);
    assert_eq!(p.dao.member(&user2).staked_amount, MIN_STAKE);

    let (owner, id) = list(&p, "Solar Power Plant");
    assert_eq!(id, 1);
    assert!(p.listing.get_project(&1).is_listed);
    assert_eq!(p.dao.project_request(&1).project_owner, owner);

    p.dao.vote_on_project(&user1, &1, &true);
    p.dao.vote_on_project(&user2, &1, &true);
    let request = p.dao.project_request(&1);
    assert_eq!(request.yes_votes, 2);
    assert_eq!(request.no_votes, 0);
    assert!(request.is_approved);

    let donor = funded(&p, 5);
    p.donate.donate(&donor, &1, &5);
    assert_eq!(p.listing.get_project(&1).total_donations, 5);
    assert_eq!(balance(&p, &owner), 5);

    // Fee stays in the registry, stakes in the DAO.
    assert_eq!(balance(&p, &p.listing.address), FEE);
    assert_eq!(balance(&p, &p.dao.address), 2 * MIN_STAKE);
}

#[test]
fn test_tied_vote_blocks_donations() {
    let p = deploy(true);
    let user1 = join(&p);
    let user2 = join(&p);
    let (_, id) = list(&p, "Wind Farm");

    p.dao.vote_on_project(&user1, &id, &true);
    p.dao.vote_on_project(&user2, &id, &false);

    let request = p.dao.project_request(&id);
    assert_eq!((request.yes_votes, request.no_votes), (1, 1));
    assert!(!request.is_approved);

    let donor = funded(&p, 5);
    assert_eq!(
        p.donate.try_donate(&donor, &id, &5),
        Err(Ok(Error::ProjectNotApproved))
    );
}

#[test]
fn test_request_ids_follow_listing_ids() {
    let p = deploy(true);
    let ids: Vec<u64> = ["a", "b", "c"].iter().map(|n| list(&p, n).1).collect();

    assert_eq!(ids, std::vec![1, 2, 3]);
    for id in ids {
        assert_eq!(
            p.dao.project_request(&id).name,
            p.listing.get_project(&id).name
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn donation_total_is_monotonic_sum(amounts in proptest::collection::vec(1i128..1_000, 1..8)) {
        let p = deploy(true);
        let (owner, id) = list_approved(&p);
        let donor = funded(&p, amounts.iter().sum());

        let mut previous = 0i128;
        for amount in &amounts {
            let total = p.donate.donate(&donor, &id, amount);
            prop_assert!(total > previous);
            prop_assert_eq!(total, previous + amount);
            previous = total;
        }

        let sum: i128 = amounts.iter().sum();
        prop_assert_eq!(p.listing.get_project(&id).total_donations, sum);
        prop_assert_eq!(p.donate.contribution(&donor, &id), sum);
        prop_assert_eq!(balance(&p, &owner), sum);
    }
}
