use soroban_sdk::{contracttype, Address};

/// Constructor parameters, kept in instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonateConfig {
    pub listing_registry: Address,
    pub dao: Address,
    /// Asset donations are made in.
    pub payment_token: Address,
    /// When set, only DAO-approved projects accept donations.
    pub require_approval: bool,
}
