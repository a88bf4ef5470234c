use soroban_sdk::{contracttype, Address, String};

/// Length of one paid subscription, in ledger seconds (30 days).
pub const SUBSCRIPTION_PERIOD: u64 = 30 * 24 * 60 * 60;

/// A project published in the registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Sequential id starting at 1. The DAO request for this project uses the same id.
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Address that paid the fee and receives donations.
    pub owner: Address,
    /// Ledger timestamp at which the paid subscription lapses.
    pub subscription_end_time: u64,
    pub is_listed: bool,
    /// Sum of all donations credited through the donate contract. Never decreases.
    pub total_donations: i128,
}

impl Project {
    pub fn is_subscription_active(&self, now: u64) -> bool {
        self.is_listed && now < self.subscription_end_time
    }
}

/// Constructor parameters, kept in instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingConfig {
    /// Deployer; the only address allowed to wire contracts and withdraw fees.
    pub admin: Address,
    /// Asset the subscription fee is paid in.
    pub payment_token: Address,
    pub subscription_fee: i128,
}
