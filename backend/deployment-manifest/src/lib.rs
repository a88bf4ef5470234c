pub mod error;
pub mod manifest;

pub use error::{ManifestError, Problem};
pub use manifest::{
    is_contract_address, load_interface, ContractRecord, Manifest, REQUIRED_CONTRACTS,
};
