use std::path::PathBuf;

use thiserror::Error;

/// A single inconsistency found by [`crate::Manifest::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Problem {
    #[error("contract `{0}` is not recorded")]
    Missing(String),

    #[error("contract `{name}` has invalid address `{address}`")]
    InvalidAddress { name: String, address: String },

    #[error("contracts `{first}` and `{second}` share address `{address}`")]
    SharedAddress {
        first: String,
        second: String,
        address: String,
    },

    #[error("contract `{0}` has no recorded interface")]
    MissingInterface(String),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path} is not a contract interface (expected a JSON array of spec entries)")]
    InvalidInterface { path: PathBuf },

    #[error("`{address}` is not a contract address (expected a C... strkey) for `{name}`")]
    InvalidAddress { name: String, address: String },

    #[error("manifest failed verification with {} problem(s)", .0.len())]
    Verification(Vec<Problem>),
}
