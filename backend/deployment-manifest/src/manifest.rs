//! The persisted deployment record.
//!
//! One JSON document per network mapping a contract name to its deployed
//! address, its interface (the contract spec, Soroban's ABI), the wasm it was
//! built from and the constructor parameters it was deployed with. Front-end and indexer tooling read it to find the contracts.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{ManifestError, Problem};

/// Contract names every complete deployment must record.
pub const REQUIRED_CONTRACTS: [&str; 3] = ["project_listing", "dao", "donate"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wasm: Option<String>,
    /// Contract spec entries as printed by
    /// `stellar contract info interface --output json-formatted`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<Value>,
    /// Constructor parameters as given at deploy time, e.g. `subscription_fee`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub network: String,
    #[serde(default)]
    pub contracts: BTreeMap<String, ContractRecord>,
}

/// Whether `address` is a well-formed Soroban contract strkey.
pub fn is_contract_address(address: &str) -> bool {
    stellar_strkey::Contract::from_string(address).is_ok()
}

impl ContractRecord {
    pub fn new(address: impl Into<String>) -> Self {
        ContractRecord {
            address: address.into(),
            wasm: None,
            interface: None,
            params: BTreeMap::new(),
        }
    }

    pub fn has_interface(&self) -> bool {
        matches!(&self.interface, Some(Value::Array(entries)) if !entries.is_empty())
    }
}

/// Read a contract interface file. It must hold a non-empty JSON array.
pub fn load_interface(path: &Path) -> Result<Value, ManifestError> {
    let json = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let interface: Value = serde_json::from_str(&json)?;
    let entries = interface.as_array().map_or(0, Vec::len);
    if entries == 0 {
        return Err(ManifestError::InvalidInterface {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), entries, "interface loaded");
    Ok(interface)
}

impl Manifest {
    pub fn new(network: impl Into<String>) -> Self {
        Manifest {
            network: network.into(),
            contracts: BTreeMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let json = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json(&json)?;
        debug!(path = %path.display(), contracts = manifest.contracts.len(), "manifest loaded");
        Ok(manifest)
    }

    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        let json = self.to_json()?;
        fs::write(path, json + "\n").map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), network = %self.network, "manifest saved");
        Ok(())
    }

    /// Insert or replace the record for `name`. Returns the record it replaced.
    pub fn record(
        &mut self,
        name: &str,
        record: ContractRecord,
    ) -> Result<Option<ContractRecord>, ManifestError> {
        if !is_contract_address(&record.address) {
            return Err(ManifestError::InvalidAddress {
                name: name.to_string(),
                address: record.address,
            });
        }
        let previous = self.contracts.insert(name.to_string(), record);
        if let Some(old) = &previous {
            warn!(contract = name, old = %old.address, "replacing recorded address");
        }
        Ok(previous)
    }

    pub fn address_of(&self, name: &str) -> Option<&str> {
        self.contracts.get(name).map(|r| r.address.as_str())
    }

    /// Every problem that would keep the platform from being wired correctly.
    /// Empty when the deployment is complete.
    pub fn verify(&self) -> Vec<Problem> {
        let mut problems = Vec::new();

        for name in REQUIRED_CONTRACTS {
            if !self.contracts.contains_key(name) {
                problems.push(Problem::Missing(name.to_string()));
            }
        }

        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        for (name, record) in &self.contracts {
            if !is_contract_address(&record.address) {
                problems.push(Problem::InvalidAddress {
                    name: name.clone(),
                    address: record.address.clone(),
                });
                continue;
            }
            if let Some(first) = seen.insert(record.address.as_str(), name.as_str()) {
                problems.push(Problem::SharedAddress {
                    first: first.to_string(),
                    second: name.clone(),
                    address: record.address.clone(),
                });
            }
            if !record.has_interface() {
                problems.push(Problem::MissingInterface(name.clone()));
            }
        }

        problems
    }

    /// [`Manifest::verify`] as a `Result`.
    pub fn ensure_complete(&self) -> Result<(), ManifestError> {
        let problems = self.verify();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ManifestError::Verification(problems))
        }
    }
}
