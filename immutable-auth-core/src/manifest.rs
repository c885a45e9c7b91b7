//! Contract manifests: the bundled pair list and YAML files on disk.
//!
//! # File format
//!
//! ```yaml
//! salt_policy: truncate   # or `reject`; optional
//! contracts:
//!   - name: MadToken
//!     salt: MadToken      # optional, defaults to `name`
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ManifestError;
use crate::salt::Salt;
use crate::types::{ContractName, NameSaltPair, SaltPolicy};

/// Contracts shipped with the tool, in generation order. Each salt seed is the
/// contract name.
pub const BUNDLED_CONTRACTS: [&str; 12] = [
    "ValidatorNFT",
    "MadToken",
    "StakeNFT",
    "MadByte",
    "Governance",
    "ValidatorPool",
    "ETHDKG",
    "ETHDKGAccusations",
    "Snapshots",
    "ETHDKGPhases",
    "StakeNFTLP",
    "Foundation",
];

/// Ordered list of contracts to generate plus the oversized-seed policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub salt_policy: SaltPolicy,
    pub contracts: Vec<NameSaltPair>,
}

/// On-disk shape; `salt` may be omitted.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    salt_policy: SaltPolicy,
    #[serde(default)]
    contracts: Vec<ContractEntry>,
}

#[derive(Debug, Deserialize)]
struct ContractEntry {
    name: String,
    #[serde(default)]
    salt: Option<String>,
}

impl Manifest {
    /// Manifest over `contracts` with the default policy.
    pub fn new(contracts: Vec<NameSaltPair>) -> Self {
        Manifest {
            salt_policy: SaltPolicy::default(),
            contracts,
        }
    }

    /// The bundled twelve-contract list.
    pub fn bundled() -> Self {
        Self::new(
            BUNDLED_CONTRACTS
                .iter()
                .map(|name| NameSaltPair::named(name))
                .collect(),
        )
    }

    pub fn with_policy(mut self, policy: SaltPolicy) -> Self {
        self.salt_policy = policy;
        self
    }

    /// Parse a manifest from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ManifestError> {
        let file: ManifestFile = serde_yaml::from_str(yaml)?;
        Self::from_file(file)
    }

    fn from_file(file: ManifestFile) -> Result<Self, ManifestError> {
        let mut contracts = Vec::with_capacity(file.contracts.len());
        for (index, entry) in file.contracts.into_iter().enumerate() {
            if entry.name.is_empty() {
                return Err(ManifestError::EmptyName { index });
            }
            let seed = entry.salt.unwrap_or_else(|| entry.name.clone());
            contracts.push(NameSaltPair {
                name: ContractName(entry.name),
                salt_seed: seed,
            });
        }
        Ok(Manifest {
            salt_policy: file.salt_policy,
            contracts,
        })
    }

    /// Derive every salt up front, in order.
    ///
    /// Fails on the first seed rejected by the policy, so callers never see a
    /// partial list.
    pub fn salts(&self) -> Result<Vec<(&NameSaltPair, Salt)>, ManifestError> {
        self.contracts
            .iter()
            .map(|pair| pair.salt(self.salt_policy).map(|salt| (pair, salt)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Load a manifest from a YAML file.
pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
    let bytes = std::fs::read(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = std::str::from_utf8(&bytes).map_err(|source| ManifestError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ManifestFile =
        serde_yaml::from_str(text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let manifest = Manifest::from_file(file)?;
    tracing::debug!(
        "loaded {} contract(s) from {}",
        manifest.len(),
        path.display()
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_has_twelve_contracts_in_order() {
        let m = Manifest::bundled();
        assert_eq!(m.len(), 12);
        assert_eq!(m.contracts[0].name.0, "ValidatorNFT");
        assert_eq!(m.contracts[11].name.0, "Foundation");
        assert_eq!(m.salt_policy, SaltPolicy::Truncate);
    }

    #[test]
    fn missing_salt_defaults_to_name() {
        let m = Manifest::from_yaml_str("contracts:\n  - name: ETHDKG\n").expect("parse");
        assert_eq!(m.contracts, vec![NameSaltPair::named("ETHDKG")]);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Manifest::from_yaml_str("contracts:\n  - name: A\n  - name: \"\"\n").unwrap_err();
        assert!(matches!(err, ManifestError::EmptyName { index: 1 }));
    }

    #[test]
    fn salts_fail_fast_under_reject() {
        let m = Manifest::new(vec![
            NameSaltPair::named("Ok"),
            NameSaltPair::new("TooLong", "a".repeat(40)),
        ])
        .with_policy(SaltPolicy::Reject);
        assert!(matches!(
            m.salts().unwrap_err(),
            ManifestError::SaltTooLong { len: 40, .. }
        ));
    }
}
