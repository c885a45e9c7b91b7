//! Domain types for immutable-auth generation.
//!
//! Contract names are passed through to the generated source verbatim; they
//! are never checked against Solidity identifier rules.

use std::fmt;

use serde::Deserialize;

use crate::error::ManifestError;
use crate::salt::{Salt, SALT_LEN};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Identifier fragment used for `immutable<Name>`, `_<Name>`, `only<Name>`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractName(pub String);

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ContractName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContractName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Oversized seed policy
// ---------------------------------------------------------------------------

/// What to do with a salt seed whose UTF-8 encoding exceeds 32 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaltPolicy {
    /// Keep the first 32 bytes and log a warning.
    #[default]
    Truncate,
    /// Fail with [`ManifestError::SaltTooLong`].
    Reject,
}

impl fmt::Display for SaltPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SaltPolicy::Truncate => "truncate",
            SaltPolicy::Reject => "reject",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// NameSaltPair
// ---------------------------------------------------------------------------

/// One generated contract: its name and the string whose bytes seed its salt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSaltPair {
    pub name: ContractName,
    pub salt_seed: String,
}

impl NameSaltPair {
    pub fn new(name: impl Into<ContractName>, salt_seed: impl Into<String>) -> Self {
        NameSaltPair {
            name: name.into(),
            salt_seed: salt_seed.into(),
        }
    }

    /// Pair whose salt seed is the contract name itself.
    pub fn named(name: &str) -> Self {
        Self::new(name, name)
    }

    /// Derive the 32-byte salt for this pair under `policy`.
    pub fn salt(&self, policy: SaltPolicy) -> Result<Salt, ManifestError> {
        let seed = self.salt_seed.as_bytes();
        if seed.len() > SALT_LEN {
            match policy {
                SaltPolicy::Reject => {
                    return Err(ManifestError::SaltTooLong {
                        name: self.name.0.clone(),
                        len: seed.len(),
                    });
                }
                SaltPolicy::Truncate => {
                    tracing::warn!(
                        "salt seed for {} is {} bytes; truncating to {}",
                        self.name,
                        seed.len(),
                        SALT_LEN
                    );
                }
            }
        }
        Ok(Salt::truncating(seed))
    }
}
