//! immutable-auth core library — contract pairs, salt derivation, manifests.
//!
//! - [`types`] — contract names, name/salt pairs, the oversized-seed policy
//! - [`salt`] — fixed-width 32-byte salts
//! - [`manifest`] — bundled pair list and YAML manifest loading
//! - [`error`] — [`ManifestError`]

pub mod error;
pub mod manifest;
pub mod salt;
pub mod types;

pub use error::ManifestError;
pub use manifest::Manifest;
pub use salt::{Salt, SALT_LEN};
pub use types::{ContractName, NameSaltPair, SaltPolicy};
