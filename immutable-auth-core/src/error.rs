//! Error types for immutable-auth-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading a manifest or deriving salts.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Underlying I/O failure reading a manifest file.
    #[error("I/O error reading manifest at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not valid UTF-8.
    #[error("manifest at {path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    /// YAML parse error on an in-memory manifest.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load, with the file path.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A contract entry had an empty name.
    #[error("contract entry #{index} has an empty name")]
    EmptyName { index: usize },

    /// A salt seed encodes to more than 32 bytes under [`SaltPolicy::Reject`].
    ///
    /// [`SaltPolicy::Reject`]: crate::types::SaltPolicy::Reject
    #[error("salt seed for {name} is {len} bytes; at most 32 are allowed")]
    SaltTooLong { name: String, len: usize },
}
