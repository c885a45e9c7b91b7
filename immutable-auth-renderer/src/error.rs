//! Error types for immutable-auth-renderer.

use std::path::PathBuf;

use thiserror::Error;

use immutable_auth_core::ManifestError;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Salt derivation failed for a manifest entry.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
