//! `immutable-auth diff` — show what `generate --output FILE` would change.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use immutable_auth_sync::diff_document;

use super::SourceArgs;

/// Arguments for `immutable-auth diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Previously generated document to compare against.
    pub file: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl DiffArgs {
    /// Exit code 0 when `file` is up to date, 1 otherwise.
    pub fn run(self) -> Result<ExitCode> {
        let manifest = self.source.manifest()?;
        let renderer = self.source.renderer()?;
        let diff = diff_document(&renderer, &manifest, &self.file)
            .with_context(|| format!("failed to diff {}", self.file.display()))?;

        if diff.is_up_to_date() {
            println!("up to date: {}", diff.path.display());
            return Ok(ExitCode::SUCCESS);
        }
        if !diff.exists {
            println!("missing: {}", diff.path.display());
        }
        print!("{}", diff.unified_diff);
        Ok(ExitCode::from(1))
    }
}
