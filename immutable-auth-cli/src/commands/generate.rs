//! `immutable-auth generate` — render the document to stdout or a file.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use immutable_auth_sync::{write_document, WriteResult};

use super::SourceArgs;

/// Arguments for `immutable-auth generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write to FILE instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn run(self) -> Result<ExitCode> {
        let manifest = self.source.manifest()?;
        let renderer = self.source.renderer()?;
        tracing::debug!(
            "generating {} contract(s), salt policy {}",
            manifest.len(),
            manifest.salt_policy
        );

        match &self.output {
            Some(path) => {
                let result = write_document(&renderer, &manifest, path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                match result {
                    WriteResult::Written { path } => println!("wrote: {}", path.display()),
                    WriteResult::Unchanged { path } => println!("unchanged: {}", path.display()),
                }
            }
            None => {
                let doc = renderer.render(&manifest).context("render failed")?;
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(doc.as_bytes())
                    .context("failed to write to stdout")?;
                stdout.flush().context("failed to flush stdout")?;
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}
