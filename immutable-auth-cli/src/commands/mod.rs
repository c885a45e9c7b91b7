pub mod diff;
pub mod generate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use immutable_auth_core::{manifest, Manifest};
use immutable_auth_renderer::Renderer;

/// Where the contract list and templates come from.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// YAML manifest listing contracts; defaults to the bundled list.
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Directory of `.tera` files overriding the embedded templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl SourceArgs {
    pub fn manifest(&self) -> Result<Manifest> {
        match &self.manifest {
            Some(path) => manifest::load(path)
                .with_context(|| format!("failed to load manifest {}", path.display())),
            None => Ok(Manifest::bundled()),
        }
    }

    pub fn renderer(&self) -> Result<Renderer> {
        let renderer = match &self.templates {
            Some(dir) => Renderer::with_templates(dir)
                .with_context(|| format!("failed to load templates from {}", dir.display()))?,
            None => Renderer::new().context("failed to build template engine")?,
        };
        Ok(renderer)
    }
}
