//! immutable-auth — Solidity access-control contract generator.
//!
//! # Usage
//!
//! ```text
//! immutable-auth                                   # bundled contracts to stdout
//! immutable-auth generate [--manifest FILE] [--templates DIR] [--output FILE]
//! immutable-auth diff FILE [--manifest FILE] [--templates DIR]
//! ```

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, generate::GenerateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "immutable-auth",
    version,
    about = "Generate immutable factory access-control contracts",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the contracts document (the default when no command is given).
    Generate(GenerateArgs),

    /// Show a unified diff between the rendered document and FILE.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        None => GenerateArgs::default().run(),
        Some(Commands::Generate(args)) => args.run(),
        Some(Commands::Diff(args)) => args.run(),
    }
}
