//! SZ CLI - Swift documentation site configuration.
//!
//! Provides commands for:
//! - `build`: Generate the site engine configuration
//! - `check`: Check navigation structure and sidebar documents
//! - `sidebar`: Show the sidebar that applies to a page

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, SidebarArgs};
use output::Output;

/// SZ - Swift documentation site configuration.
#[derive(Parser)]
#[command(name = "sz", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site configuration.
    Build(BuildArgs),
    /// Check navigation structure.
    Check(CheckArgs),
    /// Show the sidebar for a page.
    Sidebar(SidebarArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
