//! # regc CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Regulatory Compliance Core CLI.
///
/// Validates knowledge-base catalogs, classifies operator profiles,
/// computes applicability assessments, and reports cross-domain
/// provision overlaps.
#[derive(Parser, Debug)]
#[command(name = "regc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a catalog file and print its summary.
    Validate(regc_cli::validate::ValidateArgs),
    /// Classify a profile under one domain.
    Classify(regc_cli::classify::ClassifyArgs),
    /// Compute a full assessment for a profile.
    Assess(regc_cli::assess::AssessArgs),
    /// Report live cross-domain overlaps for a profile.
    Overlaps(regc_cli::overlaps::OverlapsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => regc_cli::validate::run(&args),
        Commands::Classify(args) => regc_cli::classify::run(&args),
        Commands::Assess(args) => regc_cli::assess::run(&args),
        Commands::Overlaps(args) => regc_cli::overlaps::run(&args),
    }
}
