//! # Classify Subcommand
//!
//! Runs the classification engine alone: profile in, classification out.
//! Useful for checking tier and regime eligibility without computing a
//! full assessment.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use regc_core::DomainId;
use regc_kb::Catalog;

use crate::input::load_profile;

/// Arguments for the classify subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Catalog file (.json, .yaml, or .yml).
    #[arg(long)]
    pub catalog: PathBuf,

    /// Profile file (.json, .yaml, or .yml).
    #[arg(long)]
    pub profile: PathBuf,

    /// Regulatory domain to classify under.
    #[arg(long)]
    pub domain: String,
}

/// Classify the profile and print the result as JSON.
pub fn run(args: &ClassifyArgs) -> anyhow::Result<()> {
    let catalog = Catalog::load_path(&args.catalog)?;
    let profile = load_profile(&args.profile)?;
    let domain_id = DomainId::new(args.domain.clone())?;
    let domain = catalog
        .domain(&domain_id)
        .with_context(|| format!("catalog does not define domain {domain_id}"))?;
    let classification = regc_assess::classify(&profile, &domain.rules)?;
    println!("{}", serde_json::to_string_pretty(&classification)?);
    Ok(())
}
