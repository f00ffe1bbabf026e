//! # Validate Subcommand
//!
//! Loads a catalog file, runs structural validation, and prints the
//! version, content digest, and per-domain provision counts.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use tracing::info;

use regc_kb::Catalog;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file (.json, .yaml, or .yml).
    #[arg(long)]
    pub catalog: PathBuf,
}

/// Validate the catalog and print its summary as JSON.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let catalog = Catalog::load_path(&args.catalog)?;
    let digest = catalog.content_digest()?;
    info!(
        version = %catalog.version,
        domains = catalog.domains.len(),
        "catalog validated"
    );
    let domains: serde_json::Map<String, serde_json::Value> = catalog
        .domains
        .iter()
        .map(|(id, d)| (id.to_string(), json!(d.provisions.len())))
        .collect();
    let summary = json!({
        "version": catalog.version,
        "digest": digest.to_string(),
        "domains": domains,
        "overlaps": catalog.overlaps.len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
