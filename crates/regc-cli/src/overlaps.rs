//! # Overlaps Subcommand
//!
//! Assesses one profile under several domains and prints the live
//! overlap report: which declared cross-domain equivalences actually
//! bind this entity, and the total estimated savings.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde_json::json;

use regc_core::{ActorId, DomainId, TenantId};
use regc_engine::ComplianceEngine;
use regc_kb::Catalog;
use regc_ledger::MemoryStore;

use crate::input::load_profile;

/// Arguments for the overlaps subcommand.
#[derive(Args, Debug)]
pub struct OverlapsArgs {
    /// Catalog file (.json, .yaml, or .yml).
    #[arg(long)]
    pub catalog: PathBuf,

    /// Profile file (.json, .yaml, or .yml).
    #[arg(long)]
    pub profile: PathBuf,

    /// Domains to assess under (repeat the flag per domain).
    #[arg(long = "domain", required = true)]
    pub domains: Vec<String>,
}

/// Assess the profile under each domain and print the overlap report.
pub fn run(args: &OverlapsArgs) -> anyhow::Result<()> {
    let catalog = Arc::new(Catalog::load_path(&args.catalog)?);
    let profile = load_profile(&args.profile)?;
    let engine = ComplianceEngine::new(catalog, MemoryStore::new());
    let actor = ActorId::new("regc-cli")?;
    let tenant = TenantId::new();

    let mut ids = Vec::with_capacity(args.domains.len());
    for domain in &args.domains {
        let domain = DomainId::new(domain.clone())?;
        let assessment = engine.compute_assessment(tenant, profile.clone(), domain, &actor)?;
        ids.push(assessment.id);
    }

    let hits = engine.overlaps(&ids)?;
    let total_savings: u64 = hits.iter().map(|h| u64::from(h.mapping.savings_hours)).sum();
    let report = json!({
        "pairs": hits,
        "total_savings_hours": total_savings,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
