//! # Assess Subcommand
//!
//! Runs a full assessment: classify, resolve applicability, freeze the
//! snapshot. Backed by an in-memory store, so the output is the
//! assessment itself; persisting it is the calling service's job.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use regc_assess::{ResolverConfig, UnboundedFieldPolicy};
use regc_core::{ActorId, DomainId, TenantId};
use regc_engine::ComplianceEngine;
use regc_kb::Catalog;
use regc_ledger::MemoryStore;

use crate::input::load_profile;

/// Arguments for the assess subcommand.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Catalog file (.json, .yaml, or .yml).
    #[arg(long)]
    pub catalog: PathBuf,

    /// Profile file (.json, .yaml, or .yml).
    #[arg(long)]
    pub profile: PathBuf,

    /// Regulatory domain to assess under.
    #[arg(long)]
    pub domain: String,

    /// Reject thresholds over fields the profile declares unbounded,
    /// instead of treating them as satisfied.
    #[arg(long)]
    pub reject_unbounded: bool,
}

/// Compute an assessment and print it as JSON.
pub fn run(args: &AssessArgs) -> anyhow::Result<()> {
    let catalog = Arc::new(Catalog::load_path(&args.catalog)?);
    let profile = load_profile(&args.profile)?;
    let domain = DomainId::new(args.domain.clone())?;

    let mut resolver = ResolverConfig::default();
    if args.reject_unbounded {
        resolver.unbounded_policy = UnboundedFieldPolicy::Reject;
    }
    let engine = ComplianceEngine::new(catalog, MemoryStore::new()).with_resolver(resolver);
    let actor = ActorId::new("regc-cli")?;
    let assessment = engine.compute_assessment(TenantId::new(), profile, domain, &actor)?;
    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}
