//! # regc-kb — Knowledge Base
//!
//! The immutable, versioned catalog of regulatory provisions. A `Catalog`
//! is loaded once at process start (from JSON or YAML), validated
//! structurally, and referenced by id everywhere else — provision data is
//! never duplicated at call sites.
//!
//! ## Contents
//!
//! - [`Provision`]: one addressable regulatory requirement with its
//!   applicability predicate, weight, criticality flag, and category.
//! - [`PredicateClause`]: the declarative include/exclude rule shape.
//!   Evaluation lives in `regc-assess` — one interpreter, no divergent
//!   copies of precedence logic.
//! - [`ClassificationRules`]: per-domain size-tier thresholds, sector
//!   overrides, and light-regime criteria.
//! - [`OverlapMapping`]: declared provision equivalences across domains,
//!   precomputed at catalog build time.
//! - [`Catalog`]: the versioned bundle, with a content digest that pins
//!   the exact knowledge-base version onto every assessment.
//!
//! ## Crate Policy
//!
//! Pure data and validation. No evaluation logic, no mutation after load.

pub mod catalog;
pub mod error;
pub mod overlap;
pub mod predicate;
pub mod provision;
pub mod rules;

pub use catalog::{Catalog, DomainCatalog};
pub use error::KbError;
pub use overlap::OverlapMapping;
pub use predicate::{Comparison, PredicateClause, ThresholdRule};
pub use provision::Provision;
pub use rules::{
    ClassificationRules, ConstellationRule, ConstellationTier, LightRegimeRule, SectorOverride,
    SizeTier, TierRule,
};
