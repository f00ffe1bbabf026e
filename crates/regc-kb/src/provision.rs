//! # Provision — One Addressable Regulatory Requirement
//!
//! Immutable at runtime; a provision changes only when a new catalog
//! version is loaded.

use serde::{Deserialize, Serialize};

use regc_core::{DomainId, ProvisionId};

use crate::predicate::PredicateClause;

/// One regulatory requirement within a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provision {
    /// The domain this provision belongs to.
    pub domain: DomainId,
    /// Stable human-readable identifier, e.g. `art-12`.
    pub id: ProvisionId,
    /// Human-readable title.
    pub title: String,
    /// Category tag, e.g. `safety`, `insurance`, `reporting`.
    pub category: String,
    /// Weight within the domain, in thousandths (0..=1000). Integer scale
    /// keeps the provision record canonicalizable (floats are rejected in
    /// digest paths).
    pub weight_milli: u32,
    /// Whether non-compliance with this provision caps the domain score.
    pub critical: bool,
    /// Include predicate. Absent = universally applicable unless excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<PredicateClause>,
    /// Exclude predicate. A match here wins over any include match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<PredicateClause>,
}
