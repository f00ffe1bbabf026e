//! # Overlap Mappings — Declared Cross-Domain Equivalences
//!
//! A mapping declares that satisfying one provision substantially
//! satisfies another in a different domain, with an estimated effort
//! saving. Mappings are precomputed at catalog build time and static per
//! version; whether a pair is *reported* for a concrete entity is decided
//! at runtime by `regc-score::overlap`.

use serde::{Deserialize, Serialize};

use regc_core::{DomainId, ProvisionId};

/// A declared equivalence between provisions in two domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapMapping {
    /// Domain of the first provision.
    pub domain_a: DomainId,
    /// First provision.
    pub provision_a: ProvisionId,
    /// Domain of the second provision.
    pub domain_b: DomainId,
    /// Second provision.
    pub provision_b: ProvisionId,
    /// Estimated effort saving when both apply, in hours. Integer scale
    /// keeps the mapping canonicalizable.
    pub savings_hours: u32,
}
