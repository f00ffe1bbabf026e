//! # Knowledge Base Errors
//!
//! Structural failures while loading or validating a catalog. These are
//! build/deploy-time errors: a catalog that fails validation is never
//! served, so downstream crates can assume a well-formed knowledge base.

use thiserror::Error;

/// Errors raised while loading or validating a catalog.
#[derive(Error, Debug)]
pub enum KbError {
    /// The catalog version string is empty.
    #[error("catalog version must not be empty")]
    EmptyVersion,

    /// Two provisions in one domain share an id.
    #[error("duplicate provision id {provision} in domain {domain}")]
    DuplicateProvision {
        /// The domain containing the duplicate.
        domain: String,
        /// The duplicated provision id.
        provision: String,
    },

    /// A provision weight exceeds the thousandths scale.
    #[error("provision {provision} has weight {weight} outside 0..=1000")]
    WeightOutOfRange {
        /// The offending provision id.
        provision: String,
        /// The out-of-range weight (thousandths).
        weight: u32,
    },

    /// A provision's domain field disagrees with the catalog key it is
    /// filed under.
    #[error("provision {provision} declares domain {declared} but is filed under {filed}")]
    DomainMismatch {
        /// The offending provision id.
        provision: String,
        /// The domain named inside the provision record.
        declared: String,
        /// The domain the catalog filed it under.
        filed: String,
    },

    /// A threshold rule names an empty field.
    #[error("provision {provision} has a threshold rule with an empty field name")]
    EmptyThresholdField {
        /// The offending provision id.
        provision: String,
    },

    /// The classification rules for a domain are unusable.
    #[error("domain {domain} has invalid classification rules: {reason}")]
    InvalidRules {
        /// The domain with broken rules.
        domain: String,
        /// Why they were rejected.
        reason: String,
    },

    /// Parse failure for a catalog document.
    #[error("catalog parse error: {0}")]
    Parse(String),

    /// Canonicalization failure while computing the catalog digest.
    #[error("catalog digest error: {0}")]
    Digest(#[from] regc_core::CanonicalizationError),

    /// IO failure while reading a catalog file.
    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),
}
