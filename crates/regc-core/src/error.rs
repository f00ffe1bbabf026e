//! # Error Types — Structured Error Hierarchy
//!
//! Errors shared across the regc workspace. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! User-input errors (`ValidationError`) carry immediately actionable
//! messages naming the offending field. System errors (persistence,
//! chain integrity — defined in `regc-ledger`) are distinct types so
//! callers can never confuse "you sent a bad profile" with "the store
//! is down".

use thiserror::Error;

/// Top-level error type for the Regulatory Compliance Core.
#[derive(Error, Debug)]
pub enum RegcError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Profile validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Applicability computation failure.
    #[error("applicability error: {0}")]
    Applicability(#[from] ApplicabilityError),

    /// Malformed identifier.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A status literal outside the closed `ComplianceStatus` taxonomy.
    #[error("unknown compliance status: {0:?}")]
    UnknownStatus(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Weights are integer thousandths; savings are integer hours.
    #[error("float values are not permitted in canonical representations; use an integer scale: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// A malformed or incomplete entity profile, rejected before any
/// computation begins. No partial assessment is ever produced.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A dimension required for classification is absent.
    #[error("profile is missing required field '{field}' for domain {domain}")]
    MissingField {
        /// The absent field name.
        field: String,
        /// The domain whose rules require it.
        domain: String,
    },

    /// A field is present but carries an unusable value.
    #[error("profile field '{field}' is invalid: {reason}")]
    InvalidField {
        /// The offending field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// A knowledge-base predicate that cannot be evaluated against the
/// supplied profile. Fatal for the whole domain computation — a wrong
/// subset must never be silently applied.
#[derive(Error, Debug)]
pub enum ApplicabilityError {
    /// A predicate references a numeric field the profile does not define.
    #[error("provision {provision} references unknown profile field '{field}'")]
    UnknownField {
        /// The provision whose predicate is malformed.
        provision: String,
        /// The unresolvable field name.
        field: String,
    },

    /// A threshold reads a field the profile declares unbounded, and the
    /// configured policy rejects unbounded values.
    #[error("provision {provision} threshold on '{field}' cannot evaluate an unbounded value under the reject policy")]
    UnboundedRejected {
        /// The provision whose threshold could not be evaluated.
        provision: String,
        /// The unbounded field name.
        field: String,
    },
}
