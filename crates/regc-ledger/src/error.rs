//! # Ledger Errors
//!
//! User-actionable rejections (`InvalidTransition`) are separate variants
//! from system-level failures (`Persistence`), so callers can distinguish
//! "you targeted a provision outside the applicable set" from "the store
//! is unavailable, the mutation did not happen".

use thiserror::Error;

use regc_core::{AssessmentId, CanonicalizationError};

/// Errors raised by ledger mutations and reads.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The targeted provision is not in the assessment's applicable set.
    #[error("provision {provision} is not in the applicable set of {assessment}")]
    InvalidTransition {
        /// The assessment whose ledger was targeted.
        assessment: AssessmentId,
        /// The provision outside the applicable set.
        provision: String,
    },

    /// No assessment with the given id exists in the store.
    #[error("unknown assessment: {0}")]
    UnknownAssessment(AssessmentId),

    /// No audit chain exists for the given tenant.
    #[error("no audit chain for tenant: {0}")]
    UnknownTenant(String),

    /// A durable write failed; the entire mutation (status + audit entry)
    /// was rolled back and the caller must assume it did not happen.
    #[error("persistence failure, mutation rolled back: {0}")]
    Persistence(String),

    /// The audit payload could not be canonicalized for hashing. The
    /// mutation is rolled back — an audit entry is never dropped silently.
    #[error("audit canonicalization failure, mutation rolled back: {0}")]
    AuditCanonicalization(#[from] CanonicalizationError),
}
