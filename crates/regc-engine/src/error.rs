//! # Engine Errors
//!
//! One error type over the whole facade. User-input problems (validation,
//! applicability, invalid transitions) arrive wrapped from the crates
//! that detected them; `UnknownDomain` is the engine's own check against
//! the loaded catalog.

use thiserror::Error;

use regc_core::{DomainId, RegcError};
use regc_ledger::LedgerError;

/// Errors surfaced by [`crate::ComplianceEngine`] operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The loaded catalog does not define the requested domain.
    #[error("catalog does not define domain: {0}")]
    UnknownDomain(DomainId),

    /// Profile validation, applicability computation, or identifier
    /// construction failed.
    #[error(transparent)]
    Assessment(#[from] RegcError),

    /// Ledger mutation or store access failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
