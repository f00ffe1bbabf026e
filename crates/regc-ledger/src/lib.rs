//! # regc-ledger — Status Ledger and Audit Trail
//!
//! Tracks per-provision compliance state for each assessment and keeps a
//! tamper-evident, append-only record of every mutation.
//!
//! ## The One Transactional Boundary
//!
//! A status mutation and its audit entry are a single atomic unit: both
//! happen or neither does. No status change is ever recorded without its
//! audit entry, and no audit entry without its status change. Read-path
//! diagnostics, by contrast, are best-effort `tracing` events and may drop
//! silently — this asymmetry is deliberate and documented, not an
//! accident of catch-and-ignore.
//!
//! ## Persistence Seam
//!
//! [`ComplianceStore`] is the only interface to durable storage. The
//! bundled [`MemoryStore`] serializes mutations behind a mutex, giving
//! last-committed-write-wins per row and fork-free audit sequence numbers
//! per tenant. A relational implementation needs atomic multi-row writes
//! and point-in-time reads, nothing more.

pub mod audit;
pub mod error;
pub mod ledger;
pub mod store;

pub use audit::{
    AuditAction, AuditChain, AuditEntry, AuditPayload, VerificationResult, GENESIS_PREV_HASH,
};
pub use error::LedgerError;
pub use ledger::{RequirementStatus, StatusChange, StatusLedger};
pub use store::{ComplianceStore, MemoryStore};
