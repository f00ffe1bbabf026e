//! # regc-core — Foundational Types for the Regulatory Compliance Core
//!
//! This crate is the bedrock of the regc workspace. It defines the
//! type-system primitives every other crate builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `DomainId`, `ProvisionId`,
//!    `AssessmentId`, `TenantId`, `ActorId` — validated constructors, no bare
//!    strings for identifiers.
//!
//! 2. **`CanonicalBytes` newtype.** ALL digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!    This makes divergent hash inputs structurally impossible.
//!
//! 3. **Single `ComplianceStatus` enum.** One closed enumeration for
//!    per-provision compliance state, serialized as `snake_case` everywhere.
//!    The source material drifted between casings for the same concept;
//!    this crate picks one and every consumer inherits it.
//!
//! 4. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix at
//!    seconds precision, so canonical bytes for the same instant are
//!    byte-identical regardless of where they were produced.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest};
pub use error::{ApplicabilityError, CanonicalizationError, RegcError, ValidationError};
pub use identity::{ActorId, AssessmentId, DomainId, ProvisionId, TenantId};
pub use status::ComplianceStatus;
pub use temporal::Timestamp;
