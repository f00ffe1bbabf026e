//! # regc-assess — Classification and Applicability
//!
//! The pure computational heart of the core: derive an entity's
//! [`Classification`] from its [`Profile`], then resolve which provisions
//! of a domain bind it. Both steps are side-effect-free functions of their
//! inputs, so identical inputs always yield identical results and retries
//! are always safe.
//!
//! ## Data Flow
//!
//! ```text
//! Profile ──▶ classify() ──▶ Classification
//!    │                           │
//!    └──────────┬────────────────┘
//!               ▼
//!          resolve()  ◀── DomainCatalog (regc-kb)
//!               │
//!               ▼
//!          Assessment (immutable snapshot)
//! ```
//!
//! ## Precedence Invariant
//!
//! The resolver's exclude-wins rule is the single most important
//! correctness property of the engine and is implemented in exactly one
//! place: [`resolve::resolve`].

pub mod assessment;
pub mod classify;
pub mod profile;
pub mod resolve;

pub use assessment::Assessment;
pub use classify::{classify, Classification};
pub use profile::{FieldValue, Profile};
pub use resolve::{resolve, ResolverConfig, UnboundedFieldPolicy};
