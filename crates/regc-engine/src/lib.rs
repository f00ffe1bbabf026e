//! # regc-engine — Engine Facade
//!
//! The composition root of the workspace: one struct that wires the
//! immutable catalog, the persistence seam, and the pure computation
//! crates into the operations collaborators actually call.
//!
//! ```no_run
//! use std::sync::Arc;
//! use regc_engine::ComplianceEngine;
//! use regc_kb::Catalog;
//! use regc_ledger::MemoryStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(Catalog::load_path("catalog.yaml".as_ref())?);
//! let engine = ComplianceEngine::new(catalog, MemoryStore::new());
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;

pub use engine::ComplianceEngine;
pub use error::EngineError;
