//! # regc-score — Scoring Aggregator and Overlap Mapper
//!
//! Read-only aggregation over ledger state. Scores are pure functions of
//! a point-in-time snapshot (assessment + ledger rows + catalog), so two
//! reads of the same snapshot always score identically. Nothing in this
//! crate mutates anything.
//!
//! All arithmetic is integer; scores are `u8` in `[0, 100]` by
//! construction, never a float and never NaN.

pub mod overlap;
pub mod score;

pub use overlap::{overlap_report, OverlapHit};
pub use score::{domain_score, overall_score, DomainScore, ScorePolicy};
