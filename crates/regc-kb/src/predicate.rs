//! # Applicability Predicates — Declarative Rule Shape
//!
//! The data model for provision applicability rules. A provision carries
//! an optional include clause and an optional exclude clause; the resolver
//! in `regc-assess` is the single interpreter of both.
//!
//! ## Precedence
//!
//! Exclude always wins. That rule is implemented exactly once, in the
//! resolver — this module only describes the shape.

use serde::{Deserialize, Serialize};

use crate::rules::SizeTier;

/// Comparison operator for a numeric threshold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Field strictly less than the bound.
    Lt,
    /// Field less than or equal to the bound.
    Le,
    /// Field strictly greater than the bound.
    Gt,
    /// Field greater than or equal to the bound.
    Ge,
    /// Field equal to the bound.
    Eq,
}

impl Comparison {
    /// Apply the comparison to a concrete field value.
    pub fn evaluate(&self, field_value: i64, bound: i64) -> bool {
        match self {
            Self::Lt => field_value < bound,
            Self::Le => field_value <= bound,
            Self::Gt => field_value > bound,
            Self::Ge => field_value >= bound,
            Self::Eq => field_value == bound,
        }
    }
}

/// A numeric constraint on a named profile field,
/// e.g. `launch_mass_kg ge 500`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRule {
    /// The profile field the rule reads. Referencing a field the profile
    /// does not define is a fatal applicability error at resolve time.
    pub field: String,
    /// The comparison operator.
    pub cmp: Comparison,
    /// The bound, on the field's integer scale.
    pub value: i64,
}

/// One side of a provision's applicability predicate.
///
/// All specified parts must match (conjunction). An empty clause matches
/// every profile — meaningful for exclude clauses only; a provision with
/// no include clause is universally applicable unless excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateClause {
    /// Operator/sector types the clause matches. Empty = any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operator_types: Vec<String>,
    /// Size tiers the clause matches. Empty = any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub size_tiers: Vec<SizeTier>,
    /// Numeric threshold rules, all of which must hold.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thresholds: Vec<ThresholdRule>,
    /// Profile flags that must all be set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
}

impl PredicateClause {
    /// Whether the clause constrains anything at all.
    pub fn is_unconstrained(&self) -> bool {
        self.operator_types.is_empty()
            && self.size_tiers.is_empty()
            && self.thresholds.is_empty()
            && self.flags.is_empty()
    }
}
