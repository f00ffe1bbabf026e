//! # Profile — Classification Inputs for One Entity
//!
//! The caller owns the profile and supplies it fresh per computation.
//! Unknown fields are rejected at the deserialization boundary
//! (`deny_unknown_fields`) rather than silently defaulted — a misspelled
//! field name must fail loudly, not shrink the applicable set.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Classification inputs for one regulated entity.
///
/// Generic size metrics are first-class fields; domain-specific numeric
/// attributes (satellite counts, launch masses, mission durations) live in
/// `numerics` and are addressed by name from knowledge-base predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Operator/sector type, e.g. `small-operator`, `launch-provider`.
    pub operator_type: String,
    /// Sub-sector, e.g. `satcom`, `earth-observation`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// ISO jurisdiction code, e.g. `eu`, `fr`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    /// Employee head count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_count: Option<u32>,
    /// Annual revenue in whole euros.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_revenue_eur: Option<u64>,
    /// Domain-specific numeric attributes, addressed by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub numerics: BTreeMap<String, i64>,
    /// Numeric fields the caller declares unbounded/indefinite (e.g. an
    /// insurance policy with no end date). How thresholds treat these is
    /// resolver policy, not a hard-coded interpretation.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub unbounded_fields: BTreeSet<String>,
    /// Boolean attributes; present means set.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub flags: BTreeSet<String>,
}

/// Resolution of a named numeric field against a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// The field has a concrete value.
    Finite(i64),
    /// The caller declared the field unbounded/indefinite.
    Unbounded,
    /// The profile does not define the field.
    Missing,
}

impl Profile {
    /// Look up a numeric field by name. Generic size metrics are
    /// addressable under their field names alongside `numerics` entries.
    pub fn field(&self, name: &str) -> FieldValue {
        if self.unbounded_fields.contains(name) {
            return FieldValue::Unbounded;
        }
        match name {
            "staff_count" => self
                .staff_count
                .map(|v| FieldValue::Finite(i64::from(v)))
                .unwrap_or(FieldValue::Missing),
            "annual_revenue_eur" => self
                .annual_revenue_eur
                .and_then(|v| i64::try_from(v).ok())
                .map(FieldValue::Finite)
                .unwrap_or(FieldValue::Missing),
            other => self
                .numerics
                .get(other)
                .map(|v| FieldValue::Finite(*v))
                .unwrap_or(FieldValue::Missing),
        }
    }

    /// Whether a boolean attribute is set.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}
