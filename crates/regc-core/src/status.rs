//! # Compliance Status — Single Source of Truth
//!
//! Defines the closed `ComplianceStatus` enumeration for per-provision
//! compliance state. This is the ONE definition used across the workspace;
//! every `match` on it must be exhaustive.
//!
//! The source material carried the same concept under drifting casings
//! (`notAssessed` vs `not_assessed`) across its schemas. The canonical
//! wire representation here is `snake_case`, applied uniformly.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RegcError;

/// Compliance state of one provision within one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// No determination has been made yet. Initial state of every row.
    NotAssessed,
    /// The entity satisfies the provision.
    Compliant,
    /// The entity partially satisfies the provision; counts half in scoring.
    Partial,
    /// The entity does not satisfy the provision.
    NonCompliant,
    /// The provision was judged not to bind this entity after assessment.
    /// Excluded from the scoring denominator.
    NotApplicable,
}

impl ComplianceStatus {
    /// All statuses, in declaration order.
    pub fn all() -> &'static [ComplianceStatus] {
        &[
            Self::NotAssessed,
            Self::Compliant,
            Self::Partial,
            Self::NonCompliant,
            Self::NotApplicable,
        ]
    }

    /// Whether this row counts toward the scoring denominator.
    pub fn is_assessable(&self) -> bool {
        !matches!(self, Self::NotApplicable)
    }

    /// The canonical snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAssessed => "not_assessed",
            Self::Compliant => "compliant",
            Self::Partial => "partial",
            Self::NonCompliant => "non_compliant",
            Self::NotApplicable => "not_applicable",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceStatus {
    type Err = RegcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_assessed" => Ok(Self::NotAssessed),
            "compliant" => Ok(Self::Compliant),
            "partial" => Ok(Self::Partial),
            "non_compliant" => Ok(Self::NonCompliant),
            "not_applicable" => Ok(Self::NotApplicable),
            other => Err(RegcError::UnknownStatus(other.to_string())),
        }
    }
}
