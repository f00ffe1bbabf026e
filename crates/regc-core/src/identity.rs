//! # Identifier Newtypes
//!
//! Newtype wrappers for every identifier namespace in the workspace.
//! You cannot pass a `ProvisionId` where a `DomainId` is expected, and a
//! malformed identifier cannot be constructed at all.
//!
//! Stable human-readable identifiers (`DomainId`, `ProvisionId`) are
//! validated slugs; runtime-generated identifiers (`AssessmentId`,
//! `TenantId`) are UUIDs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RegcError;

/// Check a human-readable identifier slug: non-empty, lowercase
/// alphanumeric plus `-`, `_`, `.`.
fn validate_slug(kind: &str, s: &str) -> Result<(), RegcError> {
    if s.is_empty() {
        return Err(RegcError::InvalidIdentifier(format!("{kind} must not be empty")));
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
    {
        return Err(RegcError::InvalidIdentifier(format!(
            "{kind} must be lowercase alphanumeric with -_. separators, got: {s:?}"
        )));
    }
    Ok(())
}

/// Identifier of one regulatory framework (one law or directive), e.g.
/// `eu-space-act` or `nis2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DomainId(String);

impl DomainId {
    /// Construct a validated domain identifier.
    pub fn new(s: impl Into<String>) -> Result<Self, RegcError> {
        let s = s.into();
        validate_slug("domain id", &s)?;
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stable human-readable identifier of one provision within a domain,
/// e.g. `art-12` or `annex-ii.3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProvisionId(String);

impl ProvisionId {
    /// Construct a validated provision identifier.
    pub fn new(s: impl Into<String>) -> Result<Self, RegcError> {
        let s = s.into();
        validate_slug("provision id", &s)?;
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier of one immutable assessment snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
    /// Generate a new random assessment identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier of the organization an audit chain is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TenantId(pub Uuid);

impl TenantId {
    /// Generate a new random tenant identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

/// The actor recorded on a ledger mutation (user id, service account,
/// authority reference). Opaque to the core; must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(String);

impl ActorId {
    /// Construct a validated actor identifier.
    pub fn new(s: impl Into<String>) -> Result<Self, RegcError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(RegcError::InvalidIdentifier(
                "actor id must not be empty".to_string(),
            ));
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ProvisionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "assessment:{}", self.0)
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tenant:{}", self.0)
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
