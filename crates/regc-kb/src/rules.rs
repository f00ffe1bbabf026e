//! # Classification Rules
//!
//! Per-domain rules for deriving an entity's tiers from its profile:
//! ordered size-tier thresholds, sector overrides, constellation-size
//! thresholds, and light-regime eligibility criteria.
//!
//! The rules are data; the derivation algorithm (worst dimension wins,
//! sector override on top) lives in `regc-assess::classify`.

use serde::{Deserialize, Serialize};

/// Size tier of a regulated entity. Ordered: a later variant carries
/// heavier obligations, and "worst dimension wins" is a `max` over tiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SizeTier {
    /// Smallest entities, typically eligible for lightened regimes.
    Micro,
    /// Small entities.
    Small,
    /// Medium entities.
    Medium,
    /// Large entities, full obligations.
    Large,
}

impl std::fmt::Display for SizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        f.write_str(s)
    }
}

/// Constellation tier for space operators, derived from satellite count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConstellationTier {
    /// No satellites on orbit (e.g. a launch-service provider).
    NonOperator,
    /// Up to the small-constellation bound.
    Small,
    /// Between the small and large bounds.
    Medium,
    /// Above the large bound.
    Large,
}

/// One rung of the ordered size-tier ladder.
///
/// An entity fits the rung when every specified bound holds
/// (`staff <= max_staff` and `revenue <= max_revenue_eur`). Rungs are
/// evaluated in order per dimension; the final catch-all rung leaves both
/// bounds unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRule {
    /// The tier this rung assigns.
    pub tier: SizeTier,
    /// Inclusive staff-count ceiling for this rung.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_staff: Option<u32>,
    /// Inclusive annual-revenue ceiling (EUR) for this rung.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_revenue_eur: Option<u64>,
}

/// Sector-specific reclassification: entities in `sector` are raised to
/// at least `min_tier` regardless of size (a micro entity in a flagged
/// sub-sector still carries the higher-obligation tier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorOverride {
    /// The sector the override applies to.
    pub sector: String,
    /// The floor tier imposed on that sector.
    pub min_tier: SizeTier,
}

/// One rung of the constellation-size ladder, mirroring [`TierRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationRule {
    /// The tier this rung assigns.
    pub tier: ConstellationTier,
    /// Inclusive satellite-count ceiling for this rung; unset = catch-all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_satellites: Option<u32>,
}

/// Eligibility criteria for the lightened (simplified) regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightRegimeRule {
    /// Highest size tier that remains eligible.
    pub max_tier: SizeTier,
    /// Sectors eligible for the light regime. Empty = any sector.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eligible_sectors: Vec<String>,
    /// Profile flags that disqualify an otherwise eligible entity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disqualifying_flags: Vec<String>,
}

/// The full classification rule set for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRules {
    /// Ordered size-tier ladder, smallest tier first. Must end with a
    /// catch-all rung (no bounds).
    pub tier_rules: Vec<TierRule>,
    /// Sector floors applied after the generic tier is derived.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sector_overrides: Vec<SectorOverride>,
    /// Constellation ladder; empty when the domain has no such concept.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constellation_rules: Vec<ConstellationRule>,
    /// Light-regime criteria; absent when the domain has no such regime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_regime: Option<LightRegimeRule>,
}

impl ClassificationRules {
    /// Structural check: the tier ladder is non-empty, ordered, and ends
    /// with a catch-all rung.
    pub fn validate(&self) -> Result<(), String> {
        if self.tier_rules.is_empty() {
            return Err("tier ladder must not be empty".to_string());
        }
        let last = &self.tier_rules[self.tier_rules.len() - 1];
        if last.max_staff.is_some() || last.max_revenue_eur.is_some() {
            return Err("tier ladder must end with a catch-all rung".to_string());
        }
        for pair in self.tier_rules.windows(2) {
            if pair[0].tier >= pair[1].tier {
                return Err(format!(
                    "tier ladder must ascend: {} before {}",
                    pair[0].tier, pair[1].tier
                ));
            }
        }
        if !self.constellation_rules.is_empty() {
            let last = &self.constellation_rules[self.constellation_rules.len() - 1];
            if last.max_satellites.is_some() {
                return Err("constellation ladder must end with a catch-all rung".to_string());
            }
        }
        Ok(())
    }
}
