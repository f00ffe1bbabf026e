//! # Classification Engine
//!
//! Derives an entity's tiers from its profile under a domain's
//! classification rules. Pure and side-effect free: same profile + same
//! rules (pinned by the catalog version) always yields the same
//! classification.
//!
//! ## Algorithm
//!
//! 1. Each size dimension (staff, revenue) walks the ordered tier ladder
//!    independently; the entity's tier is the **worst** of the per-dimension
//!    tiers.
//! 2. Sector overrides then impose a floor: a micro entity in a flagged
//!    sub-sector is reclassified to the override tier.
//! 3. Constellation tier is derived from `satellite_count` when the domain
//!    defines a constellation ladder.
//! 4. Light-regime eligibility combines the final tier, sector, and
//!    disqualifying flags.
//!
//! A missing required dimension is a `ValidationError`; no partial
//! classification is ever returned.

use serde::{Deserialize, Serialize};

use regc_core::ValidationError;
use regc_kb::{ClassificationRules, ConstellationTier, SizeTier};

use crate::profile::Profile;

/// Derived tiers and regime eligibility for one entity. Never stored
/// independently — always recomputed from the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Size tier after sector overrides.
    pub size_tier: SizeTier,
    /// Constellation tier; `None` when the domain has no such ladder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation_tier: Option<ConstellationTier>,
    /// Whether a sector override raised the generic size tier.
    pub sector_override_applied: bool,
    /// Whether the entity qualifies for the lightened regime.
    pub light_regime_eligible: bool,
}

impl Classification {
    /// Alias used by reporting collaborators: light regime means the
    /// simplified obligation set applies.
    pub fn is_simplified(&self) -> bool {
        self.light_regime_eligible
    }
}

/// Derive a classification from a profile under a domain's rules.
///
/// # Errors
///
/// `ValidationError::MissingField` when a dimension the rules need is
/// absent from the profile (staff count, revenue, or satellite count for
/// domains with a constellation ladder).
pub fn classify(
    profile: &Profile,
    rules: &ClassificationRules,
) -> Result<Classification, ValidationError> {
    if profile.operator_type.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "operator_type".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let staff = profile.staff_count.ok_or_else(|| missing("staff_count"))?;
    let revenue = profile
        .annual_revenue_eur
        .ok_or_else(|| missing("annual_revenue_eur"))?;

    // Worst dimension wins: each dimension walks the ladder on its own.
    let staff_tier = tier_for(rules, |rung| {
        rung.max_staff.map(|max| staff <= max).unwrap_or(true)
    });
    let revenue_tier = tier_for(rules, |rung| {
        rung.max_revenue_eur.map(|max| revenue <= max).unwrap_or(true)
    });
    let generic_tier = staff_tier.max(revenue_tier);

    let mut size_tier = generic_tier;
    if let Some(sector) = profile.sector.as_deref() {
        for over in &rules.sector_overrides {
            if over.sector == sector {
                size_tier = size_tier.max(over.min_tier);
            }
        }
    }
    let sector_override_applied = size_tier != generic_tier;

    let constellation_tier = if rules.constellation_rules.is_empty() {
        None
    } else {
        let count = match profile.field("satellite_count") {
            crate::profile::FieldValue::Finite(v) => v,
            _ => return Err(missing("satellite_count")),
        };
        Some(
            rules
                .constellation_rules
                .iter()
                .find(|rung| {
                    rung.max_satellites
                        .map(|max| count <= i64::from(max))
                        .unwrap_or(true)
                })
                .map(|rung| rung.tier)
                .unwrap_or(ConstellationTier::Large),
        )
    };

    let light_regime_eligible = rules
        .light_regime
        .as_ref()
        .map(|lr| {
            size_tier <= lr.max_tier
                && (lr.eligible_sectors.is_empty()
                    || profile
                        .sector
                        .as_deref()
                        .map(|s| lr.eligible_sectors.iter().any(|e| e == s))
                        .unwrap_or(false))
                && !lr.disqualifying_flags.iter().any(|f| profile.has_flag(f))
        })
        .unwrap_or(false);

    Ok(Classification {
        size_tier,
        constellation_tier,
        sector_override_applied,
        light_regime_eligible,
    })
}

/// Walk the tier ladder and return the first rung the dimension fits.
/// The validated ladder ends with a catch-all, so the fold always lands.
fn tier_for(
    rules: &ClassificationRules,
    fits: impl Fn(&regc_kb::TierRule) -> bool,
) -> SizeTier {
    rules
        .tier_rules
        .iter()
        .find(|rung| fits(rung))
        .map(|rung| rung.tier)
        .unwrap_or(SizeTier::Large)
}

fn missing(field: &str) -> ValidationError {
    ValidationError::MissingField {
        field: field.to_string(),
        domain: "classification".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regc_kb::{ConstellationRule, LightRegimeRule, SectorOverride, TierRule};

    fn rules() -> ClassificationRules {
        ClassificationRules {
            tier_rules: vec![
                TierRule {
                    tier: SizeTier::Micro,
                    max_staff: Some(10),
                    max_revenue_eur: Some(2_000_000),
                },
                TierRule {
                    tier: SizeTier::Small,
                    max_staff: Some(50),
                    max_revenue_eur: Some(10_000_000),
                },
                TierRule {
                    tier: SizeTier::Medium,
                    max_staff: Some(250),
                    max_revenue_eur: Some(50_000_000),
                },
                TierRule {
                    tier: SizeTier::Large,
                    max_staff: None,
                    max_revenue_eur: None,
                },
            ],
            sector_overrides: vec![SectorOverride {
                sector: "launch-ranges".to_string(),
                min_tier: SizeTier::Medium,
            }],
            constellation_rules: vec![
                ConstellationRule {
                    tier: ConstellationTier::NonOperator,
                    max_satellites: Some(0),
                },
                ConstellationRule {
                    tier: ConstellationTier::Small,
                    max_satellites: Some(10),
                },
                ConstellationRule {
                    tier: ConstellationTier::Medium,
                    max_satellites: Some(100),
                },
                ConstellationRule {
                    tier: ConstellationTier::Large,
                    max_satellites: None,
                },
            ],
            light_regime: Some(LightRegimeRule {
                max_tier: SizeTier::Small,
                eligible_sectors: vec!["satcom".to_string(), "earth-observation".to_string()],
                disqualifying_flags: vec!["defence_contractor".to_string()],
            }),
        }
    }

    fn profile(staff: u32, revenue: u64, sector: &str, sats: i64) -> Profile {
        serde_json::from_value(serde_json::json!({
            "operator_type": "small-operator",
            "sector": sector,
            "staff_count": staff,
            "annual_revenue_eur": revenue,
            "numerics": {"satellite_count": sats}
        }))
        .unwrap()
    }

    #[test]
    fn test_small_satcom_operator_is_light_regime_eligible() {
        let c = classify(&profile(8, 1_200_000, "satcom", 3), &rules()).unwrap();
        assert_eq!(c.size_tier, SizeTier::Micro);
        assert_eq!(c.constellation_tier, Some(ConstellationTier::Small));
        assert!(c.light_regime_eligible);
        assert!(c.is_simplified());
    }

    #[test]
    fn test_worst_dimension_wins() {
        // Tiny staff, but revenue in the medium band.
        let c = classify(&profile(5, 30_000_000, "satcom", 3), &rules()).unwrap();
        assert_eq!(c.size_tier, SizeTier::Medium);
        assert!(!c.light_regime_eligible);
    }

    #[test]
    fn test_sector_override_raises_micro_entity() {
        let c = classify(&profile(4, 500_000, "launch-ranges", 0), &rules()).unwrap();
        assert_eq!(c.size_tier, SizeTier::Medium);
        assert!(c.sector_override_applied);
        assert!(!c.light_regime_eligible);
    }

    #[test]
    fn test_sector_override_noop_for_already_larger_entity() {
        let c = classify(&profile(300, 80_000_000, "launch-ranges", 0), &rules()).unwrap();
        assert_eq!(c.size_tier, SizeTier::Large);
        assert!(!c.sector_override_applied);
    }

    #[test]
    fn test_disqualifying_flag_blocks_light_regime() {
        let mut p = profile(8, 1_200_000, "satcom", 3);
        p.flags.insert("defence_contractor".to_string());
        let c = classify(&p, &rules()).unwrap();
        assert_eq!(c.size_tier, SizeTier::Micro);
        assert!(!c.light_regime_eligible);
    }

    #[test]
    fn test_ineligible_sector_blocks_light_regime() {
        let c = classify(&profile(8, 1_200_000, "in-orbit-servicing", 3), &rules()).unwrap();
        assert!(!c.light_regime_eligible);
    }

    #[test]
    fn test_missing_staff_count_rejected() {
        let mut p = profile(8, 1_200_000, "satcom", 3);
        p.staff_count = None;
        let err = classify(&p, &rules()).unwrap_err();
        assert!(err.to_string().contains("staff_count"));
    }

    #[test]
    fn test_missing_satellite_count_rejected_when_ladder_present() {
        let mut p = profile(8, 1_200_000, "satcom", 3);
        p.numerics.clear();
        let err = classify(&p, &rules()).unwrap_err();
        assert!(err.to_string().contains("satellite_count"));
    }

    #[test]
    fn test_no_constellation_ladder_means_no_satellite_requirement() {
        let mut r = rules();
        r.constellation_rules.clear();
        let mut p = profile(8, 1_200_000, "satcom", 3);
        p.numerics.clear();
        let c = classify(&p, &r).unwrap();
        assert_eq!(c.constellation_tier, None);
    }

    #[test]
    fn test_empty_operator_type_rejected() {
        let mut p = profile(8, 1_200_000, "satcom", 3);
        p.operator_type = "  ".to_string();
        assert!(classify(&p, &rules()).is_err());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let p = profile(42, 9_000_000, "earth-observation", 55);
        let r = rules();
        assert_eq!(classify(&p, &r).unwrap(), classify(&p, &r).unwrap());
    }
}
