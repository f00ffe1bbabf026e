//! # Assessment — Immutable Applicability Snapshot
//!
//! An assessment freezes the result of one applicability computation:
//! the profile as supplied, the derived classification, the applicable
//! provision set, and the exact knowledge-base version (string + content
//! digest) it was computed against.
//!
//! Assessments are never edited. A profile change that alters
//! classification or applicability produces a *new* assessment.

use serde::{Deserialize, Serialize};

use regc_core::{
    AssessmentId, ContentDigest, DomainId, ProvisionId, RegcError, TenantId, Timestamp,
};
use regc_kb::Catalog;

use crate::classify::{classify, Classification};
use crate::profile::Profile;
use crate::resolve::{resolve, ResolverConfig};

/// One immutable computed applicability result for a profile snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique identifier of this snapshot.
    pub id: AssessmentId,
    /// The organization this assessment (and its audit scope) belongs to.
    pub tenant: TenantId,
    /// The regulatory domain assessed.
    pub domain: DomainId,
    /// Knowledge-base version string the computation ran against.
    pub catalog_version: String,
    /// Content digest of that catalog, pinning it beyond the version string.
    pub catalog_digest: ContentDigest,
    /// The profile exactly as supplied by the caller.
    pub profile: Profile,
    /// The classification derived from the profile.
    pub classification: Classification,
    /// Applicable provision ids, in catalog order.
    pub applicable: Vec<ProvisionId>,
    /// When the snapshot was computed.
    pub created_at: Timestamp,
}

impl Assessment {
    /// Compute a new assessment: validate + classify + resolve, then
    /// freeze the result.
    ///
    /// # Errors
    ///
    /// `RegcError::Validation` for a malformed profile,
    /// `RegcError::Applicability` for an unevaluable predicate, and
    /// `RegcError::InvalidIdentifier` when the catalog does not define
    /// the requested domain. No partial assessment is produced on error.
    pub fn compute(
        tenant: TenantId,
        profile: Profile,
        domain: DomainId,
        catalog: &Catalog,
        config: &ResolverConfig,
    ) -> Result<Self, RegcError> {
        let domain_catalog = catalog.domain(&domain).ok_or_else(|| {
            RegcError::InvalidIdentifier(format!("catalog does not define domain {domain}"))
        })?;
        let classification = classify(&profile, &domain_catalog.rules)?;
        let applicable = resolve(&profile, &classification, domain_catalog, config)?;
        let catalog_digest = catalog
            .content_digest()
            .map_err(|e| RegcError::Serialization(e.to_string()))?;
        Ok(Self {
            id: AssessmentId::new(),
            tenant,
            domain,
            catalog_version: catalog.version.clone(),
            catalog_digest,
            profile,
            classification,
            applicable,
            created_at: Timestamp::now(),
        })
    }

    /// Whether a provision is in the applicable set.
    pub fn is_applicable(&self, provision: &ProvisionId) -> bool {
        self.applicable.contains(provision)
    }

    /// Whether the simplified (light-regime) obligation set applies.
    pub fn is_simplified(&self) -> bool {
        self.classification.is_simplified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "version": "2026.1",
        "domains": {
            "eu-space-act": {
                "domain": "eu-space-act",
                "name": "EU Space Act",
                "rules": {
                    "tier_rules": [
                        {"tier": "micro", "max_staff": 10, "max_revenue_eur": 2000000},
                        {"tier": "small", "max_staff": 50, "max_revenue_eur": 10000000},
                        {"tier": "large"}
                    ],
                    "light_regime": {
                        "max_tier": "small",
                        "eligible_sectors": ["satcom"]
                    }
                },
                "provisions": [
                    {
                        "domain": "eu-space-act",
                        "id": "art-7",
                        "title": "Registration of space objects",
                        "category": "registration",
                        "weight_milli": 300,
                        "critical": false
                    },
                    {
                        "domain": "eu-space-act",
                        "id": "art-19",
                        "title": "Collision avoidance capability",
                        "category": "safety",
                        "weight_milli": 700,
                        "critical": true,
                        "include": {
                            "thresholds": [
                                {"field": "satellite_count", "cmp": "ge", "value": 10}
                            ]
                        }
                    },
                    {
                        "domain": "eu-space-act",
                        "id": "art-44",
                        "title": "Full environmental footprint review",
                        "category": "environment",
                        "weight_milli": 200,
                        "critical": false,
                        "exclude": {
                            "size_tiers": ["micro", "small"]
                        }
                    }
                ]
            }
        }
    }"#;

    fn catalog() -> Catalog {
        Catalog::from_json_str(CATALOG_JSON).unwrap()
    }

    fn small_satcom_profile() -> Profile {
        serde_json::from_value(serde_json::json!({
            "operator_type": "small-operator",
            "sector": "satcom",
            "staff_count": 8,
            "annual_revenue_eur": 1_200_000u64,
            "numerics": {"satellite_count": 3}
        }))
        .unwrap()
    }

    fn compute(profile: Profile) -> Result<Assessment, RegcError> {
        Assessment::compute(
            TenantId::new(),
            profile,
            DomainId::new("eu-space-act").unwrap(),
            &catalog(),
            &ResolverConfig::default(),
        )
    }

    #[test]
    fn test_small_satcom_operator_gets_reduced_set() {
        let a = compute(small_satcom_profile()).unwrap();
        assert!(a.is_simplified());
        // art-19 needs >= 10 satellites; art-44 excludes micro/small tiers.
        let ids: Vec<&str> = a.applicable.iter().map(|p| p.as_str()).collect();
        assert_eq!(ids, vec!["art-7"]);
        assert!(a.is_applicable(&ProvisionId::new("art-7").unwrap()));
        assert!(!a.is_applicable(&ProvisionId::new("art-19").unwrap()));
    }

    #[test]
    fn test_larger_operator_gets_larger_set() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "operator_type": "constellation-operator",
            "sector": "satcom",
            "staff_count": 400,
            "annual_revenue_eur": 90_000_000u64,
            "numerics": {"satellite_count": 120}
        }))
        .unwrap();
        let a = compute(profile).unwrap();
        assert!(!a.is_simplified());
        let ids: Vec<&str> = a.applicable.iter().map(|p| p.as_str()).collect();
        assert_eq!(ids, vec!["art-7", "art-19", "art-44"]);
    }

    #[test]
    fn test_assessment_pins_catalog_version_and_digest() {
        let a = compute(small_satcom_profile()).unwrap();
        assert_eq!(a.catalog_version, "2026.1");
        assert_eq!(a.catalog_digest, catalog().content_digest().unwrap());
    }

    #[test]
    fn test_unknown_domain_rejected() {
        let result = Assessment::compute(
            TenantId::new(),
            small_satcom_profile(),
            DomainId::new("itar").unwrap(),
            &catalog(),
            &ResolverConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_profile_produces_no_assessment() {
        let mut p = small_satcom_profile();
        p.annual_revenue_eur = None;
        assert!(matches!(compute(p), Err(RegcError::Validation(_))));
    }

    #[test]
    fn test_recomputation_yields_identical_applicable_set() {
        let a = compute(small_satcom_profile()).unwrap();
        let b = compute(small_satcom_profile()).unwrap();
        // Fresh snapshot, identical computed content.
        assert_ne!(a.id, b.id);
        assert_eq!(a.applicable, b.applicable);
        assert_eq!(a.classification, b.classification);
    }

    #[test]
    fn test_assessment_serde_roundtrip() {
        let a = compute(small_satcom_profile()).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let parsed: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, a);
    }
}
