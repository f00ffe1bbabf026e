//! # Catalog — The Versioned Knowledge Base Bundle
//!
//! A `Catalog` bundles every domain's provisions, classification rules,
//! and the cross-domain overlap table under one version string. It is
//! loaded once at process start, validated, and never mutated; the
//! content digest pins the exact knowledge-base version onto every
//! assessment produced from it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use regc_core::{sha256_digest, CanonicalBytes, ContentDigest, DomainId, ProvisionId};

use crate::error::KbError;
use crate::overlap::OverlapMapping;
use crate::provision::Provision;
use crate::rules::ClassificationRules;

/// All knowledge for one regulatory domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCatalog {
    /// The domain identifier.
    pub domain: DomainId,
    /// Human-readable framework name, e.g. "EU Space Act".
    pub name: String,
    /// Classification rules for entities assessed under this domain.
    pub rules: ClassificationRules,
    /// The domain's provisions, in catalog (citation) order. This order
    /// is the canonical ordering of every applicable-provision set.
    pub provisions: Vec<Provision>,
}

impl DomainCatalog {
    /// Look up a provision by id.
    pub fn provision(&self, id: &ProvisionId) -> Option<&Provision> {
        self.provisions.iter().find(|p| &p.id == id)
    }

    /// Whether the domain defines the given provision.
    pub fn contains(&self, id: &ProvisionId) -> bool {
        self.provision(id).is_some()
    }
}

/// The immutable, versioned knowledge base.
///
/// `BTreeMap` keys keep domain iteration deterministic, which in turn
/// keeps the content digest stable across loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog version string, e.g. `2026.1`.
    pub version: String,
    /// Per-domain knowledge, keyed by domain id.
    pub domains: BTreeMap<DomainId, DomainCatalog>,
    /// Declared cross-domain provision equivalences.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlaps: Vec<OverlapMapping>,
}

impl Catalog {
    /// Parse a catalog from a JSON document and validate it.
    pub fn from_json_str(s: &str) -> Result<Self, KbError> {
        let catalog: Catalog =
            serde_json::from_str(s).map_err(|e| KbError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a YAML document and validate it.
    pub fn from_yaml_str(s: &str) -> Result<Self, KbError> {
        let catalog: Catalog =
            serde_yaml::from_str(s).map_err(|e| KbError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a `.json`, `.yaml`, or `.yml` file.
    pub fn load_path(path: &Path) -> Result<Self, KbError> {
        let raw = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw),
            _ => Self::from_json_str(&raw),
        }
    }

    /// Look up a domain catalog.
    pub fn domain(&self, id: &DomainId) -> Option<&DomainCatalog> {
        self.domains.get(id)
    }

    /// Whether `provision` exists in `domain`.
    pub fn contains(&self, domain: &DomainId, provision: &ProvisionId) -> bool {
        self.domains
            .get(domain)
            .map(|dc| dc.contains(provision))
            .unwrap_or(false)
    }

    /// Total provision count across all domains.
    pub fn provision_count(&self) -> usize {
        self.domains.values().map(|d| d.provisions.len()).sum()
    }

    /// Compute the catalog's content digest over canonical bytes.
    ///
    /// Assessments pin `version` plus this digest, so a silently edited
    /// catalog with an unchanged version string is still detectable.
    pub fn content_digest(&self) -> Result<ContentDigest, KbError> {
        let cb = CanonicalBytes::new(self)?;
        Ok(sha256_digest(&cb))
    }

    /// Structural validation of the whole bundle.
    ///
    /// Overlap mappings are deliberately *not* checked against provision
    /// ids here: a mapping referencing an id absent from this catalog
    /// version is skipped with a warning at report time, not rejected at
    /// load.
    pub fn validate(&self) -> Result<(), KbError> {
        if self.version.trim().is_empty() {
            return Err(KbError::EmptyVersion);
        }
        for (filed_under, dc) in &self.domains {
            dc.rules.validate().map_err(|reason| KbError::InvalidRules {
                domain: filed_under.as_str().to_string(),
                reason,
            })?;
            let mut seen: Vec<&ProvisionId> = Vec::with_capacity(dc.provisions.len());
            for p in &dc.provisions {
                if p.domain != *filed_under {
                    return Err(KbError::DomainMismatch {
                        provision: p.id.as_str().to_string(),
                        declared: p.domain.as_str().to_string(),
                        filed: filed_under.as_str().to_string(),
                    });
                }
                if seen.contains(&&p.id) {
                    return Err(KbError::DuplicateProvision {
                        domain: filed_under.as_str().to_string(),
                        provision: p.id.as_str().to_string(),
                    });
                }
                seen.push(&p.id);
                if p.weight_milli > 1000 {
                    return Err(KbError::WeightOutOfRange {
                        provision: p.id.as_str().to_string(),
                        weight: p.weight_milli,
                    });
                }
                for clause in p.include.iter().chain(p.exclude.iter()) {
                    if clause.thresholds.iter().any(|t| t.field.trim().is_empty()) {
                        return Err(KbError::EmptyThresholdField {
                            provision: p.id.as_str().to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

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
                    ]
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
                    }
                ]
            }
        },
        "overlaps": [
            {
                "domain_a": "eu-space-act",
                "provision_a": "art-19",
                "domain_b": "nis2",
                "provision_b": "art-21",
                "savings_hours": 16
            }
        ]
    }"#;

    #[test]
    fn test_json_catalog_loads() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.version, "2026.1");
        assert_eq!(catalog.provision_count(), 2);
        let domain = DomainId::new("eu-space-act").unwrap();
        assert!(catalog.contains(&domain, &ProvisionId::new("art-7").unwrap()));
        assert!(!catalog.contains(&domain, &ProvisionId::new("art-99").unwrap()));
    }

    #[test]
    fn test_yaml_catalog_loads() {
        let yaml = r#"
version: "2026.1"
domains:
  nis2:
    domain: nis2
    name: NIS2 Directive
    rules:
      tier_rules:
        - tier: small
          max_staff: 50
        - tier: large
    provisions:
      - domain: nis2
        id: art-21
        title: Cybersecurity risk management
        category: security
        weight_milli: 500
        critical: true
"#;
        let catalog = Catalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.provision_count(), 1);
    }

    #[test]
    fn test_load_path_dispatches_on_extension() {
        let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        f.write_all(CATALOG_JSON.as_bytes()).unwrap();
        let catalog = Catalog::load_path(f.path()).unwrap();
        assert_eq!(catalog.version, "2026.1");
    }

    #[test]
    fn test_duplicate_provision_rejected() {
        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        let domain = DomainId::new("eu-space-act").unwrap();
        let dc = catalog.domains.get_mut(&domain).unwrap();
        let dup = dc.provisions[0].clone();
        dc.provisions.push(dup);
        assert!(matches!(
            catalog.validate(),
            Err(KbError::DuplicateProvision { .. })
        ));
    }

    #[test]
    fn test_weight_out_of_range_rejected() {
        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        let domain = DomainId::new("eu-space-act").unwrap();
        catalog.domains.get_mut(&domain).unwrap().provisions[0].weight_milli = 1500;
        assert!(matches!(
            catalog.validate(),
            Err(KbError::WeightOutOfRange { weight: 1500, .. })
        ));
    }

    #[test]
    fn test_domain_mismatch_rejected() {
        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        let domain = DomainId::new("eu-space-act").unwrap();
        catalog.domains.get_mut(&domain).unwrap().provisions[0].domain =
            DomainId::new("nis2").unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(KbError::DomainMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_version_rejected() {
        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        catalog.version = "  ".to_string();
        assert!(matches!(catalog.validate(), Err(KbError::EmptyVersion)));
    }

    #[test]
    fn test_overlap_referencing_unknown_provision_loads() {
        // Unknown mapping targets are a report-time warning, not a load error.
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.overlaps.len(), 1);
        assert!(!catalog.contains(
            &DomainId::new("nis2").unwrap(),
            &ProvisionId::new("art-21").unwrap()
        ));
    }

    #[test]
    fn test_content_digest_stable_and_version_sensitive() {
        let a = Catalog::from_json_str(CATALOG_JSON).unwrap();
        let b = Catalog::from_json_str(CATALOG_JSON).unwrap();
        assert_eq!(a.content_digest().unwrap(), b.content_digest().unwrap());

        let mut c = Catalog::from_json_str(CATALOG_JSON).unwrap();
        let domain = DomainId::new("eu-space-act").unwrap();
        c.domains.get_mut(&domain).unwrap().provisions[0].weight_milli = 301;
        assert_ne!(a.content_digest().unwrap(), c.content_digest().unwrap());
    }
}
