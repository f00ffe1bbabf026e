//! # Status Ledger — Per-Provision Compliance State
//!
//! One ledger per assessment, one row per applicable provision, no more
//! and no less. Rows are created `not_assessed` when the ledger is
//! initialized from an assessment's applicable set; a row for a provision
//! outside that set can never exist, and a mutation targeting one is
//! rejected before any state changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use regc_assess::Assessment;
use regc_core::{ActorId, AssessmentId, ComplianceStatus, ProvisionId, Timestamp};

use crate::error::LedgerError;

/// One ledger row: the current compliance state of one applicable
/// provision for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementStatus {
    /// The assessment this row belongs to.
    pub assessment: AssessmentId,
    /// The applicable provision this row tracks.
    pub provision: ProvisionId,
    /// Current compliance state.
    pub status: ComplianceStatus,
    /// When the row last changed (creation time until first mutation).
    pub updated_at: Timestamp,
    /// Who last changed the row (`system` for the initial rows).
    pub updated_by: ActorId,
}

/// The outcome of one accepted status mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// The assessment whose row changed.
    pub assessment: AssessmentId,
    /// The row that changed.
    pub provision: ProvisionId,
    /// State before the mutation.
    pub previous: ComplianceStatus,
    /// State after the mutation.
    pub new: ComplianceStatus,
    /// Who performed the mutation.
    pub actor: ActorId,
    /// When the mutation happened.
    pub at: Timestamp,
}

/// All status rows for one assessment, keyed by provision id.
///
/// The row set is fixed at construction and mirrors the assessment's
/// applicable set exactly. Any status may move to any status, including
/// back to `not_assessed`; history lives in the audit chain, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLedger {
    /// The assessment these rows belong to.
    pub assessment: AssessmentId,
    rows: BTreeMap<ProvisionId, RequirementStatus>,
}

impl StatusLedger {
    /// Build the initial ledger from an assessment: one `not_assessed`
    /// row per applicable provision, attributed to the given actor.
    pub fn initialize(assessment: &Assessment, actor: &ActorId, at: Timestamp) -> Self {
        let rows = assessment
            .applicable
            .iter()
            .map(|provision| {
                (
                    provision.clone(),
                    RequirementStatus {
                        assessment: assessment.id,
                        provision: provision.clone(),
                        status: ComplianceStatus::NotAssessed,
                        updated_at: at,
                        updated_by: actor.clone(),
                    },
                )
            })
            .collect();
        Self {
            assessment: assessment.id,
            rows,
        }
    }

    /// Number of rows (== size of the applicable set).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the applicable set was empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up one row.
    pub fn row(&self, provision: &ProvisionId) -> Option<&RequirementStatus> {
        self.rows.get(provision)
    }

    /// All rows in provision-id order.
    pub fn rows(&self) -> impl Iterator<Item = &RequirementStatus> {
        self.rows.values()
    }

    /// Current status of every row, keyed by provision id.
    pub fn statuses(&self) -> BTreeMap<ProvisionId, ComplianceStatus> {
        self.rows
            .iter()
            .map(|(id, row)| (id.clone(), row.status))
            .collect()
    }

    /// Apply one status mutation.
    ///
    /// Setting a row to its current status is accepted and still
    /// reported (and audited by callers) as a change.
    ///
    /// # Errors
    ///
    /// `LedgerError::InvalidTransition` when the provision is not in the
    /// applicable set; no row is touched in that case.
    pub fn set_status(
        &mut self,
        provision: &ProvisionId,
        status: ComplianceStatus,
        actor: &ActorId,
        at: Timestamp,
    ) -> Result<StatusChange, LedgerError> {
        let row = self
            .rows
            .get_mut(provision)
            .ok_or_else(|| LedgerError::InvalidTransition {
                assessment: self.assessment,
                provision: provision.as_str().to_string(),
            })?;
        let previous = row.status;
        row.status = status;
        row.updated_at = at;
        row.updated_by = actor.clone();
        Ok(StatusChange {
            assessment: self.assessment,
            provision: provision.clone(),
            previous,
            new: status,
            actor: actor.clone(),
            at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regc_core::{DomainId, TenantId};
    use regc_kb::Catalog;

    const CATALOG_JSON: &str = r#"{
        "version": "2026.1",
        "domains": {
            "eu-space-act": {
                "domain": "eu-space-act",
                "name": "EU Space Act",
                "rules": {
                    "tier_rules": [
                        {"tier": "micro", "max_staff": 10, "max_revenue_eur": 2000000},
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
                        "critical": true
                    }
                ]
            }
        }
    }"#;

    fn assessment() -> Assessment {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        let profile = serde_json::from_value(serde_json::json!({
            "operator_type": "small-operator",
            "sector": "satcom",
            "staff_count": 8,
            "annual_revenue_eur": 1_200_000u64
        }))
        .unwrap();
        Assessment::compute(
            TenantId::new(),
            profile,
            DomainId::new("eu-space-act").unwrap(),
            &catalog,
            &Default::default(),
        )
        .unwrap()
    }

    fn actor() -> ActorId {
        ActorId::new("compliance-officer").unwrap()
    }

    fn t() -> Timestamp {
        Timestamp::parse("2026-03-01T09:30:00Z").unwrap()
    }

    #[test]
    fn test_initialize_creates_one_not_assessed_row_per_applicable() {
        let a = assessment();
        let ledger = StatusLedger::initialize(&a, &actor(), t());
        assert_eq!(ledger.len(), a.applicable.len());
        assert_eq!(ledger.len(), 2);
        for row in ledger.rows() {
            assert_eq!(row.status, ComplianceStatus::NotAssessed);
            assert_eq!(row.assessment, a.id);
        }
    }

    #[test]
    fn test_set_status_updates_row_and_reports_change() {
        let a = assessment();
        let mut ledger = StatusLedger::initialize(&a, &actor(), t());
        let art7 = ProvisionId::new("art-7").unwrap();

        let change = ledger
            .set_status(&art7, ComplianceStatus::Compliant, &actor(), t())
            .unwrap();
        assert_eq!(change.previous, ComplianceStatus::NotAssessed);
        assert_eq!(change.new, ComplianceStatus::Compliant);
        assert_eq!(
            ledger.row(&art7).unwrap().status,
            ComplianceStatus::Compliant
        );
    }

    #[test]
    fn test_any_status_can_move_to_any_status() {
        let a = assessment();
        let mut ledger = StatusLedger::initialize(&a, &actor(), t());
        let art7 = ProvisionId::new("art-7").unwrap();

        for &status in ComplianceStatus::all() {
            ledger.set_status(&art7, status, &actor(), t()).unwrap();
            assert_eq!(ledger.row(&art7).unwrap().status, status);
        }
        // Back to not_assessed is legal too.
        ledger
            .set_status(&art7, ComplianceStatus::NotAssessed, &actor(), t())
            .unwrap();
    }

    #[test]
    fn test_provision_outside_applicable_set_rejected() {
        let a = assessment();
        let mut ledger = StatusLedger::initialize(&a, &actor(), t());
        let bogus = ProvisionId::new("art-99").unwrap();

        let err = ledger
            .set_status(&bogus, ComplianceStatus::Compliant, &actor(), t())
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTransition { .. }));
        // Nothing changed.
        for row in ledger.rows() {
            assert_eq!(row.status, ComplianceStatus::NotAssessed);
        }
    }

    #[test]
    fn test_no_row_exists_outside_applicable_set() {
        let a = assessment();
        let ledger = StatusLedger::initialize(&a, &actor(), t());
        assert!(ledger.row(&ProvisionId::new("art-99").unwrap()).is_none());
    }

    #[test]
    fn test_statuses_snapshot() {
        let a = assessment();
        let mut ledger = StatusLedger::initialize(&a, &actor(), t());
        let art19 = ProvisionId::new("art-19").unwrap();
        ledger
            .set_status(&art19, ComplianceStatus::Partial, &actor(), t())
            .unwrap();

        let snapshot = ledger.statuses();
        assert_eq!(snapshot[&art19], ComplianceStatus::Partial);
        assert_eq!(
            snapshot[&ProvisionId::new("art-7").unwrap()],
            ComplianceStatus::NotAssessed
        );
    }
}
