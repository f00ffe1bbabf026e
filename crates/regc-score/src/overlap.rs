//! # Overlap Reports
//!
//! Reports which declared cross-domain equivalences are *live* for a
//! concrete set of assessments: a mapped pair appears iff both
//! provisions are applicable in their respective assessments and neither
//! ledger row currently stands at `not_applicable`.
//!
//! The report is derived, never authoritative: dropping one side of a
//! pair (say, a provision reclassified `not_applicable`) removes the
//! pair from the report and nothing else. The other side's ledger row
//! is untouched.

use serde::{Deserialize, Serialize};
use tracing::warn;

use regc_assess::Assessment;
use regc_core::{AssessmentId, ComplianceStatus, DomainId, ProvisionId};
use regc_kb::{Catalog, OverlapMapping};
use regc_ledger::StatusLedger;

/// One live overlap pair: the mapping plus the assessments it was
/// observed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapHit {
    /// Assessment covering the mapping's first domain.
    pub assessment_a: AssessmentId,
    /// Assessment covering the mapping's second domain.
    pub assessment_b: AssessmentId,
    /// The declared equivalence, including its estimated savings.
    pub mapping: OverlapMapping,
}

/// Find the assessment covering a domain and check that the provision is
/// applicable there with a row not currently `not_applicable`.
fn live_side(
    assessments: &[(&Assessment, &StatusLedger)],
    domain: &DomainId,
    provision: &ProvisionId,
) -> Option<AssessmentId> {
    let (assessment, ledger) = assessments.iter().find(|(a, _)| &a.domain == domain)?;
    let row = ledger.row(provision)?;
    if row.status == ComplianceStatus::NotApplicable {
        return None;
    }
    Some(assessment.id)
}

/// Compute the live overlap report for a set of assessments.
///
/// Mappings whose provision ids the catalog does not define are skipped
/// with a warning; the rest of the report is unaffected. Mappings whose
/// domains are not covered by any given assessment simply do not appear.
pub fn overlap_report(
    assessments: &[(&Assessment, &StatusLedger)],
    catalog: &Catalog,
) -> Vec<OverlapHit> {
    let mut hits = Vec::new();
    for mapping in &catalog.overlaps {
        if !catalog.contains(&mapping.domain_a, &mapping.provision_a)
            || !catalog.contains(&mapping.domain_b, &mapping.provision_b)
        {
            warn!(
                domain_a = %mapping.domain_a,
                provision_a = %mapping.provision_a,
                domain_b = %mapping.domain_b,
                provision_b = %mapping.provision_b,
                "overlap mapping references unknown provision, pair skipped"
            );
            continue;
        }
        let a = live_side(assessments, &mapping.domain_a, &mapping.provision_a);
        let b = live_side(assessments, &mapping.domain_b, &mapping.provision_b);
        if let (Some(assessment_a), Some(assessment_b)) = (a, b) {
            hits.push(OverlapHit {
                assessment_a,
                assessment_b,
                mapping: mapping.clone(),
            });
        }
    }
    hits
}
