//! # Compliance Scores
//!
//! A domain score summarizes one assessment's ledger as an integer in
//! `[0, 100]`: full credit for `compliant` rows, half credit for
//! `partial`, nothing for the rest. Rows set to `not_applicable` leave
//! the denominator entirely.
//!
//! ## Critical Failure Cap
//!
//! An assessment with any critical provision in `non_compliant` state
//! never scores above the configured cap, regardless of every other row.
//! A high score must not be achievable by piling compliant minor
//! provisions on top of a failed critical one.

use serde::{Deserialize, Serialize};
use tracing::warn;

use regc_assess::Assessment;
use regc_core::{AssessmentId, ComplianceStatus, DomainId};
use regc_kb::DomainCatalog;
use regc_ledger::StatusLedger;

/// Scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePolicy {
    /// Ceiling applied when any critical provision is `non_compliant`.
    pub critical_cap: u8,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self { critical_cap: 40 }
    }
}

/// One assessment's score with the counts it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScore {
    /// The scored assessment.
    pub assessment: AssessmentId,
    /// Its regulatory domain.
    pub domain: DomainId,
    /// Final score in `[0, 100]`, after any critical cap.
    pub score: u8,
    /// Score before the critical cap.
    pub raw: u8,
    /// Rows counted in the denominator (everything but `not_applicable`).
    pub assessable: u32,
    /// Row counts by status.
    pub compliant: u32,
    pub partial: u32,
    pub non_compliant: u32,
    pub not_assessed: u32,
    pub not_applicable: u32,
    /// Whether a critical provision in `non_compliant` state capped the
    /// score.
    pub critical_failure: bool,
}

/// Integer round-half-up of `100 * (compliant + partial/2) / assessable`.
fn raw_score(compliant: u32, partial: u32, assessable: u32) -> u8 {
    if assessable == 0 {
        return 0;
    }
    let num = 100 * (2 * u64::from(compliant) + u64::from(partial));
    let denom = 2 * u64::from(assessable);
    ((num + u64::from(assessable)) / denom) as u8
}

/// Score one assessment from a point-in-time ledger snapshot.
///
/// Pure read: the same snapshot always scores the same. A ledger row
/// whose provision is missing from the catalog (version drift between
/// the assessment and the loaded catalog) is counted by status but
/// cannot be critical-checked; it is logged and treated as non-critical.
pub fn domain_score(
    assessment: &Assessment,
    ledger: &StatusLedger,
    catalog: &DomainCatalog,
    policy: &ScorePolicy,
) -> DomainScore {
    let mut compliant = 0u32;
    let mut partial = 0u32;
    let mut non_compliant = 0u32;
    let mut not_assessed = 0u32;
    let mut not_applicable = 0u32;
    let mut critical_failure = false;

    for row in ledger.rows() {
        match row.status {
            ComplianceStatus::Compliant => compliant += 1,
            ComplianceStatus::Partial => partial += 1,
            ComplianceStatus::NonCompliant => non_compliant += 1,
            ComplianceStatus::NotAssessed => not_assessed += 1,
            ComplianceStatus::NotApplicable => not_applicable += 1,
        }
        if row.status == ComplianceStatus::NonCompliant {
            match catalog.provision(&row.provision) {
                Some(p) if p.critical => critical_failure = true,
                Some(_) => {}
                None => warn!(
                    provision = %row.provision,
                    domain = %assessment.domain,
                    "ledger row has no catalog provision, cannot check criticality"
                ),
            }
        }
    }

    let assessable = compliant + partial + non_compliant + not_assessed;
    let raw = raw_score(compliant, partial, assessable);
    let score = if critical_failure {
        raw.min(policy.critical_cap)
    } else {
        raw
    };

    DomainScore {
        assessment: assessment.id,
        domain: assessment.domain.clone(),
        score,
        raw,
        assessable,
        compliant,
        partial,
        non_compliant,
        not_assessed,
        not_applicable,
        critical_failure,
    }
}

/// Arithmetic mean (rounded half up) of per-domain scores. Zero domains
/// score 0.
pub fn overall_score(scores: &[DomainScore]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u64 = scores.iter().map(|s| u64::from(s.score)).sum();
    let n = scores.len() as u64;
    ((sum + n / 2) / n) as u8
}
