//! # Persistence Seam
//!
//! [`ComplianceStore`] is the single interface between the engine and
//! durable storage. Implementations must guarantee two things:
//!
//! 1. A status mutation and its audit entry commit together or not at
//!    all. A failed append leaves the status row untouched.
//! 2. Audit sequence numbers per tenant never fork: concurrent mutations
//!    serialize into a single chain.
//!
//! [`MemoryStore`] is the reference implementation: one mutex over all
//! state, append-then-apply ordering inside the critical section.

use std::collections::BTreeMap;
use std::sync::Mutex;

use tracing::debug;

use regc_assess::Assessment;
use regc_core::{ActorId, AssessmentId, ComplianceStatus, ProvisionId, TenantId, Timestamp};

use crate::audit::{AuditAction, AuditChain, AuditEntry, AuditPayload, VerificationResult};
use crate::error::LedgerError;
use crate::ledger::StatusLedger;

/// Durable storage for assessments, status ledgers, and audit chains.
pub trait ComplianceStore: Send + Sync {
    /// Store a freshly computed assessment, initialize its status ledger
    /// (all rows `not_assessed`), and append an `assessment_created`
    /// audit entry. All three happen atomically.
    ///
    /// # Errors
    ///
    /// `LedgerError::Persistence` when the assessment id is already
    /// stored or the write fails; nothing is stored in that case.
    fn insert_assessment(
        &self,
        assessment: Assessment,
        actor: &ActorId,
    ) -> Result<AuditEntry, LedgerError>;

    /// Fetch a stored assessment.
    fn assessment(&self, id: &AssessmentId) -> Result<Assessment, LedgerError>;

    /// Fetch the current status ledger of an assessment.
    fn ledger(&self, id: &AssessmentId) -> Result<StatusLedger, LedgerError>;

    /// Mutate one status row and append the matching audit entry, as a
    /// single atomic unit.
    ///
    /// # Errors
    ///
    /// `LedgerError::InvalidTransition` for a provision outside the
    /// applicable set, `LedgerError::UnknownAssessment` for an unknown
    /// id. On any error the row is untouched and no entry is appended.
    fn set_status(
        &self,
        id: &AssessmentId,
        provision: &ProvisionId,
        status: ComplianceStatus,
        actor: &ActorId,
    ) -> Result<AuditEntry, LedgerError>;

    /// All audit entries of a tenant's chain, in sequence order.
    fn audit_entries(&self, tenant: &TenantId) -> Result<Vec<AuditEntry>, LedgerError>;

    /// Verify a tenant's audit chain from the given sequence number.
    fn verify_audit_chain(
        &self,
        tenant: &TenantId,
        from_sequence: u64,
    ) -> Result<VerificationResult, LedgerError>;
}

#[derive(Debug, Default)]
struct Inner {
    assessments: BTreeMap<AssessmentId, Assessment>,
    ledgers: BTreeMap<AssessmentId, StatusLedger>,
    chains: BTreeMap<TenantId, AuditChain>,
}

/// In-memory [`ComplianceStore`]. One mutex serializes every mutation,
/// which gives last-committed-write-wins per row and gap-free audit
/// sequences per tenant without further coordination.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, LedgerError> {
        self.inner
            .lock()
            .map_err(|_| LedgerError::Persistence("store lock poisoned".to_string()))
    }
}

impl ComplianceStore for MemoryStore {
    fn insert_assessment(
        &self,
        assessment: Assessment,
        actor: &ActorId,
    ) -> Result<AuditEntry, LedgerError> {
        let mut inner = self.lock()?;
        if inner.assessments.contains_key(&assessment.id) {
            return Err(LedgerError::Persistence(format!(
                "{} is already stored",
                assessment.id
            )));
        }

        let now = Timestamp::now();
        let payload = AuditPayload {
            action: AuditAction::AssessmentCreated,
            assessment: assessment.id,
            provision: None,
            previous_status: None,
            new_status: None,
            actor: actor.clone(),
            timestamp: now,
        };

        // Append first: a canonicalization failure must leave the store
        // without the assessment, not with an unaudited one.
        let tenant = assessment.tenant;
        let entry = inner
            .chains
            .entry(tenant)
            .or_insert_with(|| AuditChain::new(tenant))
            .append(payload)?;

        let ledger = StatusLedger::initialize(&assessment, actor, now);
        debug!(
            assessment = %assessment.id,
            tenant = %tenant,
            rows = ledger.len(),
            "assessment stored"
        );
        inner.ledgers.insert(assessment.id, ledger);
        inner.assessments.insert(assessment.id, assessment);
        Ok(entry)
    }

    fn assessment(&self, id: &AssessmentId) -> Result<Assessment, LedgerError> {
        let inner = self.lock()?;
        inner
            .assessments
            .get(id)
            .cloned()
            .ok_or(LedgerError::UnknownAssessment(*id))
    }

    fn ledger(&self, id: &AssessmentId) -> Result<StatusLedger, LedgerError> {
        let inner = self.lock()?;
        inner
            .ledgers
            .get(id)
            .cloned()
            .ok_or(LedgerError::UnknownAssessment(*id))
    }

    fn set_status(
        &self,
        id: &AssessmentId,
        provision: &ProvisionId,
        status: ComplianceStatus,
        actor: &ActorId,
    ) -> Result<AuditEntry, LedgerError> {
        let mut inner = self.lock()?;
        let tenant = inner
            .assessments
            .get(id)
            .map(|a| a.tenant)
            .ok_or(LedgerError::UnknownAssessment(*id))?;
        let previous = inner
            .ledgers
            .get(id)
            .and_then(|l| l.row(provision))
            .map(|row| row.status)
            .ok_or_else(|| LedgerError::InvalidTransition {
                assessment: *id,
                provision: provision.as_str().to_string(),
            })?;

        let now = Timestamp::now();
        let payload = AuditPayload {
            action: AuditAction::StatusChanged,
            assessment: *id,
            provision: Some(provision.clone()),
            previous_status: Some(previous),
            new_status: Some(status),
            actor: actor.clone(),
            timestamp: now,
        };

        // Append first; apply the row update only once the entry is in.
        let entry = inner
            .chains
            .entry(tenant)
            .or_insert_with(|| AuditChain::new(tenant))
            .append(payload)?;
        if let Some(ledger) = inner.ledgers.get_mut(id) {
            ledger.set_status(provision, status, actor, now)?;
        }
        debug!(
            assessment = %id,
            provision = %provision,
            from = %previous,
            to = %status,
            "status changed"
        );
        Ok(entry)
    }

    fn audit_entries(&self, tenant: &TenantId) -> Result<Vec<AuditEntry>, LedgerError> {
        let inner = self.lock()?;
        inner
            .chains
            .get(tenant)
            .map(|chain| chain.entries().to_vec())
            .ok_or_else(|| LedgerError::UnknownTenant(tenant.to_string()))
    }

    fn verify_audit_chain(
        &self,
        tenant: &TenantId,
        from_sequence: u64,
    ) -> Result<VerificationResult, LedgerError> {
        let inner = self.lock()?;
        inner
            .chains
            .get(tenant)
            .map(|chain| chain.verify(from_sequence))
            .ok_or_else(|| LedgerError::UnknownTenant(tenant.to_string()))
    }
}
