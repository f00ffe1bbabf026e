//! # Compliance Engine Facade
//!
//! The one entry point collaborators call. Holds the immutable catalog
//! (loaded once at process start), the persistence seam, and the
//! resolver/scoring configuration; every exposed operation delegates to
//! the pure crates underneath and goes through [`ComplianceStore`] for
//! anything stateful.

use std::sync::Arc;

use tracing::info;

use regc_assess::{Assessment, Profile, ResolverConfig};
use regc_core::{
    ActorId, AssessmentId, ComplianceStatus, DomainId, ProvisionId, TenantId,
};
use regc_kb::Catalog;
use regc_ledger::{AuditEntry, ComplianceStore, StatusLedger, VerificationResult};
use regc_score::{domain_score, overall_score, overlap_report, DomainScore, OverlapHit, ScorePolicy};

use crate::error::EngineError;

/// The compliance engine: catalog + store + configuration.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct ComplianceEngine<S: ComplianceStore> {
    catalog: Arc<Catalog>,
    store: S,
    resolver: ResolverConfig,
    policy: ScorePolicy,
}

impl<S: ComplianceStore> ComplianceEngine<S> {
    /// Build an engine over a loaded catalog and a store, with default
    /// resolver and scoring configuration.
    pub fn new(catalog: Arc<Catalog>, store: S) -> Self {
        Self {
            catalog,
            store,
            resolver: ResolverConfig::default(),
            policy: ScorePolicy::default(),
        }
    }

    /// Replace the resolver configuration.
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the scoring policy.
    pub fn with_policy(mut self, policy: ScorePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The catalog this engine runs against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Classify a profile, resolve applicability, and store the frozen
    /// assessment with its initial `not_assessed` ledger rows.
    ///
    /// # Errors
    ///
    /// Validation and applicability failures produce no assessment at
    /// all; a store failure rolls the whole insertion back.
    pub fn compute_assessment(
        &self,
        tenant: TenantId,
        profile: Profile,
        domain: DomainId,
        actor: &ActorId,
    ) -> Result<Assessment, EngineError> {
        if self.catalog.domain(&domain).is_none() {
            return Err(EngineError::UnknownDomain(domain));
        }
        let assessment =
            Assessment::compute(tenant, profile, domain, &self.catalog, &self.resolver)?;
        self.store.insert_assessment(assessment.clone(), actor)?;
        info!(
            assessment = %assessment.id,
            domain = %assessment.domain,
            applicable = assessment.applicable.len(),
            simplified = assessment.is_simplified(),
            "assessment computed"
        );
        Ok(assessment)
    }

    /// Fetch a stored assessment.
    pub fn assessment(&self, id: &AssessmentId) -> Result<Assessment, EngineError> {
        Ok(self.store.assessment(id)?)
    }

    /// Fetch the current status ledger of an assessment.
    pub fn ledger(&self, id: &AssessmentId) -> Result<StatusLedger, EngineError> {
        Ok(self.store.ledger(id)?)
    }

    /// Mutate one requirement status; the status row and its audit entry
    /// commit atomically.
    pub fn set_status(
        &self,
        id: &AssessmentId,
        provision: &ProvisionId,
        status: ComplianceStatus,
        actor: &ActorId,
    ) -> Result<AuditEntry, EngineError> {
        Ok(self.store.set_status(id, provision, status, actor)?)
    }

    /// Score one assessment from its current ledger state.
    pub fn score(&self, id: &AssessmentId) -> Result<DomainScore, EngineError> {
        let assessment = self.store.assessment(id)?;
        let ledger = self.store.ledger(id)?;
        let domain = self
            .catalog
            .domain(&assessment.domain)
            .ok_or_else(|| EngineError::UnknownDomain(assessment.domain.clone()))?;
        Ok(domain_score(&assessment, &ledger, domain, &self.policy))
    }

    /// Mean score across several assessments (one per domain).
    pub fn overall_score(&self, ids: &[AssessmentId]) -> Result<u8, EngineError> {
        let scores = ids
            .iter()
            .map(|id| self.score(id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(overall_score(&scores))
    }

    /// Live overlap report across several assessments.
    pub fn overlaps(&self, ids: &[AssessmentId]) -> Result<Vec<OverlapHit>, EngineError> {
        let snapshots = ids
            .iter()
            .map(|id| Ok((self.store.assessment(id)?, self.store.ledger(id)?)))
            .collect::<Result<Vec<_>, EngineError>>()?;
        let refs: Vec<(&Assessment, &StatusLedger)> =
            snapshots.iter().map(|(a, l)| (a, l)).collect();
        Ok(overlap_report(&refs, &self.catalog))
    }

    /// All audit entries of a tenant's chain.
    pub fn audit_entries(&self, tenant: &TenantId) -> Result<Vec<AuditEntry>, EngineError> {
        Ok(self.store.audit_entries(tenant)?)
    }

    /// Verify a tenant's audit chain from a sequence number.
    pub fn verify_audit_chain(
        &self,
        tenant: &TenantId,
        from_sequence: u64,
    ) -> Result<VerificationResult, EngineError> {
        Ok(self.store.verify_audit_chain(tenant, from_sequence)?)
    }
}
