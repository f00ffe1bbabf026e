//! # Audit Trail — Append-Only Hash Chain
//!
//! Every ledger mutation produces exactly one [`AuditEntry`], linked to
//! its predecessor by hash. Tampering with any historical payload breaks
//! the chain from that entry onward while leaving earlier entries intact,
//! so [`AuditChain::verify`] can name the first divergent sequence number.
//!
//! ## Chain Construction
//!
//! `hash = SHA-256(canonical({prev_hash, payload}))` — the payload is
//! canonicalized through `CanonicalBytes` (RFC 8785, floats rejected), so
//! the same payload can never hash two ways. The genesis entry's
//! `prev_hash` is [`GENESIS_PREV_HASH`], sixty-four zero hex chars.
//!
//! No update or delete operation exists on this component by design.

use serde::{Deserialize, Serialize};

use regc_core::{
    sha256_hex, ActorId, AssessmentId, CanonicalBytes, CanonicalizationError, ComplianceStatus,
    ProvisionId, TenantId, Timestamp,
};

/// The well-known `prev_hash` sentinel of the genesis entry.
pub const GENESIS_PREV_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// What a ledger mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// An assessment and its initial `not_assessed` rows were created.
    AssessmentCreated,
    /// One requirement status row changed state.
    StatusChanged,
}

/// The audited facts of one mutation. This is what gets canonicalized
/// and hashed; every field must therefore be float-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditPayload {
    /// What happened.
    pub action: AuditAction,
    /// The assessment whose ledger was mutated.
    pub assessment: AssessmentId,
    /// The row that changed; absent for assessment-level actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provision: Option<ProvisionId>,
    /// Status before the change; absent for assessment-level actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<ComplianceStatus>,
    /// Status after the change; absent for assessment-level actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_status: Option<ComplianceStatus>,
    /// Who performed the mutation.
    pub actor: ActorId,
    /// When the mutation happened.
    pub timestamp: Timestamp,
}

/// One link of the audit chain. Never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// 1-based position in the chain.
    pub sequence: u64,
    /// Hash of the previous entry ([`GENESIS_PREV_HASH`] for the first).
    pub prev_hash: String,
    /// SHA-256 over the canonical `{prev_hash, payload}` link.
    pub hash: String,
    /// The audited facts.
    pub payload: AuditPayload,
}

/// The hashed link structure. Binding `prev_hash` into the canonical
/// bytes is what chains entries together.
#[derive(Serialize)]
struct ChainLink<'a> {
    prev_hash: &'a str,
    payload: &'a AuditPayload,
}

/// Compute the hash of one chain link.
fn link_hash(prev_hash: &str, payload: &AuditPayload) -> Result<String, CanonicalizationError> {
    let cb = CanonicalBytes::new(&ChainLink { prev_hash, payload })?;
    Ok(sha256_hex(&cb))
}

/// Result of a chain verification pass. Reported, never auto-corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether every checked entry verified.
    pub valid: bool,
    /// The first sequence number whose stored hashes diverge from
    /// recomputation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_invalid: Option<u64>,
    /// How many entries were checked.
    pub entries_checked: u64,
}

/// An append-only, hash-chained audit log scoped to one tenant.
///
/// Appends are strictly sequential for a given chain: sequence numbers
/// never fork and never repeat. Callers serialize access (the store's
/// mutex in this workspace; a transaction in a relational store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditChain {
    /// The tenant this chain belongs to.
    pub tenant: TenantId,
    /// All entries, in sequence order.
    entries: Vec<AuditEntry>,
}

impl AuditChain {
    /// Create an empty chain for a tenant.
    pub fn new(tenant: TenantId) -> Self {
        Self {
            tenant,
            entries: Vec::new(),
        }
    }

    /// Number of entries in the chain.
    pub fn len(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Whether the chain has no entries yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in sequence order.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Append a payload as the next entry and return a copy of it.
    ///
    /// # Errors
    ///
    /// `CanonicalizationError` if the payload cannot be canonicalized;
    /// the chain is left untouched in that case.
    pub fn append(&mut self, payload: AuditPayload) -> Result<AuditEntry, CanonicalizationError> {
        let prev_hash = self
            .entries
            .last()
            .map(|e| e.hash.clone())
            .unwrap_or_else(|| GENESIS_PREV_HASH.to_string());
        let hash = link_hash(&prev_hash, &payload)?;
        let entry = AuditEntry {
            sequence: self.entries.len() as u64 + 1,
            prev_hash,
            hash,
            payload,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Recompute hashes from the genesis entry and report the first
    /// divergence at or after `from_sequence` (1-based; 0 behaves as 1).
    ///
    /// Earlier entries are still recomputed — the chain cannot be
    /// verified mid-stream without walking from genesis — but divergences
    /// before `from_sequence` are outside the requested window and not
    /// reported.
    pub fn verify(&self, from_sequence: u64) -> VerificationResult {
        let mut expected_prev = GENESIS_PREV_HASH.to_string();
        let mut first_invalid = None;
        let mut checked = 0u64;

        for entry in &self.entries {
            let in_window = entry.sequence >= from_sequence.max(1);
            if in_window {
                checked += 1;
            }
            let divergent = match link_hash(&expected_prev, &entry.payload) {
                Ok(recomputed) => entry.prev_hash != expected_prev || entry.hash != recomputed,
                Err(_) => true,
            };
            if divergent && in_window && first_invalid.is_none() {
                first_invalid = Some(entry.sequence);
            }
            // Continue the walk on the *stored* hash so one divergence
            // does not cascade into every later sequence number reported.
            expected_prev = entry.hash.clone();
        }

        VerificationResult {
            valid: first_invalid.is_none(),
            first_invalid,
            entries_checked: checked,
        }
    }
}
