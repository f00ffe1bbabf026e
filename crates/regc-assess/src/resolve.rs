//! # Applicability Resolver
//!
//! Filters a domain's provisions down to the set that binds a concrete
//! entity. This module is the single interpreter of
//! [`PredicateClause`](regc_kb::PredicateClause) — include and exclude
//! sides run through the same evaluation, and the precedence rule lives
//! in exactly one `match` site.
//!
//! ## Precedence
//!
//! **Exclude always wins.** A provision whose exclude clause matches is
//! out, even when its include clause also matches. A provision with no
//! include clause is universally applicable unless excluded.
//!
//! ## Failure Semantics
//!
//! A predicate that references a profile field the profile does not define
//! aborts the whole domain computation. Applying a silently wrong subset
//! would be worse than failing.

use serde::{Deserialize, Serialize};

use regc_core::{ApplicabilityError, ProvisionId};
use regc_kb::{DomainCatalog, PredicateClause, Provision};

use crate::classify::Classification;
use crate::profile::{FieldValue, Profile};

/// How thresholds treat a field the caller declared unbounded/indefinite
/// (e.g. an insurance policy with no end date). The source material was
/// inconsistent here, so the interpretation is configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnboundedFieldPolicy {
    /// An unbounded value satisfies any threshold on that field.
    #[default]
    TreatAsSatisfied,
    /// Refuse to evaluate thresholds over unbounded values.
    Reject,
}

/// Resolver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Policy for unbounded numeric fields.
    #[serde(default)]
    pub unbounded_policy: UnboundedFieldPolicy,
}

/// Resolve the ordered set of provisions applicable to an entity.
///
/// The output preserves catalog (citation) order, and the computation is
/// deterministic and idempotent: identical inputs yield identical sets,
/// so retrying a failed assessment computation is always safe.
///
/// # Errors
///
/// `ApplicabilityError` when any predicate references an unknown profile
/// field, or reads an unbounded field under the reject policy. Fatal for
/// the whole domain.
pub fn resolve(
    profile: &Profile,
    classification: &Classification,
    catalog: &DomainCatalog,
    config: &ResolverConfig,
) -> Result<Vec<ProvisionId>, ApplicabilityError> {
    let mut applicable = Vec::new();
    for provision in &catalog.provisions {
        if applies(provision, profile, classification, config)? {
            applicable.push(provision.id.clone());
        }
    }
    tracing::debug!(
        domain = %catalog.domain,
        total = catalog.provisions.len(),
        applicable = applicable.len(),
        "resolved applicable provision set"
    );
    Ok(applicable)
}

/// Decide one provision. Both clauses are evaluated before precedence is
/// applied, so a malformed clause surfaces for every profile — not only
/// for profiles the other clause happens not to decide. Exclude wins
/// outright over a matching include.
fn applies(
    provision: &Provision,
    profile: &Profile,
    classification: &Classification,
    config: &ResolverConfig,
) -> Result<bool, ApplicabilityError> {
    let included = match &provision.include {
        None => true,
        Some(include) => clause_matches(include, provision, profile, classification, config)?,
    };
    if let Some(exclude) = &provision.exclude {
        if clause_matches(exclude, provision, profile, classification, config)? {
            tracing::debug!(provision = %provision.id, "excluded by predicate");
            return Ok(false);
        }
    }
    Ok(included)
}

/// Evaluate one clause: every specified part must hold.
fn clause_matches(
    clause: &PredicateClause,
    provision: &Provision,
    profile: &Profile,
    classification: &Classification,
    config: &ResolverConfig,
) -> Result<bool, ApplicabilityError> {
    if !clause.operator_types.is_empty()
        && !clause.operator_types.iter().any(|t| *t == profile.operator_type)
    {
        return Ok(false);
    }
    if !clause.size_tiers.is_empty() && !clause.size_tiers.contains(&classification.size_tier) {
        return Ok(false);
    }
    for rule in &clause.thresholds {
        let value = match profile.field(&rule.field) {
            FieldValue::Finite(v) => v,
            FieldValue::Unbounded => match config.unbounded_policy {
                UnboundedFieldPolicy::TreatAsSatisfied => continue,
                UnboundedFieldPolicy::Reject => {
                    return Err(ApplicabilityError::UnboundedRejected {
                        provision: provision.id.as_str().to_string(),
                        field: rule.field.clone(),
                    })
                }
            },
            FieldValue::Missing => {
                return Err(ApplicabilityError::UnknownField {
                    provision: provision.id.as_str().to_string(),
                    field: rule.field.clone(),
                })
            }
        };
        if !rule.cmp.evaluate(value, rule.value) {
            return Ok(false);
        }
    }
    for flag in &clause.flags {
        if !profile.has_flag(flag) {
            return Ok(false);
        }
    }
    Ok(true)
}
