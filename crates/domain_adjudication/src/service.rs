//! Adjudication service
//!
//! The composition root for the engine: classify the scheme, aggregate the
//! bill, then dispatch to the scheme-matched calculator. The service owns
//! no state beyond its lookup ports and every call is an independent pure
//! computation, so concurrent requests need no coordination.

use tracing::debug;

use core_kernel::{InsuranceId, PatientId};

use crate::bill::{aggregate_bill, ObservedInvoice};
use crate::case::CaseInput;
use crate::coverage::adjudicate_private;
use crate::error::AdjudicationError;
use crate::grouper::adjudicate_government;
use crate::ports::{CaseSource, CoverageLookup, PriceLookup};
use crate::result::AdjudicationResult;
use crate::scheme::Scheme;

/// Orchestrates one adjudication request over the lookup ports
pub struct AdjudicationService<P: PriceLookup, C: CoverageLookup> {
    prices: P,
    coverage: C,
}

impl<P: PriceLookup, C: CoverageLookup> AdjudicationService<P, C> {
    pub fn new(prices: P, coverage: C) -> Self {
        Self { prices, coverage }
    }

    /// Adjudicates a case end to end
    ///
    /// Government cases run through the grouper and need no coverage rule.
    /// Company and private cases resolve their coverage rule through the
    /// lookup port; a missing rule is the one condition this engine
    /// surfaces as an error rather than defaulting.
    pub fn adjudicate(
        &self,
        case: &CaseInput,
        observed: Option<&ObservedInvoice>,
        insurance_id: Option<&InsuranceId>,
    ) -> Result<AdjudicationResult, AdjudicationError> {
        let scheme = case.scheme();
        debug!(scheme = %scheme, diagnosis = %case.primary_diagnosis, "classified case");

        let bill = aggregate_bill(observed, case, &self.prices);
        debug!(total = %bill.total(), source = ?bill.source(), "aggregated bill");

        match scheme {
            Scheme::Government => adjudicate_government(case, bill, &self.prices),
            Scheme::Company | Scheme::Private => {
                let rule = insurance_id
                    .and_then(|id| self.coverage.coverage_rule(id))
                    .ok_or_else(|| {
                        AdjudicationError::CoverageRuleNotFound(
                            insurance_id
                                .map(|id| id.to_string())
                                .unwrap_or_else(|| "<none>".to_string()),
                        )
                    })?;
                debug!(percent = %rule.coverage_percent, "resolved coverage rule");
                adjudicate_private(&rule, case, bill, &self.prices, scheme)
            }
        }
    }

    /// Adjudicates a case whose insurance facts and invoice live behind a
    /// [`CaseSource`]
    ///
    /// The clinical facts of `case` are kept; the insurance hint and
    /// treatment class are replaced by the profile resolved from the card
    /// number, and the observed invoice is fetched for the patient. An
    /// unresolvable card number is a NotFound error.
    pub fn adjudicate_from_source<S: CaseSource>(
        &self,
        source: &S,
        patient_id: &PatientId,
        card_no: &str,
        case: &CaseInput,
    ) -> Result<AdjudicationResult, AdjudicationError> {
        let profile = source.insurance_profile(card_no).ok_or_else(|| {
            AdjudicationError::InsuranceProfileNotFound(card_no.to_string())
        })?;
        debug!(insurance_id = %profile.insurance_id, "resolved insurance profile");

        let resolved = CaseInput {
            insurance_type: profile.insurance_type.clone(),
            insurance_name: profile.insurance_name.clone(),
            treatment_class: profile.class_level,
            ..case.clone()
        };

        let observed = source.observed_invoice(patient_id);
        self.adjudicate(&resolved, observed.as_ref(), Some(&profile.insurance_id))
    }
}
