//! Adjudication result model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::bill::Bill;
use crate::grouper::Severity;
use crate::scheme::Scheme;

/// Scheme-specific settlement payload
///
/// The private variant deliberately carries no group code, severity or
/// payer split; those concepts do not exist outside the government scheme
/// and zero-filling them would imply a grouper computation that never ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheme_tag", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Settlement {
    Government {
        /// Full group code including severity numeral, e.g. "A-4-10-II"
        group_code: String,
        severity: Severity,
        /// Final tariff after comorbidity, neonatal and class adjustments
        tariff: Money,
        /// Facility share of the tariff (56%), informational
        jasa_sarana: Money,
        /// Service-provider share of the tariff (44%), informational
        jasa_pelayanan: Money,
        /// Covered amount minus bill total; negative when the facility
        /// absorbed a loss
        hospital_margin: Money,
    },
    PrivateCoverage {
        /// Coverage percentage (0-100)
        coverage_percent: Decimal,
        /// Coverage cap; zero means uncapped
        plafon: Money,
        deductible: Money,
    },
}

/// The outcome of adjudicating one case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjudicationResult {
    /// Classified payer scheme
    pub scheme: Scheme,
    /// The authoritative bill the case was settled against
    pub bill: Bill,
    /// Scheme-specific settlement breakdown
    pub settlement: Settlement,
    /// Amount the payer covers
    pub covered_amount: Money,
    /// Amount the patient owes
    pub patient_excess: Money,
    /// Human-readable description of the adjudicated group or policy
    pub description: String,
    /// Set for exceptional outcomes such as a voided claim
    pub warning: bool,
}

impl AdjudicationResult {
    /// Returns true when the claim was voided
    pub fn is_voided(&self) -> bool {
        self.warning && self.covered_amount.is_zero()
    }
}
