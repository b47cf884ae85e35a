//! Read-only lookup ports
//!
//! These traits are the engine's only view of the outside world: price
//! tables, coverage rules, and observed billing/insurance records owned by
//! the excluded storage layer. Every method returns `Option`; absence of
//! an entry is a valid state, never a panic and never an error at this
//! boundary. Implementations must be safe for concurrent read access.

use serde::{Deserialize, Serialize};

use core_kernel::{InsuranceId, Money, PatientId};

use crate::bill::ObservedInvoice;
use crate::case::TreatmentClass;
use crate::coverage::CoverageRule;

/// Reference-data price catalog
pub trait PriceLookup {
    /// Looks up the unit price and display name for a diagnosis code
    fn diagnosis_price(&self, code: &str) -> Option<(Money, String)>;

    /// Looks up the unit price for a procedure code
    fn procedure_price(&self, code: &str) -> Option<Money>;

    /// Looks up the INA-CBG group code for a diagnosis code
    fn group_code(&self, code: &str) -> Option<String>;
}

/// Coverage rule catalog for non-government payers
pub trait CoverageLookup {
    /// Looks up the coverage rule for an insurance record
    fn coverage_rule(&self, insurance_id: &InsuranceId) -> Option<CoverageRule>;
}

/// Observed billing and insurance records for a case
pub trait CaseSource {
    /// Fetches the observed invoice for a patient, if one exists
    fn observed_invoice(&self, patient_id: &PatientId) -> Option<ObservedInvoice>;

    /// Fetches the insurance profile behind a card number
    fn insurance_profile(&self, card_no: &str) -> Option<InsuranceProfile>;
}

/// Insurance facts resolved from a card number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceProfile {
    pub insurance_id: InsuranceId,
    pub insurance_type: Option<String>,
    pub insurance_name: Option<String>,
    pub class_level: TreatmentClass,
}
