//! Case input model
//!
//! A [`CaseInput`] carries the clinical codes and administrative facts for
//! one hospital encounter. It is constructed once per adjudication request
//! and never mutated.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::scheme::Scheme;

/// Discharge-against-medical-advice marker in the discharge status field
pub const DISCHARGE_APS: &str = "APS";

/// Low-birth-weight threshold in grams for the neonatal override
pub const NEONATAL_WEIGHT_THRESHOLD_GRAMS: u32 = 2500;

/// Inpatient treatment class
///
/// Class 3 is the base tariff; classes 2 and 1 carry fixed multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreatmentClass {
    Class1,
    Class2,
    Class3,
}

impl TreatmentClass {
    /// Creates a treatment class from its numeric level (1, 2 or 3)
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(TreatmentClass::Class1),
            2 => Some(TreatmentClass::Class2),
            3 => Some(TreatmentClass::Class3),
            _ => None,
        }
    }

    /// Returns the numeric class level
    pub fn level(&self) -> u8 {
        match self {
            TreatmentClass::Class1 => 1,
            TreatmentClass::Class2 => 2,
            TreatmentClass::Class3 => 3,
        }
    }

    /// Returns the tariff multiplier for this class
    ///
    /// Class 3 is the base; class 2 loads 20%, class 1 loads 40%.
    pub fn multiplier(&self) -> Decimal {
        match self {
            TreatmentClass::Class1 => dec!(1.4),
            TreatmentClass::Class2 => dec!(1.2),
            TreatmentClass::Class3 => dec!(1.0),
        }
    }
}

/// Input for one adjudication request
///
/// Secondary diagnosis order is irrelevant; only the count feeds the
/// severity and surcharge rules. Birth weight of 0 means the case is not a
/// neonate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseInput {
    /// Raw insurance type string from the upstream record, if any
    pub insurance_type: Option<String>,
    /// Raw insurance display name, if any
    pub insurance_name: Option<String>,
    /// Inpatient treatment class
    pub treatment_class: TreatmentClass,
    /// Primary diagnosis (ICD-10)
    pub primary_diagnosis: String,
    /// Procedure code (ICD-9-CM), if any
    pub procedure_code: Option<String>,
    /// Secondary diagnosis codes (comorbidities)
    pub secondary_diagnoses: Vec<String>,
    /// Free-text discharge status; "APS" is reserved
    pub discharge_status: String,
    /// Birth weight in grams; 0 when not applicable
    pub birth_weight_grams: u32,
}

impl CaseInput {
    /// Classifies this case's payer scheme from its insurance hint
    pub fn scheme(&self) -> Scheme {
        Scheme::classify(
            self.insurance_type.as_deref(),
            self.insurance_name.as_deref(),
        )
    }

    /// Returns true when the patient left against medical advice
    pub fn is_against_medical_advice(&self) -> bool {
        self.discharge_status == DISCHARGE_APS
    }

    /// Returns true for a low-birth-weight neonate (0 < weight < 2500g)
    pub fn is_low_birth_weight_neonate(&self) -> bool {
        self.birth_weight_grams > 0
            && self.birth_weight_grams < NEONATAL_WEIGHT_THRESHOLD_GRAMS
    }

    /// Returns the number of secondary diagnoses
    pub fn secondary_count(&self) -> usize {
        self.secondary_diagnoses.len()
    }
}
