//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the fields that matter to them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_adjudication::{
    BillCategory, BillLine, CaseInput, CoverageRule, ObservedInvoice, TreatmentClass,
};

use crate::fixtures::MoneyFixtures;

/// Builder for [`CaseInput`]
///
/// Defaults to a healthy-discharge government (BPJS) typhoid case in
/// class 3 with no procedure, no comorbidities, and no birth weight.
pub struct CaseInputBuilder {
    insurance_type: Option<String>,
    insurance_name: Option<String>,
    treatment_class: TreatmentClass,
    primary_diagnosis: String,
    procedure_code: Option<String>,
    secondary_diagnoses: Vec<String>,
    discharge_status: String,
    birth_weight_grams: u32,
}

impl Default for CaseInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseInputBuilder {
    pub fn new() -> Self {
        Self {
            insurance_type: Some("BPJS".to_string()),
            insurance_name: None,
            treatment_class: TreatmentClass::Class3,
            primary_diagnosis: "A01.0".to_string(),
            procedure_code: None,
            secondary_diagnoses: vec![],
            discharge_status: "Pulang Sehat".to_string(),
            birth_weight_grams: 0,
        }
    }

    /// Switches the insurance hint to a private payer
    pub fn private_payer(mut self, name: impl Into<String>) -> Self {
        self.insurance_type = Some("PRIVATE".to_string());
        self.insurance_name = Some(name.into());
        self
    }

    pub fn with_insurance_type(mut self, raw: impl Into<String>) -> Self {
        self.insurance_type = Some(raw.into());
        self
    }

    pub fn with_insurance_name(mut self, name: impl Into<String>) -> Self {
        self.insurance_name = Some(name.into());
        self
    }

    pub fn without_insurance_hint(mut self) -> Self {
        self.insurance_type = None;
        self.insurance_name = None;
        self
    }

    pub fn with_class(mut self, class: TreatmentClass) -> Self {
        self.treatment_class = class;
        self
    }

    pub fn with_diagnosis(mut self, code: impl Into<String>) -> Self {
        self.primary_diagnosis = code.into();
        self
    }

    pub fn with_procedure(mut self, code: impl Into<String>) -> Self {
        self.procedure_code = Some(code.into());
        self
    }

    pub fn with_secondary(mut self, code: impl Into<String>) -> Self {
        self.secondary_diagnoses.push(code.into());
        self
    }

    pub fn with_discharge(mut self, status: impl Into<String>) -> Self {
        self.discharge_status = status.into();
        self
    }

    /// Marks the case as discharge-against-medical-advice
    pub fn discharged_aps(self) -> Self {
        self.with_discharge("APS")
    }

    pub fn with_birth_weight(mut self, grams: u32) -> Self {
        self.birth_weight_grams = grams;
        self
    }

    pub fn build(self) -> CaseInput {
        CaseInput {
            insurance_type: self.insurance_type,
            insurance_name: self.insurance_name,
            treatment_class: self.treatment_class,
            primary_diagnosis: self.primary_diagnosis,
            procedure_code: self.procedure_code,
            secondary_diagnoses: self.secondary_diagnoses,
            discharge_status: self.discharge_status,
            birth_weight_grams: self.birth_weight_grams,
        }
    }
}

/// Builder for [`ObservedInvoice`]
///
/// Defaults to an invoice with neither header total nor line items.
pub struct ObservedInvoiceBuilder {
    header_total: Option<Money>,
    lines: Vec<BillLine>,
}

impl Default for ObservedInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservedInvoiceBuilder {
    pub fn new() -> Self {
        Self {
            header_total: None,
            lines: vec![],
        }
    }

    pub fn with_header_total(mut self, total: Money) -> Self {
        self.header_total = Some(total);
        self
    }

    pub fn with_line(
        mut self,
        name: impl Into<String>,
        category: BillCategory,
        amount: Money,
    ) -> Self {
        self.lines.push(BillLine::new(name, category, amount));
        self
    }

    /// A typical itemized inpatient invoice totalling Rp 5,000,000
    pub fn typical_inpatient() -> Self {
        Self::new()
            .with_line("Kamar Perawatan", BillCategory::Service, Money::idr(dec!(2000000)))
            .with_line("Obat", BillCategory::Other, Money::idr(dec!(1500000)))
            .with_line("Tindakan", BillCategory::Procedure, Money::idr(dec!(1500000)))
    }

    pub fn build(self) -> ObservedInvoice {
        ObservedInvoice {
            header_total: self.header_total,
            lines: self.lines,
        }
    }
}

/// Builder for [`CoverageRule`]
///
/// Defaults to the 80% / plafon 3,000,000 / deductible 200,000 policy
/// used by the worked private example.
pub struct CoverageRuleBuilder {
    coverage_percent: Decimal,
    plafon: Money,
    deductible: Money,
}

impl Default for CoverageRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageRuleBuilder {
    pub fn new() -> Self {
        Self {
            coverage_percent: dec!(80),
            plafon: MoneyFixtures::idr_plafon(),
            deductible: MoneyFixtures::idr_deductible(),
        }
    }

    pub fn with_percent(mut self, percent: Decimal) -> Self {
        self.coverage_percent = percent;
        self
    }

    pub fn with_plafon(mut self, plafon: Money) -> Self {
        self.plafon = plafon;
        self
    }

    /// Removes the plafon cap
    pub fn uncapped(mut self) -> Self {
        self.plafon = Money::zero(Currency::IDR);
        self
    }

    pub fn with_deductible(mut self, deductible: Money) -> Self {
        self.deductible = deductible;
        self
    }

    pub fn build(self) -> CoverageRule {
        CoverageRule::new(self.coverage_percent, self.plafon, self.deductible)
    }
}
