//! Pre-built Test Fixtures
//!
//! Provides ready-to-use lookup tables and test data for the adjudication
//! engine. The price table mirrors the simplified ICD-10 tariff rows the
//! simulation is specified against, so unit tests and integration tests
//! agree on prices.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, InsuranceId, Money, PatientId};
use domain_adjudication::{
    CaseSource, CoverageLookup, CoverageRule, DocumentClock, InsuranceProfile, ObservedInvoice,
    PriceLookup,
};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A mid-range observed hospital bill
    pub fn idr_bill() -> Money {
        Money::idr(dec!(5000000))
    }

    /// The typhoid diagnosis tariff used across worked examples
    pub fn idr_typhoid_tariff() -> Money {
        Money::idr(dec!(4500000))
    }

    /// A typical plafon cap
    pub fn idr_plafon() -> Money {
        Money::idr(dec!(3000000))
    }

    /// A typical deductible
    pub fn idr_deductible() -> Money {
        Money::idr(dec!(200000))
    }

    /// Zero rupiah
    pub fn idr_zero() -> Money {
        Money::zero(Currency::IDR)
    }
}

struct DiagnosisRow {
    group_code: &'static str,
    price: Decimal,
    name: &'static str,
}

static DIAGNOSIS_TABLE: Lazy<HashMap<&'static str, DiagnosisRow>> = Lazy::new(|| {
    HashMap::from([
        ("A01.0", DiagnosisRow { group_code: "A-4-10", price: dec!(4500000), name: "Typhoid Fever" }),
        ("I10", DiagnosisRow { group_code: "I-4-10", price: dec!(3200000), name: "Essential Hypertension" }),
        ("E11.9", DiagnosisRow { group_code: "E-4-10", price: dec!(5100000), name: "Type 2 Diabetes Mellitus" }),
        ("J06.9", DiagnosisRow { group_code: "J-4-10", price: dec!(1500000), name: "Acute URI" }),
        ("K35.8", DiagnosisRow { group_code: "K-4-10", price: dec!(8500000), name: "Acute Appendicitis" }),
        ("P07.1", DiagnosisRow { group_code: "P-8-10", price: dec!(6000000), name: "Low Birth Weight Newborn" }),
        ("Z00.0", DiagnosisRow { group_code: "Z-9-99", price: dec!(150000), name: "General Medical Examination" }),
    ])
});

static PROCEDURE_TABLE: Lazy<HashMap<&'static str, Decimal>> = Lazy::new(|| {
    HashMap::from([
        // ICD-9-CM
        ("47.09", dec!(2500000)), // appendectomy
        ("99.04", dec!(750000)),  // transfusion
        ("03.31", dec!(450000)),  // lumbar puncture
        ("89.7", dec!(0)),        // general exam, priced at zero
    ])
});

/// In-memory price catalog backed by the fixed tariff rows above
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryPriceTable;

impl PriceLookup for InMemoryPriceTable {
    fn diagnosis_price(&self, code: &str) -> Option<(Money, String)> {
        DIAGNOSIS_TABLE
            .get(code)
            .map(|row| (Money::idr(row.price), row.name.to_string()))
    }

    fn procedure_price(&self, code: &str) -> Option<Money> {
        PROCEDURE_TABLE.get(code).map(|price| Money::idr(*price))
    }

    fn group_code(&self, code: &str) -> Option<String> {
        DIAGNOSIS_TABLE.get(code).map(|row| row.group_code.to_string())
    }
}

/// Price catalog with no entries, for unmapped-code scenarios
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPriceTable;

impl PriceLookup for EmptyPriceTable {
    fn diagnosis_price(&self, _code: &str) -> Option<(Money, String)> {
        None
    }

    fn procedure_price(&self, _code: &str) -> Option<Money> {
        None
    }

    fn group_code(&self, _code: &str) -> Option<String> {
        None
    }
}

/// In-memory coverage rule catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryCoverageTable {
    rules: HashMap<InsuranceId, CoverageRule>,
}

impl InMemoryCoverageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule and returns its insurance id
    pub fn insert(&mut self, rule: CoverageRule) -> InsuranceId {
        let id = InsuranceId::new();
        self.rules.insert(id, rule);
        id
    }
}

impl CoverageLookup for InMemoryCoverageTable {
    fn coverage_rule(&self, insurance_id: &InsuranceId) -> Option<CoverageRule> {
        self.rules.get(insurance_id).cloned()
    }
}

/// In-memory observed billing and insurance records
#[derive(Debug, Clone, Default)]
pub struct InMemoryCaseSource {
    invoices: HashMap<PatientId, ObservedInvoice>,
    profiles: HashMap<String, InsuranceProfile>,
}

impl InMemoryCaseSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observed invoice and returns its patient id
    pub fn insert_invoice(&mut self, invoice: ObservedInvoice) -> PatientId {
        let id = PatientId::new();
        self.invoices.insert(id, invoice);
        id
    }

    /// Registers an insurance profile under a card number
    pub fn insert_profile(&mut self, card_no: impl Into<String>, profile: InsuranceProfile) {
        self.profiles.insert(card_no.into(), profile);
    }
}

impl CaseSource for InMemoryCaseSource {
    fn observed_invoice(&self, patient_id: &PatientId) -> Option<ObservedInvoice> {
        self.invoices.get(patient_id).cloned()
    }

    fn insurance_profile(&self, card_no: &str) -> Option<InsuranceProfile> {
        self.profiles.get(card_no).cloned()
    }
}

/// Deterministic clock for document-number tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Morning of 2025-12-10, the standard fixture instant
    pub fn standard() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 12, 10, 9, 30, 0).unwrap())
    }
}

impl DocumentClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table_has_typhoid_row() {
        let table = InMemoryPriceTable;
        let (price, name) = table.diagnosis_price("A01.0").unwrap();
        assert_eq!(price, Money::idr(dec!(4500000)));
        assert_eq!(name, "Typhoid Fever");
        assert_eq!(table.group_code("A01.0").unwrap(), "A-4-10");
    }

    #[test]
    fn test_price_table_misses_unknown_codes() {
        let table = InMemoryPriceTable;
        assert!(table.diagnosis_price("X99.9").is_none());
        assert!(table.procedure_price("00.00").is_none());
        assert!(table.group_code("X99.9").is_none());
    }

    #[test]
    fn test_zero_priced_procedure_is_mapped() {
        let table = InMemoryPriceTable;
        assert_eq!(table.procedure_price("89.7").unwrap(), MoneyFixtures::idr_zero());
    }

    #[test]
    fn test_coverage_table_round_trip() {
        let mut table = InMemoryCoverageTable::new();
        let rule = CoverageRule::new(
            dec!(80),
            MoneyFixtures::idr_plafon(),
            MoneyFixtures::idr_deductible(),
        );
        let id = table.insert(rule.clone());

        assert_eq!(table.coverage_rule(&id).unwrap(), rule);
        assert!(table.coverage_rule(&InsuranceId::new()).is_none());
    }
}
