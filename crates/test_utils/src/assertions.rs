//! Custom assertion helpers for domain types
//!
//! Keeps settlement-invariant checks in one place so every test asserts
//! them the same way.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_adjudication::AdjudicationResult;

/// Asserts a Money amount equals an expected decimal
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "expected {} but got {}",
        expected,
        actual
    );
}

/// Asserts the settlement identity: covered + excess == bill total
///
/// Holds for every private result; voided government claims satisfy it
/// through the documented exception (covered 0, excess = full bill).
pub fn assert_balanced_settlement(result: &AdjudicationResult) {
    assert_eq!(
        result.covered_amount + result.patient_excess,
        result.bill.total(),
        "covered {} + excess {} should equal bill total {}",
        result.covered_amount,
        result.patient_excess,
        result.bill.total()
    );
}

/// Asserts a result is a voided claim: nothing covered, full bill owed,
/// warning set
pub fn assert_voided(result: &AdjudicationResult) {
    assert!(result.warning, "voided claim must carry the warning flag");
    assert!(result.covered_amount.is_zero(), "voided claim covers nothing");
    assert_eq!(
        result.patient_excess,
        result.bill.total(),
        "voided claim leaves the full bill with the patient"
    );
    assert!(result.is_voided());
}
