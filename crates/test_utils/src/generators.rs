//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_adjudication::{CoverageRule, TreatmentClass};

/// Strategy for rupiah amounts in a realistic bill range
pub fn idr_amount_strategy() -> impl Strategy<Value = Money> {
    (1i64..100_000_000i64).prop_map(|amount| Money::from_minor(amount, Currency::IDR))
}

/// Strategy for rupiah amounts that may be zero
pub fn idr_amount_or_zero_strategy() -> impl Strategy<Value = Money> {
    (0i64..100_000_000i64).prop_map(|amount| Money::from_minor(amount, Currency::IDR))
}

/// Strategy for whole-percent coverage values (0-100)
pub fn coverage_percent_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=100u32).prop_map(|pct| Decimal::from(pct))
}

/// Strategy for treatment classes
pub fn treatment_class_strategy() -> impl Strategy<Value = TreatmentClass> {
    prop_oneof![
        Just(TreatmentClass::Class1),
        Just(TreatmentClass::Class2),
        Just(TreatmentClass::Class3),
    ]
}

/// Strategy for coverage rules with no plafon cap
pub fn uncapped_rule_strategy() -> impl Strategy<Value = CoverageRule> {
    (coverage_percent_strategy(), idr_amount_or_zero_strategy()).prop_map(
        |(percent, deductible)| {
            CoverageRule::new(percent, Money::zero(Currency::IDR), deductible)
        },
    )
}

/// Strategy for coverage rules with a positive plafon
pub fn capped_rule_strategy() -> impl Strategy<Value = CoverageRule> {
    (
        coverage_percent_strategy(),
        idr_amount_strategy(),
        idr_amount_or_zero_strategy(),
    )
        .prop_map(|(percent, plafon, deductible)| CoverageRule::new(percent, plafon, deductible))
}

/// Strategy for secondary diagnosis sets of bounded size
pub fn secondary_diagnoses_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("E11.9".to_string()),
            Just("I10".to_string()),
            Just("J06.9".to_string()),
        ],
        0..4,
    )
}
