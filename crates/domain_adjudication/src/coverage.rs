//! Private coverage calculation
//!
//! Non-government cases settle against a percentage-of-coverage policy:
//! deductible first, then the coverage percentage, then the plafon cap.
//! The comorbidity surcharge rate here (30%) deliberately differs from the
//! government scheme's 20%; the two payers adjudicate comorbidity
//! differently.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, Rate};

use crate::bill::{Bill, BillCategory, BillLine, BillSource};
use crate::case::CaseInput;
use crate::error::AdjudicationError;
use crate::ports::PriceLookup;
use crate::result::{AdjudicationResult, Settlement};
use crate::scheme::Scheme;

/// Diagnosis price surcharge per secondary diagnosis (linear)
pub const COMORBIDITY_RATE: Decimal = dec!(0.3);

/// Simulated bills below this floor are topped up by the admin fee
pub const SIMULATED_BILL_FLOOR: Decimal = dec!(500000);

/// Fixed administrative fee added to below-floor simulated bills
pub const ADMIN_FEE: Decimal = dec!(250000);

/// Coverage rule for a private or company policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRule {
    /// Coverage percentage, 0-100
    pub coverage_percent: Decimal,
    /// Coverage cap; zero means uncapped
    pub plafon: Money,
    /// Deductible subtracted from the bill before coverage applies
    pub deductible: Money,
}

impl CoverageRule {
    pub fn new(coverage_percent: Decimal, plafon: Money, deductible: Money) -> Self {
        Self {
            coverage_percent,
            plafon,
            deductible,
        }
    }

    /// Uncapped full coverage with no deductible
    pub fn full() -> Self {
        Self::new(
            dec!(100),
            Money::zero(Currency::IDR),
            Money::zero(Currency::IDR),
        )
    }
}

/// Adjudicates a non-government case against a coverage rule
///
/// When the aggregated bill has no usable observed total, the calculator
/// simulates its own: base clinical price inflated 30% per secondary
/// diagnosis, topped up by the admin fee when below the floor. Settlement
/// then runs deductible -> percentage -> plafon; the patient excess is the
/// exact remainder and is never clamped. A plafon in a currency other
/// than the bill's is an error, never a silently dropped cap.
pub fn adjudicate_private(
    rule: &CoverageRule,
    case: &CaseInput,
    bill: Bill,
    prices: &dyn PriceLookup,
    scheme: Scheme,
) -> Result<AdjudicationResult, AdjudicationError> {
    let bill = if bill.has_usable_total() {
        bill
    } else {
        simulate_private_bill(case, prices)
    };

    let bill_total = bill.total();
    let after_deductible = (bill_total - rule.deductible).clamp_non_negative();
    let initial_covered = Rate::from_percentage(rule.coverage_percent).apply(&after_deductible);

    let final_covered = if rule.plafon.is_positive() {
        initial_covered.min(&rule.plafon)?
    } else {
        initial_covered
    };

    let patient_excess = bill_total - final_covered;

    let percent = rule.coverage_percent.normalize();
    let description = if rule.plafon.is_positive() {
        format!("Private coverage {}% (plafon {})", percent, rule.plafon)
    } else {
        format!("Private coverage {}% (no plafon)", percent)
    };

    Ok(AdjudicationResult {
        scheme,
        bill,
        settlement: Settlement::PrivateCoverage {
            coverage_percent: rule.coverage_percent,
            plafon: rule.plafon,
            deductible: rule.deductible,
        },
        covered_amount: final_covered,
        patient_excess,
        description,
        warning: false,
    })
}

/// Simulates a private-scheme bill from clinical code prices
fn simulate_private_bill(case: &CaseInput, prices: &dyn PriceLookup) -> Bill {
    let (diagnosis_price, diagnosis_name) = prices
        .diagnosis_price(&case.primary_diagnosis)
        .unwrap_or_else(|| (Money::zero(Currency::IDR), "Unspecified".to_string()));

    let procedure_price = case
        .procedure_code
        .as_deref()
        .and_then(|code| prices.procedure_price(code))
        .unwrap_or_else(|| Money::zero(Currency::IDR));

    let base = diagnosis_price + procedure_price;
    let secondary_count = case.secondary_count();
    let inflated = if secondary_count >= 1 {
        base + base.multiply(COMORBIDITY_RATE * Decimal::from(secondary_count))
    } else {
        base
    };

    let mut lines = vec![BillLine::new(
        format!("Estimated Tariff ({})", diagnosis_name),
        BillCategory::Estimate,
        inflated,
    )];

    // Below-floor estimates gain the admin fee once to reach a realistic
    // minimum charge
    if inflated.amount() < SIMULATED_BILL_FLOOR {
        lines.push(BillLine::new(
            "Administrative Fee",
            BillCategory::Administration,
            Money::idr(ADMIN_FEE),
        ));
    }

    Bill::from_lines(lines, BillSource::Simulated)
}
