//! Government INA-CBG grouper simulation
//!
//! This is not the certified grouper (the real algorithm ships as a
//! regulated proprietary binary); it is a simulation with simplified
//! substitute rules. The adjustment steps run in a fixed order because the
//! order changes the final severity and tariff:
//!
//! 1. group code lookup, 2. base pricing, 3. severity baseline,
//! 4. comorbidity escalation, 5. neonatal override, 6. raw tariff,
//! 7. class multiplier, 8. payer split, 9. APS voiding,
//! 10. settlement and margin, 11. display-bill fallback.
//!
//! Unmapped codes never raise; they degrade to zero prices and the
//! "UNSPECIFIED" group so that adjudication stays available.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, Money};

use crate::bill::{Bill, BillCategory, BillLine, BillSource};
use crate::case::CaseInput;
use crate::error::AdjudicationError;
use crate::ports::PriceLookup;
use crate::result::{AdjudicationResult, Settlement};
use crate::scheme::Scheme;

/// Group code used when the primary diagnosis has no mapping
pub const GROUP_UNSPECIFIED: &str = "UNSPECIFIED";

/// Group code forced for low-birth-weight neonates
pub const GROUP_NEONATAL: &str = "P-8-XX";

/// Diagnosis price surcharge per secondary diagnosis (linear, not compounding)
pub const COMORBIDITY_RATE: Decimal = dec!(0.2);

/// Diagnosis price multiplier for low-birth-weight neonates
pub const NEONATAL_MULTIPLIER: Decimal = dec!(1.5);

/// Facility share of the final tariff
pub const JASA_SARANA_RATIO: Decimal = dec!(0.56);

/// Service-provider share of the final tariff
pub const JASA_PELAYANAN_RATIO: Decimal = dec!(0.44);

/// Ratio of the final tariff used for the synthesized display bill
pub const ESTIMATED_BILL_RATIO: Decimal = dec!(0.85);

/// INA-CBG severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    I,
    II,
    III,
}

impl Severity {
    /// Escalates one step; level III saturates
    pub fn escalate(&self) -> Severity {
        match self {
            Severity::I => Severity::II,
            Severity::II => Severity::III,
            Severity::III => Severity::III,
        }
    }

    /// Returns the roman numeral suffix used in group codes
    pub fn numeral(&self) -> &'static str {
        match self {
            Severity::I => "I",
            Severity::II => "II",
            Severity::III => "III",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numeral())
    }
}

/// Adjudicates a government-scheme case against the simulated grouper
///
/// The returned settlement carries the grouped code with severity suffix,
/// the final tariff, and the informational jasa sarana / jasa pelayanan
/// split. An APS discharge voids the claim: nothing is covered, the
/// patient owes the full bill, and the warning flag is set. The only
/// error path is a currency mismatch in the money arithmetic.
pub fn adjudicate_government(
    case: &CaseInput,
    bill: Bill,
    prices: &dyn PriceLookup,
) -> Result<AdjudicationResult, AdjudicationError> {
    // 1. Group code resolution
    let mut group_code = prices
        .group_code(&case.primary_diagnosis)
        .unwrap_or_else(|| GROUP_UNSPECIFIED.to_string());

    // 2. Base pricing; unmapped codes price at zero
    let (base_diagnosis_price, diagnosis_name) = prices
        .diagnosis_price(&case.primary_diagnosis)
        .unwrap_or_else(|| (Money::zero(Currency::IDR), "Unspecified".to_string()));

    let procedure_price = case
        .procedure_code
        .as_deref()
        .and_then(|code| prices.procedure_price(code))
        .unwrap_or_else(|| Money::zero(Currency::IDR));

    // 3. Severity baseline. A procedure that prices at zero (unmapped or
    //    waived) does not raise the baseline.
    let mut severity = if procedure_price.is_positive() {
        Severity::II
    } else {
        Severity::I
    };

    // 4. Comorbidity escalation: one severity step, plus 20% of the base
    //    diagnosis price per secondary diagnosis
    let mut diagnosis_price = base_diagnosis_price;
    let secondary_count = case.secondary_count();
    if secondary_count >= 1 {
        severity = severity.escalate();
        let surcharge =
            base_diagnosis_price.multiply(COMORBIDITY_RATE * Decimal::from(secondary_count));
        diagnosis_price = diagnosis_price + surcharge;
    }

    // 5. Neonatal override, applied after the comorbidity inflation
    let mut description = diagnosis_name;
    if case.is_low_birth_weight_neonate() {
        group_code = GROUP_NEONATAL.to_string();
        description = format!("{} (Neonatal <2500g)", description);
        diagnosis_price = diagnosis_price.multiply(NEONATAL_MULTIPLIER);
    }

    // 6-7. Raw tariff, then class multiplier
    let raw_tariff = diagnosis_price + procedure_price;
    let final_tariff = raw_tariff.multiply(case.treatment_class.multiplier());

    // 8. Informational payer split; remainder lands on jasa pelayanan
    let split = final_tariff.allocate_by_ratios(&[JASA_SARANA_RATIO, JASA_PELAYANAN_RATIO])?;
    let (jasa_sarana, jasa_pelayanan) = (split[0], split[1]);

    // 11. Display-bill fallback: with no usable observed total, show 85%
    //     of the final tariff as the estimated real bill. This feeds only
    //     the displayed bill and the margin, never covered/excess.
    let bill = if bill.has_usable_total() {
        bill
    } else {
        Bill::single(
            BillLine::new(
                "Estimated Hospital Bill",
                BillCategory::Estimate,
                final_tariff.multiply(ESTIMATED_BILL_RATIO),
            ),
            BillSource::Simulated,
        )
    };

    // 9-10. Settlement: APS voids the claim outright
    let full_code = format!("{}-{}", group_code, severity.numeral());
    if case.is_against_medical_advice() {
        let bill_total = bill.total();
        return Ok(AdjudicationResult {
            scheme: Scheme::Government,
            settlement: Settlement::Government {
                group_code: full_code,
                severity,
                tariff: final_tariff,
                jasa_sarana,
                jasa_pelayanan,
                hospital_margin: Money::zero(Currency::IDR),
            },
            bill,
            covered_amount: Money::zero(Currency::IDR),
            patient_excess: bill_total,
            description: format!("{} (VOIDED - APS)", description),
            warning: true,
        });
    }

    // Margin may be negative: the facility absorbed a loss versus the
    // observed or estimated bill. Never clamped.
    let hospital_margin = final_tariff - bill.total();

    Ok(AdjudicationResult {
        scheme: Scheme::Government,
        settlement: Settlement::Government {
            group_code: full_code,
            severity,
            tariff: final_tariff,
            jasa_sarana,
            jasa_pelayanan,
            hospital_margin,
        },
        bill,
        covered_amount: final_tariff,
        patient_excess: Money::zero(Currency::IDR),
        description,
        warning: false,
    })
}
