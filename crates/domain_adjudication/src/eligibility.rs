//! Simulated membership eligibility inquiry
//!
//! Stands in for the V-Claim participant inquiry: pure string inspection
//! of the card number, no I/O. Card numbers ending in '0' are inactive
//! with premium arrears; otherwise an even final digit maps to class 1 and
//! an odd one to class 3.

use serde::{Deserialize, Serialize};

use crate::case::TreatmentClass;

/// Outcome of a membership inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityStatus {
    pub active: bool,
    pub class_level: TreatmentClass,
    pub message: String,
}

/// Checks simulated membership status for a government card number
pub fn check_eligibility(card_no: &str) -> EligibilityStatus {
    if card_no.ends_with('0') {
        return EligibilityStatus {
            active: false,
            class_level: TreatmentClass::Class3,
            message: "Peserta Tidak Aktif (Tunggakan Iuran)".to_string(),
        };
    }

    // A missing or non-numeric final character is treated as odd
    let class_level = match card_no.chars().last().and_then(|c| c.to_digit(10)) {
        Some(digit) if digit % 2 == 0 => TreatmentClass::Class1,
        _ => TreatmentClass::Class3,
    };

    EligibilityStatus {
        active: true,
        class_level,
        message: "Peserta Aktif".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_zero_means_arrears() {
        let status = check_eligibility("000123456780");
        assert!(!status.active);
        assert_eq!(status.message, "Peserta Tidak Aktif (Tunggakan Iuran)");
    }

    #[test]
    fn test_even_final_digit_is_class_1() {
        let status = check_eligibility("000123456788");
        assert!(status.active);
        assert_eq!(status.class_level, TreatmentClass::Class1);
        assert_eq!(status.message, "Peserta Aktif");
    }

    #[test]
    fn test_odd_final_digit_is_class_3() {
        let status = check_eligibility("000123456787");
        assert!(status.active);
        assert_eq!(status.class_level, TreatmentClass::Class3);
    }

    #[test]
    fn test_non_digit_suffix_treated_as_odd() {
        let status = check_eligibility("CARD-X");
        assert!(status.active);
        assert_eq!(status.class_level, TreatmentClass::Class3);
    }

    #[test]
    fn test_empty_card_is_active_class_3() {
        let status = check_eligibility("");
        assert!(status.active);
        assert_eq!(status.class_level, TreatmentClass::Class3);
    }
}
