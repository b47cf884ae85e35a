//! Payer scheme classification
//!
//! Normalizes the freeform insurance type/name pair carried by upstream
//! records into a closed scheme variant. Classification happens once per
//! case; everything downstream matches on the enum instead of re-parsing
//! strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The payer scheme a case is adjudicated under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scheme {
    /// Government INA-CBG scheme (BPJS/JKN)
    Government,
    /// Employer-paid coverage; settled like Private
    Company,
    /// Private percentage-of-coverage policy
    Private,
}

impl Scheme {
    /// Classifies a raw insurance type/name pair into a scheme
    ///
    /// Priority order:
    /// 1. Display name containing "BPJS" (case-insensitive) wins outright.
    /// 2. Type in {GOVERNMENT, BPJS, JKN} (uppercased).
    /// 3. Type COMPANY.
    /// 4. Anything else, including absent input, is Private.
    pub fn classify(raw_type: Option<&str>, display_name: Option<&str>) -> Self {
        if let Some(name) = display_name {
            if name.to_uppercase().contains("BPJS") {
                return Scheme::Government;
            }
        }

        match raw_type.map(str::to_uppercase).as_deref() {
            Some("GOVERNMENT") | Some("BPJS") | Some("JKN") => Scheme::Government,
            Some("COMPANY") => Scheme::Company,
            _ => Scheme::Private,
        }
    }

    /// Returns true for the government INA-CBG scheme
    pub fn is_government(&self) -> bool {
        matches!(self, Scheme::Government)
    }

    /// Returns the display code for this scheme
    pub fn code(&self) -> &'static str {
        match self {
            Scheme::Government => "GOVERNMENT",
            Scheme::Company => "COMPANY",
            Scheme::Private => "PRIVATE",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_bpjs_overrides_type() {
        let scheme = Scheme::classify(Some("COMPANY"), Some("Asuransi BPJS Kesehatan"));
        assert_eq!(scheme, Scheme::Government);
    }

    #[test]
    fn test_display_name_match_is_case_insensitive() {
        let scheme = Scheme::classify(None, Some("bpjs kesehatan"));
        assert_eq!(scheme, Scheme::Government);
    }

    #[test]
    fn test_government_type_aliases() {
        for raw in ["GOVERNMENT", "government", "BPJS", "jkn"] {
            assert_eq!(Scheme::classify(Some(raw), None), Scheme::Government);
        }
    }

    #[test]
    fn test_company_type() {
        assert_eq!(Scheme::classify(Some("Company"), None), Scheme::Company);
    }

    #[test]
    fn test_absent_input_defaults_to_private() {
        assert_eq!(Scheme::classify(None, None), Scheme::Private);
        assert_eq!(Scheme::classify(Some(""), Some("")), Scheme::Private);
    }

    #[test]
    fn test_unknown_type_defaults_to_private() {
        assert_eq!(Scheme::classify(Some("TPA"), Some("Mandiri Inhealth")), Scheme::Private);
    }
}
