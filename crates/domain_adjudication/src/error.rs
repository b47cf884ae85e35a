//! Adjudication domain errors
//!
//! Unmapped clinical codes and inconsistent observed invoices are not
//! errors; they degrade to documented defaults inside the calculators.
//! What surfaces to the caller is a missing upstream record or a
//! currency mismatch in the settlement arithmetic.

use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the adjudication domain
#[derive(Debug, Error)]
pub enum AdjudicationError {
    #[error("Coverage rule not found for insurance: {0}")]
    CoverageRuleNotFound(String),

    #[error("Insurance profile not found for card: {0}")]
    InsuranceProfileNotFound(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
