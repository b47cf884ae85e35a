//! Tariff Adjudication Domain
//!
//! This crate implements the tariff adjudication and grouper simulation
//! engine: a hospital bill is settled against either the government INA-CBG
//! diagnosis-related-group scheme or a private percentage-of-coverage
//! scheme, producing a payable tariff, a patient-owed excess, and an
//! auditable breakdown.
//!
//! # Adjudication Flow
//!
//! ```text
//! classify scheme -> aggregate bill -> government grouper
//!                                   -> private coverage calculator
//! ```
//!
//! The engine is a pure function of its inputs plus data obtained from the
//! read-only lookup ports in [`ports`]; it performs no I/O and holds no
//! state across calls. Document numbering is the only time-dependent piece
//! and lives behind an injectable clock in [`documents`].

pub mod scheme;
pub mod case;
pub mod bill;
pub mod grouper;
pub mod coverage;
pub mod result;
pub mod documents;
pub mod eligibility;
pub mod ports;
pub mod service;
pub mod error;

pub use scheme::Scheme;
pub use case::{CaseInput, TreatmentClass};
pub use bill::{Bill, BillLine, BillCategory, BillSource, ObservedInvoice, aggregate_bill};
pub use grouper::{Severity, adjudicate_government};
pub use coverage::{CoverageRule, adjudicate_private};
pub use result::{AdjudicationResult, Settlement};
pub use documents::{DocumentClock, SystemClock, DocumentNumberGenerator};
pub use eligibility::{EligibilityStatus, check_eligibility};
pub use ports::{PriceLookup, CoverageLookup, CaseSource, InsuranceProfile};
pub use service::AdjudicationService;
pub use error::AdjudicationError;
