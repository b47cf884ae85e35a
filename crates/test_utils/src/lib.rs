//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! adjudication engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: In-memory lookup tables and pre-built test data
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
