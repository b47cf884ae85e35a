//! Core Kernel - Foundational types and utilities for the adjudication system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic (IDR-first)
//! - Common identifiers and value objects

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{PatientId, InsuranceId};
