//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorApi`)
//! - Operation and overflow policy types
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, CalculatorError, Operation};
//!
//! fn sum(api: &dyn CalculatorApi) -> Result<i64, CalculatorError> {
//!     api.evaluate(Operation::Add, 2, 3)
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorApi, CalculatorError, GREETING, Operation, OverflowPolicy};
