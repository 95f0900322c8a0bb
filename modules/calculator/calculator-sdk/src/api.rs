//! Calculator API trait and types
//!
//! Contract trait and types for the calculator service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Greeting returned by every [`CalculatorApi`] implementation.
pub const GREETING: &str = "Hello DevOps World - Enhanced with New Features!";

/// Calculator API trait
///
/// A stateless service that greets and performs integer arithmetic.
/// Implementations hold no mutable state, so every call is idempotent.
pub trait CalculatorApi: Send + Sync {
    /// Fixed greeting, identical on every call.
    fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Sum of `a` and `b`, wrapping on overflow.
    fn add(&self, a: i64, b: i64) -> i64;

    /// Product of `a` and `b`, wrapping on overflow.
    fn multiply(&self, a: i64, b: i64) -> i64;

    /// Evaluate `op` under the implementation's overflow policy.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Overflow`] when the policy is
    /// [`OverflowPolicy::Reject`] and the exact result does not fit in `i64`.
    fn evaluate(&self, op: Operation, a: i64, b: i64) -> Result<i64, CalculatorError>;
}

/// Binary operation supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when a result does not fit in `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound.
    #[default]
    Wrap,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturate,
    /// Fail with [`CalculatorError::Overflow`].
    Reject,
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("integer overflow: {op}({a}, {b}) does not fit in i64")]
    Overflow { op: Operation, a: i64, b: i64 },
}
