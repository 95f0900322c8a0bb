//! Domain service for calculator
//!
//! Contains the core business logic for greeting and arithmetic operations.

use calculator_sdk::{CalculatorApi, CalculatorError, Operation, OverflowPolicy};
use tracing::debug;

use crate::config::CalculatorConfig;

/// Domain service that performs calculator operations.
///
/// This is a simple stateless service. The only thing it carries is the
/// overflow policy applied by [`CalculatorApi::evaluate`]; `add` and
/// `multiply` always wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Service {
    policy: OverflowPolicy,
}

impl Service {
    /// Create a new service with the default (wrapping) overflow policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_policy(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn from_config(cfg: &CalculatorConfig) -> Self {
        Self::with_policy(cfg.overflow)
    }

    #[must_use]
    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }
}

impl CalculatorApi for Service {
    fn add(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    fn multiply(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing multiplication");
        a.wrapping_mul(b)
    }

    fn evaluate(&self, op: Operation, a: i64, b: i64) -> Result<i64, CalculatorError> {
        debug!(%op, a, b, policy = ?self.policy, "evaluating");
        match self.policy {
            OverflowPolicy::Wrap => Ok(match op {
                Operation::Add => self.add(a, b),
                Operation::Multiply => self.multiply(a, b),
            }),
            OverflowPolicy::Saturate => Ok(match op {
                Operation::Add => a.saturating_add(b),
                Operation::Multiply => a.saturating_mul(b),
            }),
            OverflowPolicy::Reject => {
                let exact = match op {
                    Operation::Add => a.checked_add(b),
                    Operation::Multiply => a.checked_mul(b),
                };
                exact.ok_or(CalculatorError::Overflow { op, a, b })
            }
        }
    }
}
