//! Domain service for calculator
//!
//! Validates the operation label and routes to the checked arithmetic in
//! [`math`](super::math).

use alloy_primitives::U256;
use calculator_sdk::{CalculatorError, Operation};
use tracing::debug;

use super::math;

/// Stateless dispatch service.
///
/// Holds no state; every call is independent and reproducible from its
/// inputs alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolve `operation` and apply it to `a` and `b`.
    ///
    /// The label is checked once, before any arithmetic runs.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidOperation`] for an unknown label, otherwise
    /// whatever the selected arithmetic function returns.
    pub fn calculate(
        &self,
        a: U256,
        b: U256,
        operation: &str,
    ) -> Result<U256, CalculatorError> {
        let op = Operation::parse(operation).inspect_err(|e| {
            debug!(operation, error = %e, "rejected operation label");
        })?;
        self.apply(op, a, b)
    }

    /// Apply an already resolved operation.
    ///
    /// # Errors
    /// Propagates the arithmetic failure of `op` unchanged.
    pub fn apply(&self, op: Operation, a: U256, b: U256) -> Result<U256, CalculatorError> {
        debug!(%a, %b, operation = %op, "performing calculation");

        let result = match op {
            Operation::Add => math::add(a, b),
            Operation::Subtract => math::subtract(a, b),
            Operation::Multiply => math::multiply(a, b),
            Operation::Divide => math::divide(a, b),
        };

        if let Err(e) = &result {
            debug!(operation = %op, error = %e, "calculation failed");
        }
        result
    }
}
