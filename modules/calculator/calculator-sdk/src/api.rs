//! `CalculatorClientV1` trait definition.

use alloy_primitives::U256;

use crate::errors::CalculatorError;

/// Public API trait for the calculator module (Version 1).
///
/// Declares exactly one capability. Calls are synchronous, stateless and
/// atomic: a call either returns the full result or fails with one of the
/// [`CalculatorError`] kinds.
pub trait CalculatorClientV1: Send + Sync {
    /// Apply `operation` to the operands `a` and `b`.
    ///
    /// `operation` must be one of `"add"`, `"subtract"`, `"multiply"` or
    /// `"divide"`, compared case-sensitively.
    ///
    /// # Errors
    /// - [`CalculatorError::InvalidOperation`] if `operation` is not a supported label
    /// - [`CalculatorError::Underflow`] if subtracting a larger `b` from `a`
    /// - [`CalculatorError::DivisionByZero`] if dividing by zero
    /// - [`CalculatorError::Overflow`] if a sum or product does not fit 256 bits
    fn calculate(&self, a: U256, b: U256, operation: &str) -> Result<U256, CalculatorError>;
}
