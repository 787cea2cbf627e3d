//! Checked arithmetic over `U256`.
//!
//! Each function enforces its own precondition and never wraps.

use alloy_primitives::U256;
use calculator_sdk::CalculatorError;

/// `a + b`.
///
/// # Errors
/// [`CalculatorError::Overflow`] if the sum exceeds `U256::MAX`.
pub fn add(a: U256, b: U256) -> Result<U256, CalculatorError> {
    a.checked_add(b).ok_or(CalculatorError::Overflow)
}

/// `a - b`.
///
/// # Errors
/// [`CalculatorError::Underflow`] if `b > a`.
pub fn subtract(a: U256, b: U256) -> Result<U256, CalculatorError> {
    a.checked_sub(b).ok_or(CalculatorError::Underflow)
}

/// `a * b`.
///
/// # Errors
/// [`CalculatorError::Overflow`] if the product exceeds `U256::MAX`.
pub fn multiply(a: U256, b: U256) -> Result<U256, CalculatorError> {
    a.checked_mul(b).ok_or(CalculatorError::Overflow)
}

/// `a / b`, truncating.
///
/// # Errors
/// [`CalculatorError::DivisionByZero`] if `b` is zero.
pub fn divide(a: U256, b: U256) -> Result<U256, CalculatorError> {
    a.checked_div(b).ok_or(CalculatorError::DivisionByZero)
}
