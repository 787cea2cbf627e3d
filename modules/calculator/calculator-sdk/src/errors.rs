//! Error types for the calculator SDK.
//!
//! The `Display` text of each variant is the caller-visible failure reason
//! and must stay byte-for-byte stable.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorError {
    #[error("Underflow error")]
    Underflow,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid operation")]
    InvalidOperation,

    #[error("Overflow error")]
    Overflow,
}

impl CalculatorError {
    /// Stable machine-readable code for this failure kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Underflow => "UNDERFLOW",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidOperation => "INVALID_OPERATION",
            Self::Overflow => "OVERFLOW",
        }
    }
}
