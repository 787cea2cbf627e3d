//! Model types for the calculator SDK.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::errors::CalculatorError;

/// Operation selector.
///
/// Parsed from its text label by exact, case-sensitive equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All supported operations in canonical order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Text label of this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Resolve a text label into an operation.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidOperation`] unless `label` equals one
    /// of the four supported labels exactly.
    pub fn parse(label: &str) -> Result<Self, CalculatorError> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == label)
            .ok_or(CalculatorError::InvalidOperation)
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single `calculate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Decimal rendering of the result.
    Result(String),
    Error { code: String, message: String },
}

/// Record of one `calculate` call, as reported by harnesses.
///
/// Operands are rendered in decimal so the record survives JSON consumers
/// that cannot hold 256-bit numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub a: String,
    pub b: String,
    /// Operation label exactly as supplied by the caller.
    pub operation: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Calculation {
    #[must_use]
    pub fn record(
        a: U256,
        b: U256,
        operation: &str,
        result: &Result<U256, CalculatorError>,
    ) -> Self {
        let outcome = match result {
            Ok(value) => Outcome::Result(value.to_string()),
            Err(e) => Outcome::Error {
                code: e.code().to_owned(),
                message: e.to_string(),
            },
        };
        Self {
            a: a.to_string(),
            b: b.to_string(),
            operation: operation.to_owned(),
            outcome,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Result(_))
    }
}
