//! Calculator SDK
//!
//! This crate provides the public API for the calculator module:
//! - `CalculatorClientV1` trait, the single `calculate` capability
//! - Operation selector (`Operation`)
//! - Error type (`CalculatorError`)
//! - Call record for harnesses (`Calculation`)
//!
//! ```ignore
//! let calculator: Arc<dyn CalculatorClientV1> = Arc::new(Calculator::new());
//! let sum = calculator.calculate(U256::from(2), U256::from(3), "add")?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use alloy_primitives::U256;
pub use api::CalculatorClientV1;
pub use errors::CalculatorError;
pub use models::{Calculation, Operation, Outcome};

/// Name under which the calculator capability is registered.
pub const SERVICE_NAME: &str = "calculator.v1.Calculator";
