//! Calculator Module
//!
//! Stateless, checked arithmetic over 256-bit unsigned integers.
//!
//! ## Architecture
//!
//! - `domain/math.rs` - Checked add/subtract/multiply/divide
//! - `domain/service.rs` - Operation validation and dispatch
//! - `local_client.rs` - `Calculator`, the instantiable `CalculatorClientV1`
//!
//! Consumers should depend on `calculator-sdk` for the trait and error types.

#![forbid(unsafe_code)]

pub mod domain;
mod local_client;

pub use local_client::Calculator;
