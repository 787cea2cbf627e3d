//! Domain layer for calculator module

pub mod math;
pub mod service;

pub use service::Service;
