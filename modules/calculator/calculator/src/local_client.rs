//! `Calculator`, the instantiable implementation of `CalculatorClientV1`.

use std::sync::Arc;

use alloy_primitives::U256;
use calculator_sdk::{CalculatorClientV1, CalculatorError};

use crate::domain::service::Service;

/// Concrete calculator.
///
/// Delegates every call to the domain [`Service`] without adding state or
/// validation. Cheap to clone and safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    service: Arc<Service>,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: Arc::new(Service::new()),
        }
    }
}

impl CalculatorClientV1 for Calculator {
    fn calculate(&self, a: U256, b: U256, operation: &str) -> Result<U256, CalculatorError> {
        self.service.calculate(a, b, operation)
    }
}
