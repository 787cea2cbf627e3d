//! Property-based tests for `Calculator::calculate`.

use alloy_primitives::U256;
use calculator::Calculator;
use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation};
use proptest::prelude::*;

// Full-width operands
fn any_u256() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256::from_limbs)
}

// Operands small enough that sums and products always fit
fn narrow_u256() -> impl Strategy<Value = U256> {
    any::<u128>().prop_map(U256::from)
}

fn non_zero_u256() -> impl Strategy<Value = U256> {
    any_u256().prop_filter("divisor must be non-zero", |b| !b.is_zero())
}

fn unsupported_label() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("must not be a supported label", |s| {
        Operation::ALL.iter().all(|op| op.as_str() != s)
    })
}

proptest! {
    #[test]
    fn subtract_without_underflow(a in any_u256(), b in any_u256()) {
        let (a, b) = if a >= b { (a, b) } else { (b, a) };
        prop_assert_eq!(Calculator::new().calculate(a, b, "subtract"), Ok(a - b));
    }

    #[test]
    fn subtract_underflows_when_b_exceeds_a(a in any_u256(), b in any_u256()) {
        prop_assume!(a != b);
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        prop_assert_eq!(
            Calculator::new().calculate(a, b, "subtract"),
            Err(CalculatorError::Underflow)
        );
    }

    #[test]
    fn divide_by_zero_fails(a in any_u256()) {
        prop_assert_eq!(
            Calculator::new().calculate(a, U256::ZERO, "divide"),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn divide_truncates(a in any_u256(), b in non_zero_u256()) {
        let q = Calculator::new().calculate(a, b, "divide");
        prop_assert_eq!(q, Ok(a / b));
        let q = a / b;
        prop_assert!(q * b <= a);
        prop_assert!(a - q * b < b);
    }

    #[test]
    fn add_fits_or_overflows(a in any_u256(), b in any_u256()) {
        let expected = a.checked_add(b).ok_or(CalculatorError::Overflow);
        prop_assert_eq!(Calculator::new().calculate(a, b, "add"), expected);
    }

    #[test]
    fn add_narrow_operands_never_overflows(a in narrow_u256(), b in narrow_u256()) {
        let sum = Calculator::new().calculate(a, b, "add");
        prop_assert!(sum.is_ok());
        prop_assert_eq!(sum, Calculator::new().calculate(b, a, "add"));
    }

    #[test]
    fn multiply_fits_or_overflows(a in any_u256(), b in any_u256()) {
        let expected = a.checked_mul(b).ok_or(CalculatorError::Overflow);
        prop_assert_eq!(Calculator::new().calculate(a, b, "multiply"), expected);
    }

    #[test]
    fn multiply_narrow_operands_never_overflows(a in narrow_u256(), b in narrow_u256()) {
        let product = Calculator::new().calculate(a, b, "multiply");
        prop_assert!(product.is_ok());
        prop_assert_eq!(product, Calculator::new().calculate(b, a, "multiply"));
    }

    #[test]
    fn unsupported_labels_are_rejected(a in any_u256(), b in any_u256(), label in unsupported_label()) {
        prop_assert_eq!(
            Calculator::new().calculate(a, b, &label),
            Err(CalculatorError::InvalidOperation)
        );
    }

    #[test]
    fn repeated_calls_agree(a in any_u256(), b in any_u256(), idx in 0usize..4) {
        let calculator = Calculator::new();
        let label = Operation::ALL[idx].as_str();
        prop_assert_eq!(calculator.calculate(a, b, label), calculator.calculate(a, b, label));
    }
}
