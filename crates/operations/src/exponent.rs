//! Exponentiation variants.
//!
//! Known limitation: `Power` and `Root` route through an `f64` round-trip, so
//! results for non-integer exponents carry binary floating-point error rather
//! than being exact decimals. Integer exponents with exactly representable
//! results (e.g. `2^3`) come back exact.

use crate::error::OperationError;
use crate::Operation;
use rust_decimal::prelude::*;

/// Raises `a` to the power `b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Power;

impl Operation for Power {
    fn name(&self) -> &'static str {
        "Power"
    }

    fn validate(&self, _a: Decimal, b: Decimal) -> Result<(), OperationError> {
        if b.is_sign_negative() && !b.is_zero() {
            return Err(OperationError::Validation(
                "Negative exponents not supported".to_string(),
            ));
        }
        Ok(())
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        // `powf` works on f64. This is a controlled and accepted precision
        // trade-off; a result too large for a `Decimal` (or NaN) is an
        // error, never a substituted value.
        let approx = a.to_f64().unwrap_or(f64::NAN).powf(b.to_f64().unwrap_or(f64::NAN));
        Decimal::from_f64(approx).ok_or(OperationError::Overflow("Power"))
    }
}

/// Takes the `b`-th root of `a`, i.e. `a ^ (1/b)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Root;

impl Operation for Root {
    fn name(&self) -> &'static str {
        "Root"
    }

    fn validate(&self, a: Decimal, b: Decimal) -> Result<(), OperationError> {
        if a.is_sign_negative() && !a.is_zero() {
            return Err(OperationError::Validation(
                "Cannot calculate root of negative number".to_string(),
            ));
        }
        if b.is_zero() {
            return Err(OperationError::Validation(
                "Zero root is undefined".to_string(),
            ));
        }
        Ok(())
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        let degree = b.to_f64().unwrap_or(f64::NAN);
        let approx = a.to_f64().unwrap_or(f64::NAN).powf(1.0 / degree);
        Decimal::from_f64(approx).ok_or(OperationError::Overflow("Root"))
    }
}
