use crate::error::OperationError;
use crate::Operation;
use rust_decimal::Decimal;

/// Exact decimal addition: `a + b`.
///
/// Defined for all operand pairs, so the default (accept-all) validation
/// applies. The same is true for the other three variants in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct Addition;

impl Operation for Addition {
    fn name(&self) -> &'static str {
        "Addition"
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        Ok(a + b)
    }
}

/// Exact decimal subtraction: `a - b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subtraction;

impl Operation for Subtraction {
    fn name(&self) -> &'static str {
        "Subtraction"
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        Ok(a - b)
    }
}

/// Exact decimal multiplication: `a * b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplication;

impl Operation for Multiplication {
    fn name(&self) -> &'static str {
        "Multiplication"
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        Ok(a * b)
    }
}

/// Absolute difference: `|a - b|`. The result is always non-negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteDifference;

impl Operation for AbsoluteDifference {
    fn name(&self) -> &'static str {
        "AbsoluteDifference"
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        Ok((a - b).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn addition_covers_signs_and_decimals() {
        let op = Addition;
        assert_eq!(op.execute(dec!(2), dec!(3)).unwrap(), dec!(5));
        assert_eq!(op.execute(dec!(-5), dec!(-3)).unwrap(), dec!(-8));
        assert_eq!(op.execute(dec!(-5), dec!(3)).unwrap(), dec!(-2));
        assert_eq!(op.execute(dec!(5), dec!(-5)).unwrap(), dec!(0));
        // The classic binary-float trap: 5.5 + 3.3 must be exactly 8.8.
        assert_eq!(op.execute(dec!(5.5), dec!(3.3)).unwrap(), dec!(8.8));
    }

    #[test]
    fn subtraction_covers_signs_and_decimals() {
        let op = Subtraction;
        assert_eq!(op.execute(dec!(5), dec!(3)).unwrap(), dec!(2));
        assert_eq!(op.execute(dec!(-5), dec!(-3)).unwrap(), dec!(-2));
        assert_eq!(op.execute(dec!(-5), dec!(3)).unwrap(), dec!(-8));
        assert_eq!(op.execute(dec!(5.5), dec!(3.3)).unwrap(), dec!(2.2));
    }

    #[test]
    fn multiplication_covers_signs_zero_and_decimals() {
        let op = Multiplication;
        assert_eq!(op.execute(dec!(5), dec!(3)).unwrap(), dec!(15));
        assert_eq!(op.execute(dec!(-5), dec!(-3)).unwrap(), dec!(15));
        assert_eq!(op.execute(dec!(-5), dec!(3)).unwrap(), dec!(-15));
        assert_eq!(op.execute(dec!(5), dec!(0)).unwrap(), dec!(0));
        assert_eq!(op.execute(dec!(5.5), dec!(3.3)).unwrap(), dec!(18.15));
    }

    #[test]
    fn absolute_difference_is_never_negative() {
        let op = AbsoluteDifference;
        assert_eq!(op.execute(dec!(10), dec!(5)).unwrap(), dec!(5));
        assert_eq!(op.execute(dec!(5), dec!(10)).unwrap(), dec!(5));
        assert_eq!(op.execute(dec!(-10), dec!(-5)).unwrap(), dec!(5));
        assert_eq!(op.execute(dec!(10), dec!(-5)).unwrap(), dec!(15));
        assert_eq!(op.execute(dec!(7.5), dec!(7.5)).unwrap(), dec!(0));
        // Exact decimal arithmetic: |4.3 - 5.1| is exactly 0.8, no drift.
        assert_eq!(op.execute(dec!(4.3), dec!(5.1)).unwrap(), dec!(0.8));
    }

    #[test]
    fn elementary_operations_never_fail_to_validate() {
        let ops: [(&dyn Operation, &str); 4] = [
            (&Addition, "Addition"),
            (&Subtraction, "Subtraction"),
            (&Multiplication, "Multiplication"),
            (&AbsoluteDifference, "AbsoluteDifference"),
        ];
        for (op, name) in ops {
            assert_eq!(op.name(), name);
            assert!(op.execute(dec!(0), dec!(0)).is_ok());
            assert!(op.execute(dec!(-1), dec!(0)).is_ok());
            assert!(op.execute(dec!(1e10), dec!(1e10)).is_ok());
        }
    }
}
