use crate::error::OperationError;
use crate::Operation;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The shared precondition for the division family: a zero second operand has
/// no defined result. The message is a verbatim part of the public contract.
fn reject_zero_divisor(b: Decimal) -> Result<(), OperationError> {
    if b.is_zero() {
        return Err(OperationError::Validation(
            "Division by zero is not allowed".to_string(),
        ));
    }
    Ok(())
}

/// Exact decimal division: `a / b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Division;

impl Operation for Division {
    fn name(&self) -> &'static str {
        "Division"
    }

    fn validate(&self, _a: Decimal, b: Decimal) -> Result<(), OperationError> {
        reject_zero_divisor(b)
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        Ok(a / b)
    }
}

/// Floored-division remainder of `a / b`.
///
/// The sign of the result follows the sign of the divisor, not the dividend:
/// `10 mod -3 == -2`, `-10 mod 3 == 2`. `Decimal`'s native `%` is a truncated
/// remainder (sign of the dividend), so a non-zero remainder whose sign
/// disagrees with the divisor is shifted by one divisor step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modulus;

impl Operation for Modulus {
    fn name(&self) -> &'static str {
        "Modulus"
    }

    fn validate(&self, _a: Decimal, b: Decimal) -> Result<(), OperationError> {
        reject_zero_divisor(b)
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        let remainder = a % b;
        if !remainder.is_zero() && remainder.is_sign_negative() != b.is_sign_negative() {
            Ok(remainder + b)
        } else {
            Ok(remainder)
        }
    }
}

/// Integer division: `floor(a / b)`.
///
/// Floors toward negative infinity, not toward zero: `-10 div 3 == -4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerDivision;

impl Operation for IntegerDivision {
    fn name(&self) -> &'static str {
        "IntegerDivision"
    }

    fn validate(&self, _a: Decimal, b: Decimal) -> Result<(), OperationError> {
        reject_zero_divisor(b)
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        Ok((a / b).floor())
    }
}

/// What percentage `a` is of `b`: `(a / b) * 100`, computed exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Percentage;

impl Operation for Percentage {
    fn name(&self) -> &'static str {
        "Percentage"
    }

    fn validate(&self, _a: Decimal, b: Decimal) -> Result<(), OperationError> {
        reject_zero_divisor(b)
    }

    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        Ok((a / b) * dec!(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rejects_zero_divisor(op: &dyn Operation) {
        let err = op.execute(dec!(10), dec!(0)).unwrap_err();
        assert_eq!(
            err,
            OperationError::Validation("Division by zero is not allowed".to_string()),
            "{} must reject a zero divisor",
            op.name()
        );
    }

    #[test]
    fn division_is_exact() {
        let op = Division;
        assert_eq!(op.execute(dec!(6), dec!(2)).unwrap(), dec!(3));
        assert_eq!(op.execute(dec!(-6), dec!(-2)).unwrap(), dec!(3));
        assert_eq!(op.execute(dec!(-6), dec!(2)).unwrap(), dec!(-3));
        assert_eq!(op.execute(dec!(5.5), dec!(2)).unwrap(), dec!(2.75));
        assert_eq!(op.execute(dec!(0), dec!(5)).unwrap(), dec!(0));
    }

    #[test]
    fn modulus_follows_the_sign_of_the_divisor() {
        let op = Modulus;
        assert_eq!(op.execute(dec!(10), dec!(3)).unwrap(), dec!(1));
        assert_eq!(op.execute(dec!(10), dec!(-3)).unwrap(), dec!(-2));
        assert_eq!(op.execute(dec!(-10), dec!(3)).unwrap(), dec!(2));
        assert_eq!(op.execute(dec!(-10), dec!(-3)).unwrap(), dec!(-1));
        assert_eq!(op.execute(dec!(5.5), dec!(2)).unwrap(), dec!(1.5));
        assert_eq!(op.execute(dec!(10), dec!(10)).unwrap(), dec!(0));
    }

    #[test]
    fn integer_division_floors_toward_negative_infinity() {
        let op = IntegerDivision;
        assert_eq!(op.execute(dec!(10), dec!(3)).unwrap(), dec!(3));
        assert_eq!(op.execute(dec!(-10), dec!(3)).unwrap(), dec!(-4));
        assert_eq!(op.execute(dec!(10), dec!(-3)).unwrap(), dec!(-4));
        assert_eq!(op.execute(dec!(7.8), dec!(2.5)).unwrap(), dec!(3));
        assert_eq!(op.execute(dec!(4.5), dec!(2)).unwrap(), dec!(2));
    }

    #[test]
    fn percentage_is_exact() {
        let op = Percentage;
        assert_eq!(op.execute(dec!(50), dec!(100)).unwrap(), dec!(50));
        assert_eq!(op.execute(dec!(25), dec!(12.5)).unwrap(), dec!(200));
        assert_eq!(op.execute(dec!(1), dec!(10)).unwrap(), dec!(10));
        assert_eq!(op.execute(dec!(10), dec!(1)).unwrap(), dec!(1000));
    }

    #[test]
    fn the_whole_division_family_rejects_a_zero_divisor() {
        assert_rejects_zero_divisor(&Division);
        assert_rejects_zero_divisor(&Modulus);
        assert_rejects_zero_divisor(&IntegerDivision);
        assert_rejects_zero_divisor(&Percentage);
        // Any dividend, same outcome.
        assert!(Division.execute(dec!(0), dec!(0)).is_err());
        assert!(Division.execute(dec!(-3.7), dec!(0)).is_err());
    }
}
