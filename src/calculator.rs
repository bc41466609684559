//! Calculator backends for monetary amounts.
//!
//! Every piece of raw arithmetic in the crate goes through the
//! `Calculator` trait, so the same scaling, rounding, allocation and
//! conversion code serves fixed-width and arbitrary-precision amounts.
//!
//! Backends:
//! - `I64Calculator` and `I128Calculator` (checked, report `Overflow`)
//! - `BigIntCalculator` when the `bigint` feature is enabled
//! - `DecimalCalculator` when the `decimal` feature is enabled

use crate::error::{MoneyError, MoneyResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "bigint")]
use num_bigint::BigInt;
#[cfg(feature = "bigint")]
use num_traits::{ToPrimitive, Zero};

#[cfg(feature = "decimal")]
use rust_decimal::Decimal;

/// Primitive numeric operations over one amount representation.
///
/// Calculators are stateless strategy values. They are `Copy` and
/// `Default` so a value object can carry one at no cost and any caller
/// can conjure one when needed.
///
/// Contract:
/// - `integer_divide` truncates toward zero.
/// - `modulo` carries the sign of the dividend.
/// - Both fail with `DivisionByZero` on a zero divisor.
/// - Fixed-width backends fail with `Overflow` instead of wrapping.
///
/// # Examples
///
/// ```rust
/// use moneta::calculator::{Calculator, I64Calculator};
///
/// let calc = I64Calculator;
/// assert_eq!(calc.add(&2, &3).unwrap(), 5);
/// assert_eq!(calc.integer_divide(&-7, &2).unwrap(), -3);
/// assert_eq!(calc.modulo(&-7, &2).unwrap(), -1);
/// assert!(calc.integer_divide(&1, &0).is_err());
/// ```
pub trait Calculator: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The integer representation this calculator operates on.
    type Amount: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync;

    /// `a + b`.
    fn add(&self, a: &Self::Amount, b: &Self::Amount) -> MoneyResult<Self::Amount>;

    /// `a - b`.
    fn subtract(&self, a: &Self::Amount, b: &Self::Amount) -> MoneyResult<Self::Amount>;

    /// `a * b`.
    fn multiply(&self, a: &Self::Amount, b: &Self::Amount) -> MoneyResult<Self::Amount>;

    /// `a / b`, truncated toward zero.
    fn integer_divide(&self, a: &Self::Amount, b: &Self::Amount) -> MoneyResult<Self::Amount>;

    /// `a % b`, with the sign of `a`.
    fn modulo(&self, a: &Self::Amount, b: &Self::Amount) -> MoneyResult<Self::Amount>;

    /// `base ^ exponent`.
    fn power(&self, base: &Self::Amount, exponent: u32) -> MoneyResult<Self::Amount>;

    /// Total ordering of two amounts.
    fn compare(&self, a: &Self::Amount, b: &Self::Amount) -> Ordering;

    /// The additive identity.
    fn zero(&self) -> Self::Amount;

    /// The multiplicative identity.
    fn one(&self) -> Self::Amount;

    /// Coerce a machine integer into the representation.
    fn from_i64(&self, value: i64) -> Self::Amount;

    /// Lossy conversion, meant for formatting only.
    fn to_f64(&self, a: &Self::Amount) -> f64;

    /// Whether the amount holds no fractional part.
    ///
    /// Integer backends always return `true`.
    fn is_integral(&self, _a: &Self::Amount) -> bool {
        true
    }

    /// `a + 1`.
    fn increment(&self, a: &Self::Amount) -> MoneyResult<Self::Amount> {
        self.add(a, &self.one())
    }

    /// `a - 1`.
    fn decrement(&self, a: &Self::Amount) -> MoneyResult<Self::Amount> {
        self.subtract(a, &self.one())
    }

    /// `a == b` according to `compare`.
    fn equal(&self, a: &Self::Amount, b: &Self::Amount) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// `a < b`.
    fn less_than(&self, a: &Self::Amount, b: &Self::Amount) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// `a > b`.
    fn greater_than(&self, a: &Self::Amount, b: &Self::Amount) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// `a == 0`.
    fn is_zero(&self, a: &Self::Amount) -> bool {
        self.equal(a, &self.zero())
    }

    /// `a < 0`.
    fn is_negative(&self, a: &Self::Amount) -> bool {
        self.less_than(a, &self.zero())
    }

    /// `-a`.
    fn negate(&self, a: &Self::Amount) -> MoneyResult<Self::Amount> {
        self.subtract(&self.zero(), a)
    }

    /// `|a|`.
    fn absolute(&self, a: &Self::Amount) -> MoneyResult<Self::Amount> {
        if self.is_negative(a) {
            self.negate(a)
        } else {
            Ok(a.clone())
        }
    }

    /// `a % 2 == 0`.
    fn is_even(&self, a: &Self::Amount) -> MoneyResult<bool> {
        let two = self.from_i64(2);
        Ok(self.is_zero(&self.modulo(a, &two)?))
    }

    /// `radix ^ exponent`, the factor between two scales.
    fn radix_power(&self, radix: u32, exponent: u32) -> MoneyResult<Self::Amount> {
        self.power(&self.from_i64(i64::from(radix)), exponent)
    }
}

macro_rules! primitive_calculator {
    ($(#[$meta:meta])* $name:ident, $int:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Calculator for $name {
            type Amount = $int;

            fn add(&self, a: &$int, b: &$int) -> MoneyResult<$int> {
                a.checked_add(*b).ok_or(MoneyError::Overflow("add"))
            }

            fn subtract(&self, a: &$int, b: &$int) -> MoneyResult<$int> {
                a.checked_sub(*b).ok_or(MoneyError::Overflow("subtract"))
            }

            fn multiply(&self, a: &$int, b: &$int) -> MoneyResult<$int> {
                a.checked_mul(*b).ok_or(MoneyError::Overflow("multiply"))
            }

            fn integer_divide(&self, a: &$int, b: &$int) -> MoneyResult<$int> {
                if *b == 0 {
                    return Err(MoneyError::DivisionByZero);
                }
                a.checked_div(*b).ok_or(MoneyError::Overflow("integer_divide"))
            }

            fn modulo(&self, a: &$int, b: &$int) -> MoneyResult<$int> {
                if *b == 0 {
                    return Err(MoneyError::DivisionByZero);
                }
                a.checked_rem(*b).ok_or(MoneyError::Overflow("modulo"))
            }

            fn power(&self, base: &$int, exponent: u32) -> MoneyResult<$int> {
                base.checked_pow(exponent).ok_or(MoneyError::Overflow("power"))
            }

            fn compare(&self, a: &$int, b: &$int) -> Ordering {
                a.cmp(b)
            }

            fn zero(&self) -> $int {
                0
            }

            fn one(&self) -> $int {
                1
            }

            fn from_i64(&self, value: i64) -> $int {
                <$int>::from(value)
            }

            fn to_f64(&self, a: &$int) -> f64 {
                *a as f64
            }
        }
    };
}

primitive_calculator!(
    /// Calculator over `i64` amounts.
    I64Calculator,
    i64
);

primitive_calculator!(
    /// Calculator over `i128` amounts, for large fixed-width values.
    I128Calculator,
    i128
);

/// Calculator over arbitrary-precision `BigInt` amounts.
///
/// Never overflows; only division and modulo by zero can fail.
#[cfg(feature = "bigint")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigIntCalculator;

#[cfg(feature = "bigint")]
impl Calculator for BigIntCalculator {
    type Amount = BigInt;

    fn add(&self, a: &BigInt, b: &BigInt) -> MoneyResult<BigInt> {
        Ok(a + b)
    }

    fn subtract(&self, a: &BigInt, b: &BigInt) -> MoneyResult<BigInt> {
        Ok(a - b)
    }

    fn multiply(&self, a: &BigInt, b: &BigInt) -> MoneyResult<BigInt> {
        Ok(a * b)
    }

    fn integer_divide(&self, a: &BigInt, b: &BigInt) -> MoneyResult<BigInt> {
        if b.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(a / b)
    }

    fn modulo(&self, a: &BigInt, b: &BigInt) -> MoneyResult<BigInt> {
        if b.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(a % b)
    }

    fn power(&self, base: &BigInt, exponent: u32) -> MoneyResult<BigInt> {
        Ok(base.pow(exponent))
    }

    fn compare(&self, a: &BigInt, b: &BigInt) -> Ordering {
        a.cmp(b)
    }

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::from(1)
    }

    fn from_i64(&self, value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn to_f64(&self, a: &BigInt) -> f64 {
        a.to_f64().unwrap_or(f64::NAN)
    }
}

/// Calculator over `rust_decimal::Decimal` amounts.
///
/// Amounts must be integral; the factory rejects values with a
/// fractional part. Operations fail with `Overflow` past the 96-bit
/// mantissa.
#[cfg(feature = "decimal")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecimalCalculator;

#[cfg(feature = "decimal")]
impl Calculator for DecimalCalculator {
    type Amount = Decimal;

    fn add(&self, a: &Decimal, b: &Decimal) -> MoneyResult<Decimal> {
        a.checked_add(*b).ok_or(MoneyError::Overflow("add"))
    }

    fn subtract(&self, a: &Decimal, b: &Decimal) -> MoneyResult<Decimal> {
        a.checked_sub(*b).ok_or(MoneyError::Overflow("subtract"))
    }

    fn multiply(&self, a: &Decimal, b: &Decimal) -> MoneyResult<Decimal> {
        a.checked_mul(*b).ok_or(MoneyError::Overflow("multiply"))
    }

    fn integer_divide(&self, a: &Decimal, b: &Decimal) -> MoneyResult<Decimal> {
        // Divide the exact multiple so no fractional digit can round the
        // quotient up.
        let remainder = self.modulo(a, b)?;
        let multiple = self.subtract(a, &remainder)?;
        multiple
            .checked_div(*b)
            .map(|q| q.trunc())
            .ok_or(MoneyError::Overflow("integer_divide"))
    }

    fn modulo(&self, a: &Decimal, b: &Decimal) -> MoneyResult<Decimal> {
        if b.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        a.checked_rem(*b).ok_or(MoneyError::Overflow("modulo"))
    }

    fn power(&self, base: &Decimal, exponent: u32) -> MoneyResult<Decimal> {
        let mut result = Decimal::ONE;
        for _ in 0..exponent {
            result = result
                .checked_mul(*base)
                .ok_or(MoneyError::Overflow("power"))?;
        }
        Ok(result)
    }

    fn compare(&self, a: &Decimal, b: &Decimal) -> Ordering {
        a.cmp(b)
    }

    fn zero(&self) -> Decimal {
        Decimal::ZERO
    }

    fn one(&self) -> Decimal {
        Decimal::ONE
    }

    fn from_i64(&self, value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn to_f64(&self, a: &Decimal) -> f64 {
        rust_decimal::prelude::ToPrimitive::to_f64(a).unwrap_or(f64::NAN)
    }

    fn is_integral(&self, a: &Decimal) -> bool {
        a.fract().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_basic_operations() {
        let calc = I64Calculator;
        assert_eq!(calc.add(&40, &2).unwrap(), 42);
        assert_eq!(calc.subtract(&40, &2).unwrap(), 38);
        assert_eq!(calc.multiply(&40, &2).unwrap(), 80);
        assert_eq!(calc.power(&10, 3).unwrap(), 1000);
        assert_eq!(calc.increment(&9).unwrap(), 10);
        assert_eq!(calc.decrement(&9).unwrap(), 8);
        assert_eq!(calc.compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn test_i64_division_truncates_toward_zero() {
        let calc = I64Calculator;
        assert_eq!(calc.integer_divide(&7, &2).unwrap(), 3);
        assert_eq!(calc.integer_divide(&-7, &2).unwrap(), -3);
        assert_eq!(calc.modulo(&7, &-2).unwrap(), 1);
        assert_eq!(calc.modulo(&-7, &2).unwrap(), -1);
    }

    #[test]
    fn test_division_by_zero() {
        let calc = I64Calculator;
        assert_eq!(calc.integer_divide(&1, &0), Err(MoneyError::DivisionByZero));
        assert_eq!(calc.modulo(&1, &0), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_i64_overflow_is_reported() {
        let calc = I64Calculator;
        assert_eq!(calc.add(&i64::MAX, &1), Err(MoneyError::Overflow("add")));
        assert!(calc.power(&10, 19).is_err());
        assert!(calc.integer_divide(&i64::MIN, &-1).is_err());
    }

    #[test]
    fn test_i128_holds_wider_values() {
        let calc = I128Calculator;
        assert_eq!(calc.power(&10, 30).unwrap(), 10_i128.pow(30));
    }

    #[test]
    fn test_derived_helpers() {
        let calc = I64Calculator;
        assert!(calc.is_even(&-4).unwrap());
        assert!(!calc.is_even(&-3).unwrap());
        assert_eq!(calc.absolute(&-5).unwrap(), 5);
        assert_eq!(calc.negate(&5).unwrap(), -5);
        assert!(calc.is_negative(&-1));
        assert!(calc.is_zero(&0));
        assert_eq!(calc.radix_power(5, 2).unwrap(), 25);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_never_overflows() {
        let calc = BigIntCalculator;
        let big = calc.power(&BigInt::from(10), 40).unwrap();
        let doubled = calc.add(&big, &big).unwrap();
        assert_eq!(calc.integer_divide(&doubled, &big).unwrap(), BigInt::from(2));
        assert_eq!(
            calc.modulo(&BigInt::from(-7), &BigInt::from(2)).unwrap(),
            BigInt::from(-1)
        );
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_decimal_integer_division() {
        let calc = DecimalCalculator;
        let q = calc
            .integer_divide(&Decimal::from(-7), &Decimal::from(2))
            .unwrap();
        assert_eq!(q, Decimal::from(-3));
        assert!(calc.is_integral(&Decimal::from(12)));
        assert!(!calc.is_integral(&Decimal::new(125, 1)));
        assert_eq!(
            calc.power(&Decimal::from(10), 4).unwrap(),
            Decimal::from(10_000)
        );
    }
}
