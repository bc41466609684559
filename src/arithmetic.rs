//! Arithmetic operations on monetary values.
//!
//! Each operation is a short composition of the scale normalizer, the
//! calculator and a rounding mode. Addition and subtraction come in two
//! flavours:
//!
//! - `safe_*` checks the currencies and normalizes scales first
//! - `unsafe_*` combines the raw amounts and keeps the left operand's
//!   currency and scale, for callers that already guarantee both match
//!
//! Multiplication and division by non-integral scalars always take an
//! explicit `RoundingMode`; nothing is truncated silently.

use crate::calculator::Calculator;
use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;
use crate::rounding::{round_div, round_scale, RoundingMode};
use crate::scale::normalize_pair;
use serde::{Deserialize, Serialize};

/// A scalar expressed as an integer amount and a scale.
///
/// `ScaledAmount::new(15, 1)` is 1.5 for a base-10 currency. The scale is
/// read in the base of the currency the scalar is applied to.
///
/// # Examples
///
/// ```rust
/// use moneta::ScaledAmount;
///
/// let whole: ScaledAmount<i64> = 3_i64.into();
/// assert_eq!(whole, ScaledAmount::new(3, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledAmount<A> {
    pub amount: A,
    pub scale: u32,
}

impl<A> ScaledAmount<A> {
    pub fn new(amount: A, scale: u32) -> Self {
        Self { amount, scale }
    }
}

impl<A> From<A> for ScaledAmount<A> {
    fn from(amount: A) -> Self {
        Self { amount, scale: 0 }
    }
}

impl<C: Calculator> Money<C> {
    /// Add two values of the same currency, normalizing their scales.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` when the currency codes differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64};
    ///
    /// let a = Money64::new(500, iso::usd()).unwrap();              // $5.00
    /// let b = Money64::with_scale(1005, iso::usd(), 3).unwrap();   // $1.005
    ///
    /// let sum = a.safe_add(&b).unwrap();
    /// assert_eq!(*sum.amount(), 6005);
    /// assert_eq!(sum.scale(), 3);
    /// ```
    pub fn safe_add(&self, addend: &Self) -> MoneyResult<Self> {
        let (augend, addend) = normalize_pair(self, addend)?;
        augend.unsafe_add(&addend)
    }

    /// Add raw amounts without checking currency or scale.
    pub fn unsafe_add(&self, addend: &Self) -> MoneyResult<Self> {
        let amount = self.calculator().add(self.amount(), addend.amount())?;
        Ok(self.with_amount(amount))
    }

    /// Subtract a value of the same currency, normalizing scales.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` when the currency codes differ.
    pub fn safe_subtract(&self, subtrahend: &Self) -> MoneyResult<Self> {
        let (minuend, subtrahend) = normalize_pair(self, subtrahend)?;
        minuend.unsafe_subtract(&subtrahend)
    }

    /// Subtract raw amounts without checking currency or scale.
    pub fn unsafe_subtract(&self, subtrahend: &Self) -> MoneyResult<Self> {
        let amount = self
            .calculator()
            .subtract(self.amount(), subtrahend.amount())?;
        Ok(self.with_amount(amount))
    }

    /// Multiply by a scalar and round back to this value's scale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64, RoundingMode, ScaledAmount};
    ///
    /// let price = Money64::new(401, iso::usd()).unwrap(); // $4.01
    /// let total = price
    ///     .multiply(ScaledAmount::new(15, 1), RoundingMode::HalfEven) // x 1.5
    ///     .unwrap();
    /// assert_eq!(*total.amount(), 602); // $6.015 -> $6.02
    /// ```
    pub fn multiply(
        &self,
        factor: impl Into<ScaledAmount<C::Amount>>,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let factor = factor.into();
        let calc = self.calculator();
        let product = calc.multiply(self.amount(), &factor.amount)?;
        let amount = round_scale(calc, &product, self.currency().base, factor.scale, mode)?;
        Ok(self.with_amount(amount))
    }

    /// Multiply by a scalar, keeping every digit.
    ///
    /// The result scale is this value's scale plus the factor's scale.
    ///
    /// # Errors
    ///
    /// `InvalidScale` when the widened scale does not fit the backend.
    pub fn multiply_exact(&self, factor: impl Into<ScaledAmount<C::Amount>>) -> MoneyResult<Self> {
        let factor = factor.into();
        let calc = self.calculator();
        let scale = self.scale() + factor.scale;
        if calc.radix_power(self.currency().base, scale).is_err() {
            return Err(MoneyError::InvalidScale(format!(
                "{}^{} does not fit the amount representation",
                self.currency().base,
                scale
            )));
        }
        let amount = calc.multiply(self.amount(), &factor.amount)?;
        Ok(Money::from_parts(amount, self.currency().clone(), scale))
    }

    /// Divide by a scalar, rounding the exact quotient once with `mode`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when the divisor is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64, RoundingMode};
    ///
    /// let bill = Money64::new(1000, iso::usd()).unwrap(); // $10.00
    /// let third = bill.divide(3_i64, RoundingMode::HalfEven).unwrap();
    /// assert_eq!(*third.amount(), 333);
    /// ```
    pub fn divide(
        &self,
        divisor: impl Into<ScaledAmount<C::Amount>>,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let divisor = divisor.into();
        let calc = self.calculator();
        if calc.is_zero(&divisor.amount) {
            return Err(MoneyError::DivisionByZero);
        }
        let factor = calc.radix_power(self.currency().base, divisor.scale)?;
        let numerator = calc.multiply(self.amount(), &factor)?;
        let amount = round_div(calc, &numerator, &divisor.amount, mode)?;
        Ok(self.with_amount(amount))
    }

    /// Take `percent` percent of this value, rounding with `mode`.
    ///
    /// # Errors
    ///
    /// `InvalidPercentage` unless `0 <= percent <= 100`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64, RoundingMode};
    ///
    /// let price = Money64::new(1999, iso::usd()).unwrap();
    /// let tip = price.percentage(15, RoundingMode::HalfUp).unwrap();
    /// assert_eq!(*tip.amount(), 300); // $2.9985 -> $3.00
    /// assert!(price.percentage(101, RoundingMode::HalfUp).is_err());
    /// ```
    pub fn percentage(&self, percent: C::Amount, mode: RoundingMode) -> MoneyResult<Self> {
        let calc = self.calculator();
        let hundred = calc.from_i64(100);
        if calc.is_negative(&percent) || calc.greater_than(&percent, &hundred) {
            return Err(MoneyError::InvalidPercentage(percent.to_string()));
        }
        let product = calc.multiply(self.amount(), &percent)?;
        let amount = round_div(calc, &product, &hundred, mode)?;
        Ok(self.with_amount(amount))
    }
}
