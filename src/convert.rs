//! Currency conversion.
//!
//! Conversion is division by an exact rational across currencies: the
//! amount is multiplied by the rate numerator and divided by the rate
//! denominator, with both scales folded in and a single rounding step at
//! the end. It deliberately skips the same-currency guard.

use crate::calculator::Calculator;
use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;
use crate::rounding::{round_div, RoundingMode};
use serde::{Deserialize, Serialize};

/// Exact exchange rate `numerator / (denominator * 10^scale)`.
///
/// Rates are decimal, whatever the base of the currencies involved.
///
/// # Examples
///
/// ```rust
/// use moneta::Rate;
///
/// let fraction = Rate::ratio(110_i64, 100);   // 1.1
/// let decimal = Rate::scaled(11_i64, 1);      // 1.1
/// assert_eq!(decimal.scale, 1);
/// assert_eq!(fraction.denominator, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate<A> {
    pub numerator: A,
    pub denominator: A,
    pub scale: u32,
}

impl<A> Rate<A> {
    /// A rate from an integer fraction.
    pub fn ratio(numerator: A, denominator: A) -> Self {
        Self {
            numerator,
            denominator,
            scale: 0,
        }
    }
}

impl<A: From<u8>> Rate<A> {
    /// A rate from a decimal written as amount and scale (`11, 1` is 1.1).
    pub fn scaled(amount: A, scale: u32) -> Self {
        Self {
            numerator: amount,
            denominator: A::from(1),
            scale,
        }
    }
}

impl<C: Calculator> Money<C> {
    /// Convert into `target` at `rate`.
    ///
    /// The result is expressed at `target_scale`, or at the target
    /// currency's exponent when `None`, and rounded once with `mode`.
    ///
    /// # Errors
    ///
    /// - `DivisionByZero` when the rate denominator is zero
    /// - `InvalidRate` when either side of the rate is negative
    /// - `InvalidCurrency` / `InvalidScale` when the target cannot be built
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64, Rate, RoundingMode};
    ///
    /// let dollars = Money64::new(100, iso::usd()).unwrap(); // $1.00
    /// let euros = dollars
    ///     .convert(iso::eur(), &Rate::ratio(110, 100), None, RoundingMode::HalfEven)
    ///     .unwrap();
    /// assert_eq!(*euros.amount(), 110);
    /// assert_eq!(euros.currency().code.as_str(), "EUR");
    /// ```
    pub fn convert(
        &self,
        target: Currency,
        rate: &Rate<C::Amount>,
        target_scale: Option<u32>,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let calc = self.calculator();
        if calc.is_zero(&rate.denominator) {
            return Err(MoneyError::DivisionByZero);
        }
        if calc.is_negative(&rate.denominator) || calc.is_negative(&rate.numerator) {
            return Err(MoneyError::InvalidRate(format!(
                "{}/{} is negative",
                rate.numerator, rate.denominator
            )));
        }

        let scale = target_scale.unwrap_or(target.exponent);
        let target_factor = calc.radix_power(target.base, scale)?;
        let source_factor = calc.radix_power(self.currency().base, self.scale())?;
        let rate_factor = calc.radix_power(10, rate.scale)?;

        let numerator = calc.multiply(
            &calc.multiply(self.amount(), &rate.numerator)?,
            &target_factor,
        )?;
        let denominator = calc.multiply(
            &calc.multiply(&rate.denominator, &rate_factor)?,
            &source_factor,
        )?;
        let amount = round_div(calc, &numerator, &denominator, mode)?;

        tracing::debug!(
            from = %self.currency().code,
            to = %target.code,
            scale,
            ?mode,
            "converted amount"
        );
        Money::with_scale(amount, target, scale)
    }
}
