//! Monetary value object.
//!
//! `Money` is an immutable `{amount, currency, scale}` triple. The amount
//! is an integer count of sub-units at `scale`, which may exceed the
//! currency's exponent for high-precision intermediate results. Values
//! are built only through the factory functions in this module and every
//! operation returns a new value.

use crate::calculator::Calculator;
use crate::config::MoneyConfig;
use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};
use serde::{Deserialize, Serialize};

/// Construction options for the factory.
///
/// `scale` defaults to the currency exponent when `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyOptions<A> {
    pub amount: A,
    pub currency: Currency,
    pub scale: Option<u32>,
}

/// Plain data form of a monetary value.
///
/// This is the canonical interchange shape for formatting and
/// persistence. `Money::from_snapshot(money.to_snapshot())` reproduces an
/// equal value.
///
/// # Examples
///
/// ```rust
/// use moneta::{iso, Money64, MoneySnapshot};
///
/// let price = Money64::new(1050, iso::usd()).unwrap();
/// let json = serde_json::to_string(&price.to_snapshot()).unwrap();
/// let snapshot: MoneySnapshot<i64> = serde_json::from_str(&json).unwrap();
///
/// assert_eq!(Money64::from_snapshot(snapshot).unwrap(), price);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneySnapshot<A> {
    pub amount: A,
    pub currency: Currency,
    pub scale: u32,
}

/// An exact monetary amount in a given currency and scale.
///
/// `C` selects the numeric backend; see the aliases `Money64`,
/// `Money128`, `BigMoney` and `DecimalMoney`.
///
/// # Examples
///
/// ```rust
/// use moneta::{iso, Money64};
///
/// // $10.50
/// let price = Money64::new(1050, iso::usd()).unwrap();
/// assert_eq!(*price.amount(), 1050);
/// assert_eq!(price.scale(), 2);
///
/// // $10.500 at a higher scale
/// let precise = Money64::with_scale(10500, iso::usd(), 3).unwrap();
/// assert!(price.equal(&precise).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Money<C: Calculator> {
    amount: C::Amount,
    currency: Currency,
    scale: u32,
    calculator: C,
}

impl<C: Calculator> Money<C> {
    /// Create a value at the currency's natural scale.
    pub fn new(amount: C::Amount, currency: Currency) -> MoneyResult<Self> {
        Self::from_options(MoneyOptions {
            amount,
            currency,
            scale: None,
        })
    }

    /// Create a value at an explicit scale.
    pub fn with_scale(amount: C::Amount, currency: Currency, scale: u32) -> MoneyResult<Self> {
        Self::from_options(MoneyOptions {
            amount,
            currency,
            scale: Some(scale),
        })
    }

    /// Validate options and build a value.
    ///
    /// # Errors
    ///
    /// - `InvalidCurrency` if the currency base is below 2
    /// - `InvalidAmount` if the amount has a fractional part
    /// - `InvalidScale` if the backend cannot express `base^scale`
    pub fn from_options(options: MoneyOptions<C::Amount>) -> MoneyResult<Self> {
        let calculator = C::default();
        let MoneyOptions {
            amount,
            currency,
            scale,
        } = options;

        if currency.base < 2 {
            return Err(MoneyError::InvalidCurrency(format!(
                "{} has base {}",
                currency.code, currency.base
            )));
        }
        if !calculator.is_integral(&amount) {
            return Err(MoneyError::InvalidAmount(format!(
                "{amount} is not an integer"
            )));
        }

        let scale = scale.unwrap_or(currency.exponent);
        if calculator.radix_power(currency.base, scale).is_err() {
            return Err(MoneyError::InvalidScale(format!(
                "{}^{} does not fit the amount representation",
                currency.base, scale
            )));
        }

        Ok(Self::from_parts(amount, currency, scale))
    }

    /// Build the default value described by a configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{Money64, MoneyConfig};
    ///
    /// let zero = Money64::from_config(&MoneyConfig::default()).unwrap();
    /// assert_eq!(*zero.amount(), 0);
    /// assert_eq!(zero.currency().code.as_str(), "USD");
    /// ```
    pub fn from_config(config: &MoneyConfig) -> MoneyResult<Self> {
        let amount = C::default().from_i64(config.default_amount);
        Self::new(amount, config.default_currency.clone())
    }

    /// Rebuild a value from its plain data form.
    pub fn from_snapshot(snapshot: MoneySnapshot<C::Amount>) -> MoneyResult<Self> {
        Self::with_scale(snapshot.amount, snapshot.currency, snapshot.scale)
    }

    /// Internal constructor for results whose invariants already hold.
    pub(crate) fn from_parts(amount: C::Amount, currency: Currency, scale: u32) -> Self {
        Self {
            amount,
            currency,
            scale,
            calculator: C::default(),
        }
    }

    /// A new value in the same currency and scale.
    pub(crate) fn with_amount(&self, amount: C::Amount) -> Self {
        Self::from_parts(amount, self.currency.clone(), self.scale)
    }

    /// Integer count of sub-units at `scale`.
    pub fn amount(&self) -> &C::Amount {
        &self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Digits after the radix point the amount is expressed at.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The calculator this value computes with.
    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Copy out the plain `{amount, currency, scale}` triple.
    pub fn to_snapshot(&self) -> MoneySnapshot<C::Amount> {
        MoneySnapshot {
            amount: self.amount.clone(),
            currency: self.currency.clone(),
            scale: self.scale,
        }
    }

    /// Lossy floating-point value in major units, for formatting only.
    pub fn to_number(&self) -> f64 {
        let divisor = f64::from(self.currency.base).powi(self.scale as i32);
        self.calculator.to_f64(&self.amount) / divisor
    }

    /// Split the amount into major units and the sub-unit remainder.
    ///
    /// Both parts carry the sign of the amount.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64};
    ///
    /// let price = Money64::new(-1050, iso::usd()).unwrap();
    /// assert_eq!(price.to_units().unwrap(), (-10, -50));
    /// ```
    pub fn to_units(&self) -> MoneyResult<(C::Amount, C::Amount)> {
        let calc = &self.calculator;
        let factor = calc.radix_power(self.currency.base, self.scale)?;
        let major = calc.integer_divide(&self.amount, &factor)?;
        let minor = calc.modulo(&self.amount, &factor)?;
        Ok((major, minor))
    }
}

impl<C: Calculator> PartialEq for Money<C> {
    /// Structural equality: same amount, currency and scale.
    ///
    /// Use `Money::equal` to compare values across scales.
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale
            && self.currency == other.currency
            && self.calculator.equal(&self.amount, &other.amount)
    }
}

/// `Money` over `i64` amounts.
pub type Money64 = Money<crate::calculator::I64Calculator>;

/// `Money` over `i128` amounts.
pub type Money128 = Money<crate::calculator::I128Calculator>;

/// `Money` over arbitrary-precision amounts.
#[cfg(feature = "bigint")]
pub type BigMoney = Money<crate::calculator::BigIntCalculator>;

/// `Money` over integral `rust_decimal::Decimal` amounts.
#[cfg(feature = "decimal")]
pub type DecimalMoney = Money<crate::calculator::DecimalCalculator>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::iso;

    #[test]
    fn test_scale_defaults_to_exponent() {
        let usd = Money64::new(500, iso::usd()).unwrap();
        assert_eq!(usd.scale(), 2);
        let jpy = Money64::new(500, iso::jpy()).unwrap();
        assert_eq!(jpy.scale(), 0);
    }

    #[test]
    fn test_invalid_base() {
        let broken = Currency::new("XXX", 1, 2);
        assert!(matches!(
            Money64::new(1, broken),
            Err(MoneyError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_scale_out_of_range() {
        assert!(matches!(
            Money64::with_scale(1, iso::usd(), 19),
            Err(MoneyError::InvalidScale(_))
        ));
        assert!(Money128::with_scale(1, iso::usd(), 30).is_ok());
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_fractional_decimal_amount_rejected() {
        use rust_decimal::Decimal;

        let result = DecimalMoney::new(Decimal::new(105, 1), iso::usd());
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
        assert!(DecimalMoney::new(Decimal::from(105), iso::usd()).is_ok());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let value = Money64::with_scale(-12345, iso::iqd(), 4).unwrap();
        let snapshot = value.to_snapshot();
        assert_eq!(snapshot.amount, -12345);
        assert_eq!(snapshot.scale, 4);
        assert_eq!(Money64::from_snapshot(snapshot).unwrap(), value);
    }

    #[test]
    fn test_structural_equality_includes_scale() {
        let a = Money64::with_scale(100, iso::usd(), 2).unwrap();
        let b = Money64::with_scale(1000, iso::usd(), 3).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_to_number() {
        let value = Money64::new(1050, iso::usd()).unwrap();
        assert!((value.to_number() - 10.5).abs() < 1e-9);
        let ariary = Money64::new(7, iso::mga()).unwrap();
        assert!((ariary.to_number() - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_to_units() {
        let value = Money64::new(1050, iso::usd()).unwrap();
        assert_eq!(value.to_units().unwrap(), (10, 50));
        let yen = Money64::new(1050, iso::jpy()).unwrap();
        assert_eq!(yen.to_units().unwrap(), (1050, 0));
    }
}
