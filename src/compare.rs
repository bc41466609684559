//! Comparisons and predicates on monetary values.
//!
//! Ordering comparisons require a shared currency and compare across
//! scales by normalizing first, so `$1.00` equals `$1.000`.

use crate::calculator::Calculator;
use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;
use crate::scale::{align, normalize_pair, normalize_scale};
use std::cmp::Ordering;

impl<C: Calculator> Money<C> {
    /// Order two same-currency values.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` when the currency codes differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        let (a, b) = normalize_pair(self, other)?;
        Ok(self.calculator().compare(a.amount(), b.amount()))
    }

    /// Same currency and the same value once scales are normalized.
    ///
    /// Different currencies are unequal rather than an error.
    pub fn equal(&self, other: &Self) -> MoneyResult<bool> {
        if !self.has_same_currency(other) {
            return Ok(false);
        }
        self.has_same_amount(other)
    }

    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn has_same_currency(&self, other: &Self) -> bool {
        self.currency().same_code(other.currency())
    }

    /// Same amount once scales are normalized, ignoring currency.
    ///
    /// # Errors
    ///
    /// `InvalidCurrency` when the two currencies use different bases.
    pub fn has_same_amount(&self, other: &Self) -> MoneyResult<bool> {
        if self.currency().base != other.currency().base {
            return Err(MoneyError::InvalidCurrency(format!(
                "cannot compare amounts in base {} and base {}",
                self.currency().base,
                other.currency().base
            )));
        }
        let (a, b) = align(self, other)?;
        Ok(self.calculator().equal(a.amount(), b.amount()))
    }

    pub fn is_zero(&self) -> bool {
        self.calculator().is_zero(self.amount())
    }

    /// Zero counts as positive.
    pub fn is_positive(&self) -> bool {
        !self.is_negative()
    }

    pub fn is_negative(&self) -> bool {
        self.calculator().is_negative(self.amount())
    }

    /// Whether the value has a fractional part in major units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64};
    ///
    /// assert!(Money64::new(1050, iso::usd()).unwrap().has_sub_units().unwrap());
    /// assert!(!Money64::new(1000, iso::usd()).unwrap().has_sub_units().unwrap());
    /// ```
    pub fn has_sub_units(&self) -> MoneyResult<bool> {
        let calc = self.calculator();
        let factor = calc.radix_power(self.currency().base, self.scale())?;
        Ok(!calc.is_zero(&calc.modulo(self.amount(), &factor)?))
    }
}

/// Whether every value shares the first value's currency code.
pub fn have_same_currency<C: Calculator>(values: &[Money<C>]) -> bool {
    match values.first() {
        Some(first) => values.iter().all(|v| first.has_same_currency(v)),
        None => true,
    }
}

/// Whether every value holds the same amount once scales are normalized.
///
/// Currencies are not checked.
pub fn have_same_amount<C: Calculator>(values: &[Money<C>]) -> MoneyResult<bool> {
    let Some(first) = values.first() else {
        return Ok(true);
    };
    for value in &values[1..] {
        if !first.has_same_amount(value)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn select<C: Calculator>(values: &[Money<C>], keep: Ordering) -> MoneyResult<Money<C>> {
    let normalized = normalize_scale(values)?;
    let mut iter = normalized.into_iter();
    let mut best = iter
        .next()
        .ok_or_else(|| MoneyError::InvalidAmount("empty list of values".to_string()))?;
    for candidate in iter {
        if best.calculator().compare(candidate.amount(), best.amount()) == keep {
            best = candidate;
        }
    }
    Ok(best)
}

/// The lowest of several same-currency values, at their common scale.
///
/// # Examples
///
/// ```rust
/// use moneta::{iso, Money64};
/// use moneta::compare::minimum;
///
/// let values = vec![
///     Money64::new(150, iso::usd()).unwrap(),
///     Money64::with_scale(1490, iso::usd(), 3).unwrap(),
/// ];
/// let lowest = minimum(&values).unwrap();
/// assert_eq!(*lowest.amount(), 1490);
/// assert_eq!(lowest.scale(), 3);
/// ```
pub fn minimum<C: Calculator>(values: &[Money<C>]) -> MoneyResult<Money<C>> {
    select(values, Ordering::Less)
}

/// The highest of several same-currency values, at their common scale.
pub fn maximum<C: Calculator>(values: &[Money<C>]) -> MoneyResult<Money<C>> {
    select(values, Ordering::Greater)
}
