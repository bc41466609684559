//! Scale normalization.
//!
//! Binary operations first bring both operands to the higher of their
//! scales. Raising a scale multiplies by a positive power of the currency
//! base, which never loses precision; lowering a scale goes through a
//! rounding mode.

use crate::calculator::Calculator;
use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;
use crate::rounding::{round_scale, RoundingMode};

/// Fail with `CurrencyMismatch` unless both values share a currency code.
pub(crate) fn ensure_same_currency<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<()> {
    if a.currency().same_code(b.currency()) {
        return Ok(());
    }
    tracing::debug!(
        left = %a.currency().code,
        right = %b.currency().code,
        "rejected operation across currencies"
    );
    Err(MoneyError::CurrencyMismatch {
        left: a.currency().code.clone(),
        right: b.currency().code.clone(),
    })
}

/// Re-express `value` at a scale at or above its own.
fn upscale<C: Calculator>(value: &Money<C>, target: u32) -> MoneyResult<Money<C>> {
    if target == value.scale() {
        return Ok(value.clone());
    }
    let calc = value.calculator();
    let base = value.currency().base;
    if calc.radix_power(base, target).is_err() {
        return Err(MoneyError::InvalidScale(format!(
            "{base}^{target} does not fit the amount representation"
        )));
    }
    let factor = calc.radix_power(base, target - value.scale())?;
    let amount = calc.multiply(value.amount(), &factor)?;
    Ok(Money::from_parts(amount, value.currency().clone(), target))
}

/// Bring two values to their common scale without checking currencies.
pub(crate) fn align<C: Calculator>(
    a: &Money<C>,
    b: &Money<C>,
) -> MoneyResult<(Money<C>, Money<C>)> {
    let target = a.scale().max(b.scale());
    Ok((upscale(a, target)?, upscale(b, target)?))
}

/// Bring two same-currency values to their common (highest) scale.
///
/// The result is the same whichever operand comes first.
///
/// # Examples
///
/// ```rust
/// use moneta::{iso, Money64};
/// use moneta::scale::normalize_pair;
///
/// let a = Money64::with_scale(100, iso::usd(), 2).unwrap();   // $1.00
/// let b = Money64::with_scale(1000, iso::usd(), 3).unwrap();  // $1.000
///
/// let (a, b) = normalize_pair(&a, &b).unwrap();
/// assert_eq!(a.scale(), 3);
/// assert_eq!(a, b);
/// ```
pub fn normalize_pair<C: Calculator>(
    a: &Money<C>,
    b: &Money<C>,
) -> MoneyResult<(Money<C>, Money<C>)> {
    ensure_same_currency(a, b)?;
    align(a, b)
}

/// Bring every value of one currency to the highest scale among them.
///
/// An empty slice yields an empty vector.
pub fn normalize_scale<C: Calculator>(values: &[Money<C>]) -> MoneyResult<Vec<Money<C>>> {
    let Some(first) = values.first() else {
        return Ok(Vec::new());
    };
    for value in &values[1..] {
        ensure_same_currency(first, value)?;
    }
    let target = values.iter().map(Money::scale).max().unwrap_or(0);
    values.iter().map(|v| upscale(v, target)).collect()
}

impl<C: Calculator> Money<C> {
    /// Re-express this value at `new_scale`.
    ///
    /// Raising the scale is exact. Lowering it rounds with `mode`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64, RoundingMode};
    ///
    /// let value = Money64::with_scale(10555, iso::usd(), 3).unwrap(); // $10.555
    /// let cents = value.transform_scale(2, RoundingMode::HalfEven).unwrap();
    /// assert_eq!(*cents.amount(), 1056);
    /// ```
    pub fn transform_scale(&self, new_scale: u32, mode: RoundingMode) -> MoneyResult<Self> {
        if new_scale >= self.scale() {
            return upscale(self, new_scale);
        }
        let amount = round_scale(
            self.calculator(),
            self.amount(),
            self.currency().base,
            self.scale() - new_scale,
            mode,
        )?;
        Ok(Money::from_parts(amount, self.currency().clone(), new_scale))
    }

    /// Drop trailing zero digits, never going below the currency exponent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64};
    ///
    /// let value = Money64::with_scale(1_050_000, iso::usd(), 5).unwrap(); // $10.50000
    /// let trimmed = value.trim_scale().unwrap();
    /// assert_eq!(trimmed.scale(), 2);
    /// assert_eq!(*trimmed.amount(), 1050);
    /// ```
    pub fn trim_scale(&self) -> MoneyResult<Self> {
        let calc = self.calculator();
        let floor = self.currency().exponent;
        if self.scale() <= floor {
            return Ok(self.clone());
        }

        let base = calc.from_i64(i64::from(self.currency().base));
        let mut amount = self.amount().clone();
        let mut scale = self.scale();
        while scale > floor {
            if !calc.is_zero(&calc.modulo(&amount, &base)?) {
                break;
            }
            amount = calc.integer_divide(&amount, &base)?;
            scale -= 1;
        }
        Ok(Money::from_parts(amount, self.currency().clone(), scale))
    }
}
