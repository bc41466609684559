//! Rounding strategies.
//!
//! Rounding is expressed as division of one integer amount by another,
//! so every strategy works on exact rationals and only through
//! `Calculator` primitives. Dropping digits of scale is the special case
//! where the divisor is a power of the currency base.

use crate::calculator::Calculator;
use crate::error::{MoneyError, MoneyResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Policy for resolving the discarded part of an inexact quotient.
///
/// Half modes only differ on exact ties; below half they keep the
/// truncated quotient and above half they move away from zero.
///
/// # Examples
///
/// ```rust
/// use moneta::calculator::I64Calculator;
/// use moneta::rounding::{round_scale, RoundingMode};
///
/// let calc = I64Calculator;
/// // 2.5 -> 2 and 3.5 -> 4 under banker's rounding
/// assert_eq!(round_scale(&calc, &25, 10, 1, RoundingMode::HalfEven).unwrap(), 2);
/// assert_eq!(round_scale(&calc, &35, 10, 1, RoundingMode::HalfEven).unwrap(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the neighbour with an even last digit (banker's rounding).
    #[default]
    HalfEven,
    /// Ties go to the neighbour with an odd last digit.
    HalfOdd,
    /// Ties go toward positive infinity.
    HalfUp,
    /// Ties go toward negative infinity.
    HalfDown,
    /// Ties go away from zero.
    HalfAwayFromZero,
    /// Ties go toward zero.
    HalfTowardZero,
    /// Always toward zero.
    Truncate,
    /// Always toward positive infinity.
    Ceiling,
    /// Always toward negative infinity.
    Floor,
}

impl RoundingMode {
    /// Whether this mode inspects the discarded fraction against one half.
    pub fn is_half_mode(self) -> bool {
        !matches!(
            self,
            RoundingMode::Truncate | RoundingMode::Ceiling | RoundingMode::Floor
        )
    }
}

/// Round the exact rational `numerator / denominator` to an integer.
///
/// Fails with `DivisionByZero` when `denominator` is zero. Exact
/// quotients are returned unchanged under every mode.
pub fn round_div<C: Calculator>(
    calc: &C,
    numerator: &C::Amount,
    denominator: &C::Amount,
    mode: RoundingMode,
) -> MoneyResult<C::Amount> {
    if calc.is_zero(denominator) {
        return Err(MoneyError::DivisionByZero);
    }

    let quotient = calc.integer_divide(numerator, denominator)?;
    let remainder = calc.modulo(numerator, denominator)?;
    if calc.is_zero(&remainder) {
        return Ok(quotient);
    }

    let negative = calc.is_negative(numerator) != calc.is_negative(denominator);
    let away = if negative {
        calc.decrement(&quotient)?
    } else {
        calc.increment(&quotient)?
    };

    let rounded = match mode {
        RoundingMode::Truncate => quotient,
        RoundingMode::Ceiling => {
            if negative {
                quotient
            } else {
                away
            }
        }
        RoundingMode::Floor => {
            if negative {
                away
            } else {
                quotient
            }
        }
        _ => {
            let twice = calc.multiply(&calc.absolute(&remainder)?, &calc.from_i64(2))?;
            match calc.compare(&twice, &calc.absolute(denominator)?) {
                Ordering::Less => quotient,
                Ordering::Greater => away,
                Ordering::Equal => resolve_tie(calc, quotient, away, negative, mode)?,
            }
        }
    };

    tracing::trace!(
        ?mode,
        numerator = %numerator,
        denominator = %denominator,
        result = %rounded,
        "rounded inexact quotient"
    );
    Ok(rounded)
}

/// Pick between the truncated quotient and its away-from-zero neighbour
/// when the discarded fraction is exactly one half.
fn resolve_tie<C: Calculator>(
    calc: &C,
    toward_zero: C::Amount,
    away: C::Amount,
    negative: bool,
    mode: RoundingMode,
) -> MoneyResult<C::Amount> {
    let keep = match mode {
        RoundingMode::HalfEven => calc.is_even(&toward_zero)?,
        RoundingMode::HalfOdd => !calc.is_even(&toward_zero)?,
        RoundingMode::HalfUp => negative,
        RoundingMode::HalfDown => !negative,
        RoundingMode::HalfTowardZero => true,
        RoundingMode::HalfAwayFromZero
        | RoundingMode::Truncate
        | RoundingMode::Ceiling
        | RoundingMode::Floor => false,
    };
    Ok(if keep { toward_zero } else { away })
}

/// Drop `digits` digits of scale from `amount` expressed in `base`.
///
/// `digits == 0` returns the amount unchanged.
pub fn round_scale<C: Calculator>(
    calc: &C,
    amount: &C::Amount,
    base: u32,
    digits: u32,
    mode: RoundingMode,
) -> MoneyResult<C::Amount> {
    if digits == 0 {
        return Ok(amount.clone());
    }
    let factor = calc.radix_power(base, digits)?;
    round_div(calc, amount, &factor, mode)
}
