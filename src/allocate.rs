//! Proportional allocation.
//!
//! Splits an amount by integer ratios with the largest remainder method:
//! every share is first floored, then the sub-units left over go one at a
//! time to the shares with the largest discarded fraction. Ties go to the
//! earliest ratio. The shares always sum to the original amount.

use crate::arithmetic::ScaledAmount;
use crate::calculator::Calculator;
use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;

/// Split a non-negative `total` by `ratios`.
fn distribute<C: Calculator>(
    calc: &C,
    total: &C::Amount,
    ratios: &[C::Amount],
) -> MoneyResult<Vec<C::Amount>> {
    if ratios.is_empty() {
        return Err(MoneyError::InvalidRatios("no ratios given".to_string()));
    }
    if let Some(negative) = ratios.iter().find(|r| calc.is_negative(r)) {
        return Err(MoneyError::InvalidRatios(format!(
            "ratio {negative} is negative"
        )));
    }

    let mut sum = calc.zero();
    for ratio in ratios {
        sum = calc.add(&sum, ratio)?;
    }
    if calc.is_zero(&sum) {
        return Err(MoneyError::InvalidRatios("all ratios are zero".to_string()));
    }

    let mut shares = Vec::with_capacity(ratios.len());
    let mut fractions = Vec::with_capacity(ratios.len());
    let mut leftover = total.clone();
    for ratio in ratios {
        let product = calc.multiply(total, ratio)?;
        let share = calc.integer_divide(&product, &sum)?;
        leftover = calc.subtract(&leftover, &share)?;
        fractions.push(calc.modulo(&product, &sum)?);
        shares.push(share);
    }

    // Stable sort keeps the earliest ratio first among equal fractions.
    let mut order: Vec<usize> = (0..ratios.len())
        .filter(|&i| !calc.is_zero(&ratios[i]))
        .collect();
    order.sort_by(|&a, &b| calc.compare(&fractions[b], &fractions[a]));

    for index in order {
        if calc.is_zero(&leftover) {
            break;
        }
        shares[index] = calc.increment(&shares[index])?;
        leftover = calc.decrement(&leftover)?;
    }

    tracing::trace!(parts = shares.len(), "allocated by largest remainder");
    Ok(shares)
}

impl<C: Calculator> Money<C> {
    /// Split this value by non-negative integer ratios.
    ///
    /// The parts share this value's currency and scale and sum to it
    /// exactly. Zero ratios always receive zero. Negative values are split
    /// by magnitude, so every part carries the value's sign.
    ///
    /// # Errors
    ///
    /// `InvalidRatios` for an empty list, a negative ratio, or all zeros.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64};
    ///
    /// let bill = Money64::new(100, iso::usd()).unwrap(); // $1.00
    /// let parts = bill.allocate(&[1, 1, 1]).unwrap();
    /// let amounts: Vec<i64> = parts.iter().map(|p| *p.amount()).collect();
    /// assert_eq!(amounts, vec![34, 33, 33]);
    /// ```
    pub fn allocate(&self, ratios: &[C::Amount]) -> MoneyResult<Vec<Self>> {
        let calc = self.calculator();
        let negative = calc.is_negative(self.amount());
        let magnitude = calc.absolute(self.amount())?;

        distribute(calc, &magnitude, ratios)?
            .into_iter()
            .map(|share| -> MoneyResult<Self> {
                let share = if negative { calc.negate(&share)? } else { share };
                Ok(self.with_amount(share))
            })
            .collect()
    }

    /// Split this value by fractional ratios such as `50.5 : 49.5`.
    ///
    /// Ratios are brought to their common scale first, which leaves their
    /// proportions unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moneta::{iso, Money64, ScaledAmount};
    ///
    /// let bill = Money64::new(1000, iso::usd()).unwrap();
    /// let parts = bill
    ///     .allocate_scaled(&[ScaledAmount::new(505, 1), ScaledAmount::new(495, 1)])
    ///     .unwrap();
    /// assert_eq!(*parts[0].amount(), 505);
    /// assert_eq!(*parts[1].amount(), 495);
    /// ```
    pub fn allocate_scaled(&self, ratios: &[ScaledAmount<C::Amount>]) -> MoneyResult<Vec<Self>> {
        let calc = self.calculator();
        let base = self.currency().base;
        let highest = ratios.iter().map(|r| r.scale).max().unwrap_or(0);
        let normalized = ratios
            .iter()
            .map(|r| -> MoneyResult<C::Amount> {
                let factor = calc.radix_power(base, highest - r.scale)?;
                calc.multiply(&r.amount, &factor)
            })
            .collect::<MoneyResult<Vec<_>>>()?;
        self.allocate(&normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::iso;
    use crate::money::Money64;

    fn amounts(parts: &[Money64]) -> Vec<i64> {
        parts.iter().map(|p| *p.amount()).collect()
    }

    fn usd(amount: i64) -> Money64 {
        Money64::new(amount, iso::usd()).unwrap()
    }

    #[test]
    fn test_even_thirds() {
        let parts = usd(100).allocate(&[1, 1, 1]).unwrap();
        assert_eq!(amounts(&parts), vec![34, 33, 33]);
    }

    #[test]
    fn test_largest_remainder_wins() {
        // 100 * [1, 2, 4] / 7 = 14.28, 28.57, 57.14
        let parts = usd(100).allocate(&[1, 2, 4]).unwrap();
        assert_eq!(amounts(&parts), vec![14, 29, 57]);
    }

    #[test]
    fn test_zero_ratio_gets_nothing() {
        // 334.33 and 668.67: the leftover unit goes to the larger fraction
        let parts = usd(1003).allocate(&[0, 1, 0, 2]).unwrap();
        assert_eq!(amounts(&parts), vec![0, 334, 0, 669]);
    }

    #[test]
    fn test_negative_amount() {
        let parts = usd(-100).allocate(&[1, 1, 1]).unwrap();
        assert_eq!(amounts(&parts), vec![-34, -33, -33]);
    }

    #[test]
    fn test_parts_keep_currency_and_scale() {
        let value = Money64::with_scale(1001, iso::eur(), 3).unwrap();
        let parts = value.allocate(&[70, 30]).unwrap();
        assert!(parts.iter().all(|p| p.scale() == 3 && p.currency() == &iso::eur()));
        assert_eq!(amounts(&parts), vec![701, 300]);
    }

    #[test]
    fn test_invalid_ratios() {
        assert!(matches!(usd(100).allocate(&[]), Err(MoneyError::InvalidRatios(_))));
        assert!(matches!(
            usd(100).allocate(&[0, 0]),
            Err(MoneyError::InvalidRatios(_))
        ));
        assert!(matches!(
            usd(100).allocate(&[2, -1]),
            Err(MoneyError::InvalidRatios(_))
        ));
    }

    #[test]
    fn test_scaled_ratios_mixed_scales() {
        // 25 and 7.5 become 250 : 75
        let parts = usd(1300)
            .allocate_scaled(&[ScaledAmount::new(25, 0), ScaledAmount::new(75, 1)])
            .unwrap();
        assert_eq!(amounts(&parts), vec![1000, 300]);
    }
}
