//! Error types for monetary operations.
//!
//! All errors that can occur while constructing or combining monetary
//! values are represented by the `MoneyError` enum.

use crate::currency::CurrencyCode;
use thiserror::Error;

/// Errors that can occur during monetary arithmetic.
///
/// # Examples
///
/// ```rust
/// use moneta::{CurrencyCode, MoneyError};
///
/// let err = MoneyError::CurrencyMismatch {
///     left: CurrencyCode::from_str("USD"),
///     right: CurrencyCode::from_str("EUR"),
/// };
/// assert_eq!(err.to_string(), "Currency mismatch: USD vs EUR");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoneyError {
    /// A binary operation was attempted across two different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        left: CurrencyCode,
        right: CurrencyCode,
    },

    /// Integer division or modulo with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Allocation ratios were empty, all zero, or contained a negative entry.
    #[error("Invalid ratios: {0}")]
    InvalidRatios(String),

    /// A percentage outside `0..=100`.
    #[error("Invalid percentage: {0} (expected a value between 0 and 100)")]
    InvalidPercentage(String),

    /// A scale the backend cannot express.
    ///
    /// Fixed-width backends reject scales for which `base^scale` overflows.
    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    /// A fractional amount, or an empty input where an amount was required.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A currency whose radix is below 2.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// An exchange rate with a negative denominator.
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    /// A configuration document that could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A fixed-width backend could not hold the result.
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),
}

/// Result type alias for monetary operations.
pub type MoneyResult<T> = Result<T, MoneyError>;
