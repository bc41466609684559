//! Currency metadata module.
//!
//! Provides the `CurrencyCode` type, an interned string identifier, and
//! the `Currency` record the engine reads its radix and natural scale from.
//! The engine treats the code as opaque; only `base` and `exponent` take
//! part in arithmetic.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned currency identifier such as `"USD"`.
///
/// Uses `Arc<str>` so that copies of a currency share one allocation.
///
/// # Examples
///
/// ```rust
/// use moneta::CurrencyCode;
///
/// let usd = CurrencyCode::from_str("USD");
/// let usd2: CurrencyCode = "USD".into();
/// let usd3: CurrencyCode = String::from("USD").into();
///
/// assert_eq!(usd, usd2);
/// assert_eq!(usd, usd3);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CurrencyCode(Arc<str>);

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CurrencyCode::from(s))
    }
}

impl CurrencyCode {
    /// Create a new `CurrencyCode` from a string slice.
    pub fn from_str(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Currency metadata supplied by the caller.
///
/// `base` is the radix of the currency's sub-units (10 for nearly every
/// currency, 5 for MGA) and `exponent` is the number of sub-unit digits
/// at the currency's natural scale.
///
/// # Examples
///
/// ```rust
/// use moneta::Currency;
///
/// let usd = Currency::new("USD", 10, 2);
/// assert_eq!(usd.code.as_str(), "USD");
/// assert_eq!(usd.exponent, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// Identifier, compared to decide whether two values may be combined.
    pub code: CurrencyCode,
    /// Radix of the sub-unit system.
    pub base: u32,
    /// Digits after the radix point at the natural scale.
    pub exponent: u32,
}

impl Currency {
    /// Create a currency from its code, radix and exponent.
    ///
    /// The radix is validated when a monetary value is built from it.
    pub fn new(code: impl Into<CurrencyCode>, base: u32, exponent: u32) -> Self {
        Self {
            code: code.into(),
            base,
            exponent,
        }
    }

    /// Whether two currencies share the same code.
    pub fn same_code(&self, other: &Currency) -> bool {
        self.code == other.code
    }
}

/// A few ISO 4217 currencies for convenience.
///
/// Full metadata tables are expected to come from the caller.
pub mod iso {
    use super::Currency;

    /// United States dollar.
    pub fn usd() -> Currency {
        Currency::new("USD", 10, 2)
    }

    /// Euro.
    pub fn eur() -> Currency {
        Currency::new("EUR", 10, 2)
    }

    /// Japanese yen.
    pub fn jpy() -> Currency {
        Currency::new("JPY", 10, 0)
    }

    /// Iraqi dinar.
    pub fn iqd() -> Currency {
        Currency::new("IQD", 10, 3)
    }

    /// Malagasy ariary (five iraimbilanja to the ariary).
    pub fn mga() -> Currency {
        Currency::new("MGA", 5, 1)
    }
}
