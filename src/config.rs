//! Caller-supplied defaults.
//!
//! `MoneyConfig` replaces process-wide global settings. The engine never
//! reads it implicitly; callers pass it where they want defaults applied.
//! The locale is not interpreted here; it's carried for the host's
//! formatting facility.

use crate::currency::{iso, Currency};
use crate::error::{MoneyError, MoneyResult};
use crate::rounding::RoundingMode;
use serde::{Deserialize, Serialize};

/// Defaults for constructing and rounding monetary values.
///
/// # Examples
///
/// ```rust
/// use moneta::{MoneyConfig, RoundingMode};
///
/// let config = MoneyConfig::from_json_str(
///     r#"{"default_currency": {"code": "EUR", "base": 10, "exponent": 2},
///         "default_rounding": "half_up"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.default_currency.code.as_str(), "EUR");
/// assert_eq!(config.default_rounding, RoundingMode::HalfUp);
/// assert_eq!(config.default_amount, 0);
/// assert_eq!(config.locale, "en-US");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyConfig {
    /// Currency used by `Money::from_config`.
    pub default_currency: Currency,
    /// Amount, in sub-units, used by `Money::from_config`.
    pub default_amount: i64,
    /// Rounding applied when a caller has no call-site specific policy.
    pub default_rounding: RoundingMode,
    /// BCP 47 tag handed to the host's formatter.
    pub locale: String,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: iso::usd(),
            default_amount: 0,
            default_rounding: RoundingMode::HalfEven,
            locale: String::from("en-US"),
        }
    }
}

impl MoneyConfig {
    /// Create the documented defaults: USD, zero, half-even, `en-US`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the JSON is malformed, `InvalidCurrency` if the
    /// default currency has a base below 2.
    pub fn from_json_str(json: &str) -> MoneyResult<Self> {
        let config: MoneyConfig = serde_json::from_str(json)
            .map_err(|e| MoneyError::InvalidConfig(e.to_string()))?;
        if config.default_currency.base < 2 {
            return Err(MoneyError::InvalidCurrency(format!(
                "{} has base {}",
                config.default_currency.code, config.default_currency.base
            )));
        }
        Ok(config)
    }

    /// Replace the default currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Replace the default rounding policy.
    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.default_rounding = mode;
        self
    }

    /// Replace the locale tag.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MoneyConfig::new();
        assert_eq!(config.default_currency, iso::usd());
        assert_eq!(config.default_amount, 0);
        assert_eq!(config.default_rounding, RoundingMode::HalfEven);
    }

    #[test]
    fn test_builder() {
        let config = MoneyConfig::new()
            .with_currency(iso::jpy())
            .with_rounding(RoundingMode::Floor)
            .with_locale("ja-JP");
        assert_eq!(config.default_currency, iso::jpy());
        assert_eq!(config.default_rounding, RoundingMode::Floor);
        assert_eq!(config.locale, "ja-JP");
    }

    #[test]
    fn test_json_rejects_bad_base() {
        let result = MoneyConfig::from_json_str(
            r#"{"default_currency": {"code": "XXX", "base": 0, "exponent": 2}}"#,
        );
        assert!(matches!(result, Err(MoneyError::InvalidCurrency(_))));
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(matches!(
            MoneyConfig::from_json_str("not json"),
            Err(MoneyError::InvalidConfig(_))
        ));
    }
}
