//! # moneta - Exact Monetary Arithmetic
//!
//! A money library that never touches binary floating point:
//! - **Exact** amounts stored as integer sub-units at an explicit scale
//! - **Pluggable** numeric backends (`i64`, `i128`, `BigInt`, `Decimal`)
//! - **Explicit** rounding on every lossy operation
//! - **Immutable** values; every operation returns a new one
//!
//! ## Core Concepts
//!
//! ### Values
//!
//! A `Money` is `{amount, currency, scale}`. `amount` counts sub-units
//! at `scale` digits after the radix point, so `1050` at scale 2 is
//! `10.50` and `10500` at scale 3 is the same value.
//!
//! ```text
//! [Calculator] → [Rounding] → [Money] → [Scale] → [Arithmetic / Allocate / Convert]
//! ```
//!
//! 1. **Calculator** performs every primitive operation on amounts
//! 2. **Rounding** resolves inexact quotients under a `RoundingMode`
//! 3. **Scale** aligns operands before any binary operation
//!
//! ## Example
//!
//! ```rust
//! use moneta::*;
//!
//! let price = Money64::new(1999, iso::usd())?;                 // $19.99
//! let shipping = Money64::with_scale(4995, iso::usd(), 3)?;    // $4.995
//!
//! let total = price.safe_add(&shipping)?;
//! assert_eq!(*total.amount(), 24985);
//! assert_eq!(total.scale(), 3);
//!
//! let charged = total.transform_scale(2, RoundingMode::HalfEven)?;
//! assert_eq!(*charged.amount(), 2498);
//!
//! let shares = charged.allocate(&[1, 1, 1])?;
//! let amounts: Vec<i64> = shares.iter().map(|s| *s.amount()).collect();
//! assert_eq!(amounts, vec![833, 833, 832]);
//! # Ok::<(), MoneyError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Numeric backends
//! - [`rounding`] - Rounding modes
//! - [`currency`] - Currency metadata
//! - [`money`] - The value object and its factory
//! - [`scale`] - Scale normalization
//! - [`arithmetic`] - Add, subtract, multiply, divide, percentage
//! - [`compare`] - Comparisons and predicates
//! - [`allocate`] - Largest-remainder allocation
//! - [`convert`] - Currency conversion
//! - [`config`] - Caller-supplied defaults
//! - [`error`] - Error types

pub mod allocate;
pub mod arithmetic;
pub mod calculator;
pub mod compare;
pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod money;
pub mod rounding;
pub mod scale;

// Re-export main types for convenience
pub use arithmetic::ScaledAmount;
pub use config::MoneyConfig;
pub use convert::Rate;
pub use currency::{iso, Currency, CurrencyCode};
pub use error::{MoneyError, MoneyResult};
pub use money::{Money, Money128, Money64, MoneyOptions, MoneySnapshot};
pub use rounding::RoundingMode;

// Re-export calculators
#[cfg(feature = "bigint")]
pub use calculator::BigIntCalculator;
#[cfg(feature = "decimal")]
pub use calculator::DecimalCalculator;
pub use calculator::{Calculator, I128Calculator, I64Calculator};

#[cfg(feature = "bigint")]
pub use money::BigMoney;
#[cfg(feature = "decimal")]
pub use money::DecimalMoney;
