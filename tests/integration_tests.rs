//! End-to-end tests across modules and backends.
//!
//! These tests verify:
//! - Chained arithmetic across scales
//! - Cross-currency guards and their unchecked counterparts
//! - Snapshot interchange through JSON
//! - Identical results from every numeric backend

use moneta::compare::{maximum, minimum};
use moneta::scale::normalize_scale;
use moneta::*;

fn usd(amount: i64) -> Money64 {
    Money64::new(amount, iso::usd()).unwrap()
}

// ============================================================================
// Arithmetic pipelines
// ============================================================================

/// An invoice: line items, a discount, tax, then a split between payers.
#[test]
fn test_invoice_pipeline() {
    let items = [usd(1999), usd(550), usd(12_000)];
    let mut subtotal = usd(0);
    for item in &items {
        subtotal = subtotal.safe_add(item).unwrap();
    }
    assert_eq!(*subtotal.amount(), 14_549);

    // 10% off
    let discount = subtotal.percentage(10, RoundingMode::HalfEven).unwrap();
    assert_eq!(*discount.amount(), 1455); // 1454.9
    let discounted = subtotal.safe_subtract(&discount).unwrap();
    assert_eq!(*discounted.amount(), 13_094);

    // 8.875% tax
    let tax = discounted
        .multiply(ScaledAmount::new(8875, 5), RoundingMode::HalfUp)
        .unwrap();
    assert_eq!(*tax.amount(), 1162); // 1162.09
    let total = discounted.safe_add(&tax).unwrap();
    assert_eq!(*total.amount(), 14_256);

    let shares = total.allocate(&[50, 30, 20]).unwrap();
    let amounts: Vec<i64> = shares.iter().map(|s| *s.amount()).collect();
    assert_eq!(amounts, vec![7128, 4277, 2851]);
    assert_eq!(amounts.iter().sum::<i64>(), *total.amount());
}

/// Keeping extra precision through a computation and rounding once.
#[test]
fn test_exact_intermediate_then_single_rounding() {
    let unit_price = Money64::with_scale(33_333, iso::usd(), 4).unwrap(); // $3.3333
    let line = unit_price.multiply_exact(3_i64).unwrap();
    assert_eq!(*line.amount(), 99_999);
    assert_eq!(line.scale(), 4);

    let charged = line.transform_scale(2, RoundingMode::HalfEven).unwrap();
    assert_eq!(charged, usd(1000));
    let trimmed = charged.trim_scale().unwrap();
    assert_eq!(trimmed, usd(1000));
}

#[test]
fn test_additive_identity_across_scales() {
    let value = Money64::with_scale(123_456, iso::iqd(), 5).unwrap();
    let zero = Money64::with_scale(0, iso::iqd(), 5).unwrap();
    assert_eq!(value.safe_add(&zero).unwrap(), value);
}

#[test]
fn test_commutativity_across_scales() {
    let a = Money64::with_scale(1050, iso::usd(), 2).unwrap();
    let b = Money64::with_scale(3, iso::usd(), 4).unwrap();
    assert_eq!(a.safe_add(&b).unwrap(), b.safe_add(&a).unwrap());
}

// ============================================================================
// Currency guards
// ============================================================================

#[test]
fn test_cross_currency_guard() {
    let dollars = usd(100);
    let euros = Money64::new(100, iso::eur()).unwrap();

    let err = dollars.safe_add(&euros).unwrap_err();
    assert_eq!(
        err,
        MoneyError::CurrencyMismatch {
            left: CurrencyCode::from_str("USD"),
            right: CurrencyCode::from_str("EUR"),
        }
    );

    // The unchecked path still produces a defined number.
    let unchecked = dollars.unsafe_add(&euros).unwrap();
    assert_eq!(*unchecked.amount(), 200);
}

#[test]
fn test_list_operations_require_one_currency() {
    let values = vec![usd(100), Money64::new(100, iso::eur()).unwrap()];
    assert!(normalize_scale(&values).is_err());
    assert!(minimum(&values).is_err());
    assert!(maximum(&values).is_err());
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_round_trip_conversion_loses_at_most_one_unit() {
    let dollars = usd(100_000); // $1000.00
    let euros = dollars
        .convert(iso::eur(), &Rate::scaled(9237, 4), None, RoundingMode::HalfEven)
        .unwrap();
    assert_eq!(*euros.amount(), 92_370);

    let back = euros
        .convert(iso::usd(), &Rate::ratio(10_000, 9237), None, RoundingMode::HalfEven)
        .unwrap();
    let diff = back.safe_subtract(&dollars).unwrap();
    assert!(diff.amount().abs() <= 1);
}

// ============================================================================
// Snapshots and configuration
// ============================================================================

#[test]
fn test_snapshot_json_round_trip() {
    let value = Money64::with_scale(-98_765, iso::mga(), 3).unwrap();
    let json = serde_json::to_string(&value.to_snapshot()).unwrap();
    assert_eq!(
        json,
        r#"{"amount":-98765,"currency":{"code":"MGA","base":5,"exponent":1},"scale":3}"#
    );
    let snapshot: MoneySnapshot<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(Money64::from_snapshot(snapshot).unwrap(), value);
}

#[test]
fn test_config_drives_defaults() {
    let config = MoneyConfig::from_json_str(
        r#"{"default_currency": {"code": "JPY", "base": 10, "exponent": 0},
            "default_amount": 500,
            "default_rounding": "floor"}"#,
    )
    .unwrap();

    let value = Money64::from_config(&config).unwrap();
    assert_eq!(*value.amount(), 500);
    assert_eq!(value.scale(), 0);

    let third = value.divide(3_i64, config.default_rounding).unwrap();
    assert_eq!(*third.amount(), 166);
}

// ============================================================================
// Backends
// ============================================================================

#[test]
fn test_i128_handles_values_beyond_i64() {
    let huge = Money128::new(i128::from(i64::MAX) * 10, iso::usd()).unwrap();
    let doubled = huge.safe_add(&huge).unwrap();
    assert_eq!(*doubled.amount(), i128::from(i64::MAX) * 20);
}

#[test]
fn test_i64_overflow_surfaces_as_error() {
    let huge = usd(i64::MAX);
    assert!(matches!(
        huge.multiply(2_i64, RoundingMode::HalfEven),
        Err(MoneyError::Overflow(_))
    ));
}

#[cfg(feature = "bigint")]
#[test]
fn test_bigint_backend_matches_i64() {
    use num_bigint::BigInt;

    let small = usd(100).allocate(&[1, 1, 1]).unwrap();
    let big = BigMoney::new(BigInt::from(100), iso::usd())
        .unwrap()
        .allocate(&[BigInt::from(1), BigInt::from(1), BigInt::from(1)])
        .unwrap();
    for (s, b) in small.iter().zip(&big) {
        assert_eq!(BigInt::from(*s.amount()), *b.amount());
    }
}

#[cfg(feature = "bigint")]
#[test]
fn test_bigint_high_scale_normalization() {
    use num_bigint::BigInt;

    let coarse = BigMoney::new(BigInt::from(1), iso::usd()).unwrap();
    let fine = BigMoney::with_scale(BigInt::from(1), iso::usd(), 40).unwrap();
    let sum = coarse.safe_add(&fine).unwrap();
    assert_eq!(sum.scale(), 40);
    let expected = BigInt::from(10).pow(38) + BigInt::from(1);
    assert_eq!(*sum.amount(), expected);
}

#[cfg(feature = "decimal")]
#[test]
fn test_decimal_backend_rounding() {
    use rust_decimal::Decimal;

    let value = DecimalMoney::with_scale(Decimal::from(25), iso::usd(), 3).unwrap();
    let rounded = value.transform_scale(2, RoundingMode::HalfEven).unwrap();
    assert_eq!(*rounded.amount(), Decimal::from(2));

    let value = DecimalMoney::with_scale(Decimal::from(35), iso::usd(), 3).unwrap();
    let rounded = value.transform_scale(2, RoundingMode::HalfEven).unwrap();
    assert_eq!(*rounded.amount(), Decimal::from(4));
}
