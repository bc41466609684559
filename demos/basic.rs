//! Basic example: pricing an order end to end
//!
//! This example demonstrates:
//! - Creating values at different scales
//! - Adding, applying a percentage and a tax rate
//! - Splitting a total between payers
//! - Converting into another currency

use moneta::*;

fn main() -> Result<(), MoneyError> {
    let config = MoneyConfig::new();
    let mode = config.default_rounding;

    // Line items, one priced at a finer scale
    println!("Line items:");
    let book = Money64::new(2499, iso::usd())?;
    println!("  - Book: {} at scale {}", book.amount(), book.scale());
    let fuel = Money64::with_scale(4_3215, iso::usd(), 4)?;
    println!("  - Fuel surcharge: {} at scale {}", fuel.amount(), fuel.scale());

    let subtotal = book.safe_add(&fuel)?;
    println!("\nSubtotal: {} at scale {}", subtotal.amount(), subtotal.scale());

    // 15% discount, then 7.25% tax
    let discount = subtotal.percentage(15, mode)?;
    let discounted = subtotal.safe_subtract(&discount)?;
    let tax = discounted.multiply(ScaledAmount::new(725, 4), mode)?;
    let total = discounted.safe_add(&tax)?;
    println!("After discount and tax: {}", total.amount());

    // Back to cents with a single rounding step
    let charged = total.transform_scale(iso::usd().exponent, mode)?;
    let (dollars, cents) = charged.to_units()?;
    println!("Charged: {}.{:02} USD", dollars, cents);

    println!("\nSplit 50/30/20:");
    for (i, share) in charged.allocate(&[50, 30, 20])?.iter().enumerate() {
        println!("  payer {}: {}", i + 1, share.amount());
    }

    // 1 USD = 0.9237 EUR
    let euros = charged.convert(iso::eur(), &Rate::scaled(9237, 4), None, mode)?;
    let (major, minor) = euros.to_units()?;
    println!("\nIn euros: {}.{:02} EUR", major, minor);

    println!("\nSnapshot:");
    let snapshot = serde_json::to_string_pretty(&charged.to_snapshot())
        .map_err(|e| MoneyError::InvalidAmount(e.to_string()))?;
    println!("{}", snapshot);

    Ok(())
}
