//! Money arithmetic for report aggregation
//!
//! Sums are accumulated as `Decimal` and converted back to `f64` for the
//! report document. Averages are taken from the converted sum.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `price * quantity` using the captured unit price
#[inline]
pub fn line_amount(price: f64, quantity: u32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// `total / count`, zero for an empty set; not rounded
pub fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
