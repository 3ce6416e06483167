//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `f64` on the wire; every computation here goes through
//! `Decimal` and is rounded to 2 decimal places before converting back.

use rust_decimal::prelude::*;

pub use shared::models::product_override::MAX_OVERRIDE_PRICE;

/// Rounding strategy for monetary values (2 decimal places, half-up)
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

/// Line total for one cart entry: unit price × quantity
pub fn line_total(unit_price: f64, quantity: u32) -> Decimal {
    (to_decimal(unit_price) * Decimal::from(quantity))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamp a typed override price into `(0, MAX_OVERRIDE_PRICE]`
///
/// Values above the cap come back as the cap; zero, negative and non-finite
/// values come back as `None` (inline-invalid, never submitted).
pub fn clamp_override_price(value: f64) -> Option<f64> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    Some(value.min(MAX_OVERRIDE_PRICE))
}
