//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O.
//! Called on every keystroke of the pricing fields, so everything here is O(1).

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::parse::leading_float;

/// Base price used when the field is blank or not a number.
pub const DEFAULT_BASE_PRICE: f64 = 0.0;

/// Profit margin used when the field is blank or not a number.
///
/// This is a marketing default, not a neutral value: a blank margin prices
/// the product at +65%.
pub const DEFAULT_PROFIT_MARGIN_PERCENTAGE: f64 = 65.0;

/// Display discount used when the field is blank or not a number.
pub const DEFAULT_DISCOUNT_PERCENTAGE: f64 = 81.0;

/// Round a money amount for display, ties going to the even digit.
///
/// Only display values pass through here; the engine itself and the catalog
/// payload keep the unrounded `f64`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use catalog_admin::pricing::round_money;
///
/// // 100 cost at +65% with an 81% display discount
/// assert_eq!(round_money(dec!(868.421052631), 2), dec!(868.42));
/// assert_eq!(round_money(dec!(0.125), 2), dec!(0.12));
/// assert_eq!(round_money(dec!(0.135), 2), dec!(0.14));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Convert an engine value to a 2-place display amount.
///
/// Values that cannot be represented as a decimal display as zero.
pub fn display_amount(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .map(|d| round_money(d, 2))
        .unwrap_or(Decimal::ZERO)
}

/// Pricing inputs after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub base_price: f64,
    pub profit_margin_percentage: f64,
    pub discount_percentage: f64,
}

impl PricingInput {
    /// Coerce raw field text, substituting the per-field default for blank or
    /// non-numeric input. An explicit `0` is kept as zero.
    pub fn from_fields(base_price: &str, profit_margin: &str, discount: &str) -> Self {
        Self {
            base_price: leading_float(base_price).unwrap_or(DEFAULT_BASE_PRICE),
            profit_margin_percentage: leading_float(profit_margin)
                .unwrap_or(DEFAULT_PROFIT_MARGIN_PERCENTAGE),
            discount_percentage: leading_float(discount).unwrap_or(DEFAULT_DISCOUNT_PERCENTAGE),
        }
    }
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            profit_margin_percentage: DEFAULT_PROFIT_MARGIN_PERCENTAGE,
            discount_percentage: DEFAULT_DISCOUNT_PERCENTAGE,
        }
    }
}

/// Derived prices, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOutput {
    /// What the customer pays (legacy `offerPrice`).
    pub selling_price: f64,
    /// Crossed-out price shown next to the selling price (legacy `price`).
    pub display_original_price: f64,
}

impl PricingOutput {
    pub const ZERO: PricingOutput = PricingOutput {
        selling_price: 0.0,
        display_original_price: 0.0,
    };
}

/// Rejections from the pricing engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PricingError {
    /// A display discount of 100% or more has no finite original price.
    #[error("Discount percentage must be below 100 (got {0})")]
    DiscountOutOfRange(f64),
}

/// Compute selling price and display original price from coerced inputs.
///
/// * `base_price <= 0` yields [`PricingOutput::ZERO`] without dividing.
/// * `selling_price = base + base * margin / 100`
/// * `display_original_price = selling_price / (1 - discount / 100)`
///
/// A discount of 100 or more is rejected rather than producing an infinite
/// or negative original price.
pub fn calculate_pricing(input: PricingInput) -> Result<PricingOutput, PricingError> {
    let PricingInput {
        base_price,
        profit_margin_percentage,
        discount_percentage,
    } = input;

    if base_price <= 0.0 {
        return Ok(PricingOutput::ZERO);
    }

    if discount_percentage >= 100.0 {
        return Err(PricingError::DiscountOutOfRange(discount_percentage));
    }

    let selling_price = base_price + base_price * (profit_margin_percentage / 100.0);
    let display_original_price = selling_price / (1.0 - discount_percentage / 100.0);

    Ok(PricingOutput {
        selling_price,
        display_original_price,
    })
}

/// Compute pricing straight from raw field text.
///
/// # Examples
/// ```
/// use catalog_admin::pricing::compute_pricing;
///
/// let out = compute_pricing("100", "", "").unwrap();
/// assert_eq!(out.selling_price, 165.0);
/// ```
pub fn compute_pricing(
    base_price: &str,
    profit_margin_percentage: &str,
    discount_percentage: &str,
) -> Result<PricingOutput, PricingError> {
    calculate_pricing(PricingInput::from_fields(
        base_price,
        profit_margin_percentage,
        discount_percentage,
    ))
}

/// Percentage of `original` saved by paying `selling`, rounded to a whole number.
///
/// Returns 0 when there is no original price to compare against.
pub fn savings_percentage(original: f64, selling: f64) -> f64 {
    if original == 0.0 {
        return 0.0;
    }
    (((original - selling) / original) * 100.0).round()
}
