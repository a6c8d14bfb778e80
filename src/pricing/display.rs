//! Storefront pricing of a stored product.
//!
//! Products created before the margin/discount fields existed only carry the
//! legacy `price`/`offerPrice` pair, so every value here falls back through
//! the older fields. Zero counts as unset at every step.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Product;

use super::calculators::{display_amount, savings_percentage};

/// Prices as the customer sees them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPricing {
    /// What the customer pays
    #[serde(with = "rust_decimal::serde::str")]
    pub selling_price: Decimal,
    /// Crossed-out price
    #[serde(with = "rust_decimal::serde::str")]
    pub original_price: Decimal,
    /// Whole-number discount badge ("81% OFF")
    pub discount_percentage: i64,
}

fn set(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

impl DisplayPricing {
    pub fn for_product(product: &Product) -> Self {
        let discount = match set(product.discount_percentage) {
            Some(d) => d.round(),
            None => match set(product.savings_percentage) {
                Some(s) => s,
                None => match set(product.offer_price) {
                    Some(offer) => savings_percentage(product.price, offer),
                    None => 0.0,
                },
            },
        };

        let selling = set(product.profit_margin_price)
            .or(set(product.final_price))
            .or(set(product.offer_price))
            .unwrap_or(product.price);

        let original = set(product.calculated_original_price).unwrap_or(product.price);

        Self {
            selling_price: display_amount(selling),
            original_price: display_amount(original),
            discount_percentage: discount as i64,
        }
    }
}
