//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{display_amount, PricingInput, PricingOutput};

/// Money value rounded for display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPrices {
    #[serde(with = "rust_decimal::serde::str")]
    pub selling_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub display_original_price: Decimal,
}

/// Response for pricing calculation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    /// Inputs after defaults were applied
    pub input: PricingInput,
    /// Unrounded values, as sent to the catalog API
    pub selling_price: f64,
    pub display_original_price: f64,
    /// Two-place values for display
    pub display: DisplayPrices,
}

impl PricingResponse {
    pub fn new(input: PricingInput, output: PricingOutput) -> Self {
        Self {
            input,
            selling_price: output.selling_price,
            display_original_price: output.display_original_price,
            display: DisplayPrices {
                selling_price: display_amount(output.selling_price),
                display_original_price: display_amount(output.display_original_price),
            },
        }
    }
}
