//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use crate::models::opt_string_or_number;

/// Request to calculate selling and display prices.
///
/// Fields accept strings or numbers; missing fields are treated as blank
/// and fall back to their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatePricingRequest {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub base_price: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub profit_margin_percentage: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub discount_percentage: Option<String>,
}
