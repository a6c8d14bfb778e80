//! Pricing route handlers

use axum::{routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::calculators::{calculate_pricing, PricingInput};
use super::requests::CalculatePricingRequest;
use super::responses::PricingResponse;

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// Selling and display prices for the given pricing fields
pub async fn calculate(Json(req): Json<CalculatePricingRequest>) -> Result<Json<PricingResponse>> {
    let input = PricingInput::from_fields(
        req.base_price.as_deref().unwrap_or_default(),
        req.profit_margin_percentage.as_deref().unwrap_or_default(),
        req.discount_percentage.as_deref().unwrap_or_default(),
    );
    let output = calculate_pricing(input)?;
    Ok(Json(PricingResponse::new(input, output)))
}
