//! Inventory route handlers

use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::models::opt_string_or_number;
use crate::AppState;

use super::calculators::compute_total_quantity;

/// Request to derive total quantity from the case fields
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TotalQuantityRequest {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub case_quantity: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub received_case: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalQuantityResponse {
    pub total_available_quantity: u64,
}

/// Routes mounted under `/api/inventory`
pub fn router() -> Router<AppState> {
    Router::new().route("/total-quantity", post(total_quantity))
}

pub async fn total_quantity(Json(req): Json<TotalQuantityRequest>) -> Json<TotalQuantityResponse> {
    let total = compute_total_quantity(
        req.case_quantity.as_deref().unwrap_or_default(),
        req.received_case.as_deref().unwrap_or_default(),
    );
    Json(TotalQuantityResponse {
        total_available_quantity: total,
    })
}
