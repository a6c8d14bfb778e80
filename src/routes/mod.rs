//! HTTP routes

pub mod catalog;
pub mod price_lists;
pub mod product_form;

use axum::{extract::DefaultBodyLimit, extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::cache::CacheStats;
use crate::{inventory, pricing, AppState};

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    pub catalog_api: String,
    pub cache: CacheStats,
}

async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        catalog_api: state.api.base_url().to_string(),
        cache: state.cache.stats(),
    })
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    let api = Router::new()
        .nest("/pricing", pricing::router())
        .nest("/inventory", inventory::router())
        .nest("/product-form", product_form::router())
        .nest("/price-lists", price_lists::router())
        .merge(catalog::router());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
