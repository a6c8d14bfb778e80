//! Price list route handlers.
//!
//! There is at most one price list. Creating a second one is refused here
//! before the catalog API is asked.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, put},
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::form::{FormMode, PriceListUpload};
use crate::models::{format_file_size, PriceList};
use crate::AppState;

/// Routes mounted under `/api/price-lists`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show).post(create))
        .route("/:id", put(update).delete(remove))
        .route("/:id/toggle-status", patch(toggle_status))
}

/// The current price list plus what the admin may do next
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceListView {
    pub price_list: Option<PriceList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_label: Option<String>,
    pub can_create: bool,
}

impl PriceListView {
    fn new(price_list: Option<PriceList>) -> Self {
        Self {
            file_size_label: price_list.as_ref().map(|p| format_file_size(p.file_size)),
            can_create: price_list.is_none(),
            price_list,
        }
    }
}

pub async fn show(State(state): State<AppState>) -> Result<Json<PriceListView>> {
    let lists = state.cache.price_lists(&state.api).await?;
    Ok(Json(PriceListView::new(lists.first().cloned())))
}

pub async fn create(
    State(state): State<AppState>,
    Json(upload): Json<PriceListUpload>,
) -> Result<(StatusCode, Json<PriceList>)> {
    upload.validate(FormMode::Create)?;

    // Always ask the catalog API; a stale cache must not allow a second document
    let existing = state.api.list_price_lists().await?;
    if let Some(current) = existing.first() {
        return Err(AppError::Conflict(format!(
            "A price list already exists ({}). Edit or delete it instead.",
            current.document_name
        )));
    }

    let created = state.api.upload_price_list(upload).await?;
    state.cache.invalidate_price_lists().await;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(upload): Json<PriceListUpload>,
) -> Result<Json<PriceList>> {
    upload.validate(FormMode::Edit)?;
    let updated = state.api.update_price_list(&id, upload).await?;
    state.cache.invalidate_price_lists().await;
    Ok(Json(updated))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    state.api.delete_price_list(&id).await?;
    state.cache.invalidate_price_lists().await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PriceList>> {
    let toggled = state.api.toggle_price_list_status(&id).await?;
    state.cache.invalidate_price_lists().await;
    Ok(Json(toggled))
}
