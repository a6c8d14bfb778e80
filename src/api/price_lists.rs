//! Price list endpoints.
//!
//! The catalog API keeps at most one price list; it enforces that itself, and
//! callers should not offer "create" while one exists.

use crate::error::AppError;
use crate::form::PriceListUpload;
use crate::models::PriceList;

use super::ApiClient;

impl ApiClient {
    pub async fn list_price_lists(&self) -> Result<Vec<PriceList>, AppError> {
        self.send(self.http.get(self.endpoint(&["price-lists"])?)).await
    }

    pub async fn upload_price_list(&self, upload: PriceListUpload) -> Result<PriceList, AppError> {
        let request = self
            .http
            .post(self.endpoint(&["price-lists", "upload"])?)
            .multipart(upload.into_multipart()?);
        let list: PriceList = self.send(request).await?;
        tracing::info!("Uploaded price list {} ({})", list.document_name, list.id);
        Ok(list)
    }

    pub async fn update_price_list(
        &self,
        id: &str,
        upload: PriceListUpload,
    ) -> Result<PriceList, AppError> {
        let request = self
            .http
            .put(self.endpoint(&["price-lists", id])?)
            .multipart(upload.into_multipart()?);
        let list: PriceList = self.send(request).await?;
        tracing::info!("Updated price list {}", id);
        Ok(list)
    }

    pub async fn delete_price_list(&self, id: &str) -> Result<(), AppError> {
        let request = self.http.delete(self.endpoint(&["price-lists", id])?);
        let _: Option<serde_json::Value> = self.send(request).await?;
        tracing::info!("Deleted price list {}", id);
        Ok(())
    }

    pub async fn toggle_price_list_status(&self, id: &str) -> Result<PriceList, AppError> {
        let request = self
            .http
            .patch(self.endpoint(&["price-lists", id, "toggle-status"])?);
        let list: PriceList = self.send(request).await?;
        tracing::info!("Price list {} is now {}", id, if list.is_active { "active" } else { "inactive" });
        Ok(list)
    }
}
