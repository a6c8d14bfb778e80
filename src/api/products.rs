//! Product endpoints

use crate::error::AppError;
use crate::form::ProductPayload;
use crate::models::{Product, ProductCodeCheck};

use super::ApiClient;

impl ApiClient {
    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        let request = self.http.get(self.endpoint(&["products", id])?);
        self.send(request).await.map_err(|e| match e {
            AppError::Upstream { status: 404, .. } => AppError::NotFound,
            other => other,
        })
    }

    /// Whether `code` is still free for a new product
    pub async fn check_product_code(&self, code: &str) -> Result<ProductCodeCheck, AppError> {
        let request = self
            .http
            .get(self.endpoint(&["products", "check-code", code])?);
        self.send(request).await
    }

    pub async fn create_product(&self, payload: ProductPayload) -> Result<Product, AppError> {
        let request = self
            .http
            .post(self.endpoint(&["products"])?)
            .multipart(payload.into_multipart()?);
        let product: Product = self.send(request).await?;
        tracing::info!("Created product {} ({})", product.product_code, product.id);
        Ok(product)
    }

    pub async fn update_product(&self, id: &str, payload: ProductPayload) -> Result<Product, AppError> {
        let request = self
            .http
            .put(self.endpoint(&["products", id])?)
            .multipart(payload.into_multipart()?);
        let product: Product = self.send(request).await?;
        tracing::info!("Updated product {}", id);
        Ok(product)
    }
}
