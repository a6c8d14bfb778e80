//! Category and subcategory endpoints

use crate::error::AppError;
use crate::models::{Category, Subcategory};

use super::ApiClient;

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.send(self.http.get(self.endpoint(&["categories"])?)).await
    }

    pub async fn list_subcategories(&self) -> Result<Vec<Subcategory>, AppError> {
        self.send(self.http.get(self.endpoint(&["subcategories"])?)).await
    }
}
