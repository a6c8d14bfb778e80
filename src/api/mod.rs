//! HTTP client for the catalog API.
//!
//! Every endpoint answers with an [`ApiResponse`] envelope; [`ApiClient`]
//! unwraps it and turns non-2xx answers into [`AppError::Upstream`].

mod categories;
mod price_lists;
mod products;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::{ApiErrorBody, ApiResponse};

/// Catalog API client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let base_url = base_url.into();
        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| AppError::Internal(format!("invalid catalog API URL {base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(AppError::Internal(format!(
                "catalog API URL cannot take a path: {base_url}"
            )));
        }

        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Endpoint URL built from path segments.
    ///
    /// Each segment is percent-encoded on its own, so an id can never reach
    /// another resource. Empty, `.` and `..` segments are refused.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        if segments
            .iter()
            .any(|s| s.is_empty() || *s == "." || *s == "..")
        {
            return Err(AppError::NotFound);
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Internal(format!(
                    "catalog API URL cannot take a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and unwrap the `data` of the response envelope
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                });
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<T> = response.json().await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = client("http://localhost:5000/api");
        assert_eq!(
            api.endpoint(&["price-lists", "upload"]).unwrap().as_str(),
            "http://localhost:5000/api/price-lists/upload"
        );

        let api = client("http://localhost:5000/api/");
        assert_eq!(
            api.endpoint(&["categories"]).unwrap().as_str(),
            "http://localhost:5000/api/categories"
        );
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let api = client("http://localhost:5000/api");
        assert_eq!(
            api.endpoint(&["price-lists", "../products/p1"]).unwrap().as_str(),
            "http://localhost:5000/api/price-lists/..%2Fproducts%2Fp1"
        );
        assert_eq!(
            api.endpoint(&["products", "check-code", "A B?#"]).unwrap().as_str(),
            "http://localhost:5000/api/products/check-code/A%20B%3F%23"
        );
    }

    #[test]
    fn test_endpoint_refuses_dot_segments() {
        let api = client("http://localhost:5000/api");
        for id in ["", ".", ".."] {
            assert!(matches!(
                api.endpoint(&["price-lists", id]),
                Err(AppError::NotFound)
            ));
        }
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(matches!(
            ApiClient::new("not a url", Duration::from_secs(5)),
            Err(AppError::Internal(_))
        ));
        assert!(matches!(
            ApiClient::new("mailto:admin@example.com", Duration::from_secs(5)),
            Err(AppError::Internal(_))
        ));
    }
}
