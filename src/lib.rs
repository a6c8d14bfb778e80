//! Catalog admin service
//!
//! Pricing engine, inventory quantity derivation, product form state and the
//! single price list, served over axum in front of the catalog API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod form;
pub mod inventory;
pub mod models;
pub mod parse;
pub mod pricing;
pub mod routes;
pub mod upload;

use std::sync::Arc;

use api::ApiClient;
use cache::AppCache;
use config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub cache: AppCache,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let api = ApiClient::new(config.catalog_api_url.clone(), config.api_timeout)?;
        let cache = AppCache::new(config.cache_ttl);
        Ok(Self {
            api,
            cache,
            config: Arc::new(config),
        })
    }
}
