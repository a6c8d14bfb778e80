//! In-memory caching using moka
//!
//! Categories, subcategories and the price list are read on every form open
//! but change rarely, so they are kept for a configurable TTL. Mutations made
//! through this service invalidate the affected entry right away.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{Category, PriceList, Subcategory};

const ALL: &str = "all";

const MIN_WARM_PERIOD: Duration = Duration::from_secs(1);

/// Application cache of catalog listings
#[derive(Clone)]
pub struct AppCache {
    pub categories: Cache<String, Arc<Vec<Category>>>,
    pub subcategories: Cache<String, Arc<Vec<Subcategory>>>,
    pub price_lists: Cache<String, Arc<Vec<PriceList>>>,
}

impl AppCache {
    /// Create a new cache instance; every listing lives for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            categories: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
            subcategories: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
            // The price list changes through this service, so a shorter idle time is fine
            price_lists: Cache::builder()
                .max_capacity(1)
                .time_to_live(ttl)
                .time_to_idle(ttl / 2)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            categories_cached: self.categories.entry_count() > 0,
            subcategories_cached: self.subcategories.entry_count() > 0,
            price_list_cached: self.price_lists.entry_count() > 0,
        }
    }

    pub async fn invalidate_price_lists(&self) {
        self.price_lists.invalidate(ALL).await;
        debug!("Price list cache invalidated");
    }

    pub async fn categories(&self, api: &ApiClient) -> Result<Arc<Vec<Category>>> {
        if let Some(cached) = self.categories.get(ALL).await {
            debug!("Cache HIT for categories");
            return Ok(cached);
        }
        debug!("Cache MISS for categories");
        let fresh = Arc::new(api.list_categories().await?);
        self.categories.insert(ALL.to_string(), fresh.clone()).await;
        Ok(fresh)
    }

    pub async fn subcategories(&self, api: &ApiClient) -> Result<Arc<Vec<Subcategory>>> {
        if let Some(cached) = self.subcategories.get(ALL).await {
            debug!("Cache HIT for subcategories");
            return Ok(cached);
        }
        debug!("Cache MISS for subcategories");
        let fresh = Arc::new(api.list_subcategories().await?);
        self.subcategories.insert(ALL.to_string(), fresh.clone()).await;
        Ok(fresh)
    }

    pub async fn price_lists(&self, api: &ApiClient) -> Result<Arc<Vec<PriceList>>> {
        if let Some(cached) = self.price_lists.get(ALL).await {
            debug!("Cache HIT for price list");
            return Ok(cached);
        }
        debug!("Cache MISS for price list");
        let fresh = Arc::new(api.list_price_lists().await?);
        self.price_lists.insert(ALL.to_string(), fresh.clone()).await;
        Ok(fresh)
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub categories_cached: bool,
    pub subcategories_cached: bool,
    pub price_list_cached: bool,
}

/// Start background cache warmer
///
/// Warms the category listings on startup and refreshes them every `every`.
pub async fn start_cache_warmer(cache: AppCache, api: ApiClient, every: Duration) {
    // tokio panics on a zero period
    let mut interval = interval(every.max(MIN_WARM_PERIOD));
    loop {
        interval.tick().await;
        warm_cache(&cache, &api).await;
    }
}

async fn warm_cache(cache: &AppCache, api: &ApiClient) {
    info!("Starting cache warm-up...");

    match api.list_categories().await {
        Ok(categories) => {
            cache
                .categories
                .insert(ALL.to_string(), Arc::new(categories))
                .await;
        }
        Err(e) => warn!("Failed to warm categories cache: {}", e),
    }

    match api.list_subcategories().await {
        Ok(subcategories) => {
            cache
                .subcategories
                .insert(ALL.to_string(), Arc::new(subcategories))
                .await;
        }
        Err(e) => warn!("Failed to warm subcategories cache: {}", e),
    }

    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_warmer_survives_zero_period() {
        let api = ApiClient::new("http://127.0.0.1:9/api", Duration::from_millis(200)).unwrap();
        let cache = AppCache::new(Duration::from_secs(60));

        let handle = tokio::spawn(start_cache_warmer(cache, api, Duration::ZERO));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!handle.is_finished());
        handle.abort();
    }

    #[tokio::test]
    async fn test_stats_start_empty() {
        let stats = AppCache::new(Duration::from_secs(60)).stats();
        assert!(!stats.categories_cached);
        assert!(!stats.subcategories_cached);
        assert!(!stats.price_list_cached);
    }
}
