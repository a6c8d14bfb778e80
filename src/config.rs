//! Service configuration, read from the environment (and `.env` via dotenvy)

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the admin service listens on
    pub bind_addr: SocketAddr,
    /// Base URL of the catalog API, e.g. `http://localhost:5000/api`
    pub catalog_api_url: String,
    /// Per-request timeout towards the catalog API
    pub api_timeout: Duration,
    /// TTL of cached categories, subcategories and price list
    pub cache_ttl: Duration,
    /// Largest JSON body accepted (uploads travel base64-encoded)
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            catalog_api_url: "http://localhost:5000/api".to_string(),
            api_timeout: Duration::from_secs(30),
            cache_ttl: Duration::from_secs(5 * 60),
            max_upload_bytes: 64 * 1024 * 1024,
        }
    }
}

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// A non-zero whole number of seconds. The cache TTL doubles as the warmer
/// period, and a zero period would stop the warmer.
fn positive_secs(name: &str, value: &str) -> anyhow::Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("{name} must be a whole number of seconds"))?;
    anyhow::ensure!(secs > 0, "{name} must be greater than zero");
    Ok(Duration::from_secs(secs))
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = match var("BIND_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("BIND_ADDR is not a socket address: {addr}"))?,
            None => defaults.bind_addr,
        };

        let catalog_api_url = var("CATALOG_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.catalog_api_url);

        let api_timeout = match var("CATALOG_API_TIMEOUT_SECS") {
            Some(secs) => positive_secs("CATALOG_API_TIMEOUT_SECS", &secs)?,
            None => defaults.api_timeout,
        };

        let cache_ttl = match var("CACHE_TTL_SECS") {
            Some(secs) => positive_secs("CACHE_TTL_SECS", &secs)?,
            None => defaults.cache_ttl,
        };

        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Some(bytes) => bytes
                .parse()
                .context("MAX_UPLOAD_BYTES must be a number of bytes")?,
            None => defaults.max_upload_bytes,
        };

        Ok(Self {
            bind_addr,
            catalog_api_url,
            api_timeout,
            cache_ttl,
            max_upload_bytes,
        })
    }
}
