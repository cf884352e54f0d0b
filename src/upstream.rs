//! Data access helpers for the upstream REST API.
//!
//! Each helper performs one upstream call and maps the wire shape into the
//! display records in [`crate::model`]. There is no caching; retries happen
//! only as configured by [`RetryPolicy`].

use std::time::Duration;

use crate::model::{Category, Listing, LoginPayload, PageRequest, ProductRow, User, UserRow};

mod auth;
mod catalog;
mod http_client;
mod types;

pub use self::catalog::CategoryLoad;
pub use self::http_client::{RetryPolicy, UpstreamError};
pub use self::types::{WireCategory, WireCompany, WireProduct, WireProductMeta, WireUser};

use self::http_client::with_retries;
use self::types::*;

pub const DEFAULT_UPSTREAM_URL: &str = "https://dummyjson.com";

#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    /// Lifetime requested for tokens issued at login.
    pub session_ttl_mins: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout: Duration::from_secs(10),
            retry: RetryPolicy::none(),
            session_ttl_mins: 60,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UpstreamClient {
    config: UpstreamConfig,
    client: reqwest::Client,
}

/// Username/password pair sent to the upstream login endpoint.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl UpstreamClient {
    pub fn new(mut config: UpstreamConfig) -> Result<Self, UpstreamError> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .user_agent(concat!("dashgate/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|source| UpstreamError::Transport {
                label: "build http client".to_string(),
                source,
            })?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }
}
