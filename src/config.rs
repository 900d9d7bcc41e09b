//! # Catalog and pipeline configuration
//!
//! [`CatalogConfig`] gathers every knob of a closest-approach run: where the NeoWs
//! catalog lives, which API key to send, how long a single request may take, how many
//! requests may be in flight at once and how distances are presented.
//!
//! Values are assembled through a **fluent builder** whose [`CatalogConfigBuilder::build`]
//! validates the combination before handing out a configuration:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use neo_vicinity::config::{CatalogConfig, FetchMode};
//!
//! let config = CatalogConfig::builder()
//!     .api_key("my-key")
//!     .request_timeout(Duration::from_secs(10))
//!     .max_concurrent_requests(Some(4))
//!     .fetch_mode(FetchMode::Concurrent)
//!     .build()
//!     .unwrap();
//! ```
//!
//! [`CatalogConfig::from_env`] starts from the defaults and overlays the
//! `NASA_API_KEY`, `NEOWS_BASE_URL`, `NEOWS_TIMEOUT_SECS` and `NEOWS_MAX_CONCURRENCY`
//! environment variables.
//!
//! Defaults
//! -----------------
//! * `base_url`: `https://api.nasa.gov/neo/rest/v1/`
//! * `api_key`: `DEMO_KEY`
//! * `request_timeout`: 30 s
//! * `max_concurrent_requests`: `Some(8)` (`None` means unbounded fan-out)
//! * `fetch_mode`: [`FetchMode::Concurrent`]
//! * `distance_unit`: [`DistanceUnit::Kilometers`]
use std::{env, time::Duration};

use reqwest::Url;

use crate::{
    constants::{
        DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_REQUEST_TIMEOUT, DEMO_API_KEY, NEOWS_BASE_URL,
    },
    neo::DistanceUnit,
    neo_errors::NeoError,
};

/// How the fetcher drives the catalog client over the requested identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// One task per identifier, joined at a barrier
    #[default]
    Concurrent,
    /// One identifier after the other on the calling task
    Sequential,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub api_key: String,
    pub request_timeout: Duration,
    pub max_concurrent_requests: Option<usize>,
    pub fetch_mode: FetchMode,
    pub distance_unit: DistanceUnit,
}

impl CatalogConfig {
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::new()
    }

    /// Defaults overlaid with the process environment.
    ///
    /// Return
    /// ----------
    /// * The validated configuration, or [`NeoError::InvalidConfig`] / [`NeoError::InvalidUrl`]
    ///   if one of the variables holds an unusable value.
    pub fn from_env() -> Result<Self, NeoError> {
        let mut builder = CatalogConfigBuilder::new();

        if let Ok(key) = env::var("NASA_API_KEY") {
            builder = builder.api_key(key);
        }
        if let Ok(url) = env::var("NEOWS_BASE_URL") {
            builder = builder.base_url(url);
        }
        if let Ok(secs) = env::var("NEOWS_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                NeoError::InvalidConfig(format!("NEOWS_TIMEOUT_SECS is not an integer: {secs}"))
            })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        if let Ok(limit) = env::var("NEOWS_MAX_CONCURRENCY") {
            let limit = limit.trim().parse::<usize>().map_err(|_| {
                NeoError::InvalidConfig(format!(
                    "NEOWS_MAX_CONCURRENCY is not an integer: {limit}"
                ))
            })?;
            builder = builder.max_concurrent_requests(Some(limit));
        }

        builder.build()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: Url::parse(NEOWS_BASE_URL).expect("default NeoWs URL is valid"),
            api_key: DEMO_API_KEY.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_concurrent_requests: Some(DEFAULT_MAX_CONCURRENT_REQUESTS),
            fetch_mode: FetchMode::default(),
            distance_unit: DistanceUnit::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfigBuilder {
    base_url: String,
    config: CatalogConfig,
}

impl Default for CatalogConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogConfigBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            base_url: NEOWS_BASE_URL.to_string(),
            config: CatalogConfig::default(),
        }
    }

    pub fn base_url(mut self, v: impl Into<String>) -> Self {
        self.base_url = v.into();
        self
    }
    pub fn api_key(mut self, v: impl Into<String>) -> Self {
        self.config.api_key = v.into();
        self
    }
    pub fn request_timeout(mut self, v: Duration) -> Self {
        self.config.request_timeout = v;
        self
    }
    pub fn max_concurrent_requests(mut self, v: Option<usize>) -> Self {
        self.config.max_concurrent_requests = v;
        self
    }
    pub fn fetch_mode(mut self, v: FetchMode) -> Self {
        self.config.fetch_mode = v;
        self
    }
    pub fn distance_unit(mut self, v: DistanceUnit) -> Self {
        self.config.distance_unit = v;
        self
    }

    /// Finalize the builder and produce a [`CatalogConfig`].
    ///
    /// Validation rules
    /// -----------------
    /// * `base_url` must parse as an absolute URL; a trailing `/` is appended when missing
    ///   so that `neo/{id}` resolves below it.
    /// * `api_key` must not be blank.
    /// * `request_timeout` must be non-zero.
    /// * `max_concurrent_requests`, when set, must be at least 1.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(CatalogConfig)` if every rule holds.
    /// * `Err(NeoError)` naming the first rule that failed.
    pub fn build(self) -> Result<CatalogConfig, NeoError> {
        let mut config = self.config;

        let mut raw_url = self.base_url.trim().to_string();
        if !raw_url.ends_with('/') {
            raw_url.push('/');
        }
        config.base_url =
            Url::parse(&raw_url).map_err(|e| NeoError::InvalidUrl(format!("{raw_url}: {e}")))?;

        if config.api_key.trim().is_empty() {
            return Err(NeoError::InvalidConfig("api_key must not be empty".into()));
        }
        if config.request_timeout.is_zero() {
            return Err(NeoError::InvalidConfig(
                "request_timeout must be non-zero".into(),
            ));
        }
        if config.max_concurrent_requests == Some(0) {
            return Err(NeoError::InvalidConfig(
                "max_concurrent_requests must be at least 1".into(),
            ));
        }

        Ok(config)
    }
}
