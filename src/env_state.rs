//! # Catalog environment state
//!
//! This module defines [`crate::env_state::NeoEnv`], the **shared environment object** handed to
//! the catalog client. It bundles:
//!
//! - A persistent **HTTP client** ([`reqwest::Client`]) configured with the request timeout
//!   and a crate user agent.
//! - The validated [`CatalogConfig`] the client was built from.
//!
//! `reqwest::Client` keeps its connection pool behind an `Arc`, so cloning a [`NeoEnv`] is
//! cheap and every clone shares the same pool. All retrieval tasks of a run go through this
//! single handle, concurrently and without extra locking.
//!
//! ## Structure
//!
//! ```text
//! NeoEnv
//! ├── http_client  (reqwest::Client)
//! └── config       (CatalogConfig)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use neo_vicinity::{config::CatalogConfig, env_state::NeoEnv};
//!
//! let env = NeoEnv::new(CatalogConfig::from_env()?)?;
//! let body = env.get_from_url(url, "3542519").await?;
//! ```
use reqwest::{Client, Url};
use tracing::debug;

use crate::{config::CatalogConfig, neo_errors::NeoError};

#[derive(Debug, Clone)]
pub struct NeoEnv {
    pub http_client: Client,
    pub config: CatalogConfig,
}

impl NeoEnv {
    /// Build the environment and its HTTP client from a configuration.
    ///
    /// Return
    /// ------
    /// * The environment, or [`NeoError::ReqwestError`] if the TLS backend cannot be initialized
    pub fn new(config: CatalogConfig) -> Result<Self, NeoError> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(NeoEnv {
            http_client,
            config,
        })
    }

    /// GET `url` and return the response body.
    ///
    /// Arguments
    /// ---------
    /// * `url`: the resource to fetch
    /// * `id`: the catalog object the request is about, used in diagnostics
    ///
    /// Return
    /// ------
    /// * The body as text on a 2xx answer
    /// * [`NeoError::ObjectNotFound`] on 404, [`NeoError::HttpStatus`] on any other non-success
    ///   status, [`NeoError::ReqwestError`] on transport failure
    pub(crate) async fn get_from_url(&self, url: Url, id: &str) -> Result<String, NeoError> {
        debug!(object_id = id, "GET {}", redact_api_key(&url));

        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(NeoError::ObjectNotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(NeoError::HttpStatus {
                id: id.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Copy of `url` with the `api_key` query value masked, safe for logs
fn redact_api_key(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return redacted;
    }
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

#[cfg(test)]
mod env_state_test {
    use super::*;

    #[test]
    fn test_redact_api_key() {
        let url =
            Url::parse("https://api.nasa.gov/neo/rest/v1/neo/3542519?api_key=secret").unwrap();
        assert_eq!(
            redact_api_key(&url).as_str(),
            "https://api.nasa.gov/neo/rest/v1/neo/3542519?api_key=***"
        );

        let bare = Url::parse("https://api.nasa.gov/neo/rest/v1/neo/3542519").unwrap();
        assert_eq!(redact_api_key(&bare), bare);
    }

    #[test]
    fn test_env_keeps_config() {
        let config = CatalogConfig::builder().api_key("abc").build().unwrap();
        let env = NeoEnv::new(config.clone()).unwrap();
        assert_eq!(env.config, config);
    }
}
