use async_trait::async_trait;
use reqwest::Url;

use crate::{
    catalog::{neows_records::parse_neows_object, CatalogClient},
    config::CatalogConfig,
    env_state::NeoEnv,
    neo::CatalogObject,
    neo_errors::NeoError,
};

/// [`CatalogClient`] backed by the NASA NeoWs lookup endpoint `GET {base_url}neo/{id}`.
///
/// The client owns a [`NeoEnv`] whose `reqwest::Client` is shared by all concurrent
/// lookups issued through the same instance.
#[derive(Debug, Clone)]
pub struct NeoWsClient {
    env: NeoEnv,
}

impl NeoWsClient {
    pub fn new(config: CatalogConfig) -> Result<Self, NeoError> {
        Ok(NeoWsClient {
            env: NeoEnv::new(config)?,
        })
    }

    pub fn from_env_state(env: NeoEnv) -> Self {
        NeoWsClient { env }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.env.config
    }

    /// Lookup URL of one object, with the API key attached.
    ///
    /// Arguments
    /// ---------
    /// * `id`: catalog identifier, percent-encoded as a single path segment
    ///
    /// Return
    /// ------
    /// * `{base_url}neo/{id}?api_key={key}`
    pub fn object_url(&self, id: &str) -> Result<Url, NeoError> {
        let mut url = self.env.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NeoError::InvalidUrl(self.env.config.base_url.to_string()))?
            .pop_if_empty()
            .push("neo")
            .push(id.trim());
        url.query_pairs_mut()
            .append_pair("api_key", &self.env.config.api_key);
        Ok(url)
    }
}

#[async_trait]
impl CatalogClient for NeoWsClient {
    async fn fetch(&self, id: &str) -> Result<CatalogObject, NeoError> {
        let url = self.object_url(id)?;
        let body = self.env.get_from_url(url, id).await?;
        parse_neows_object(&body)
    }

    fn name(&self) -> &str {
        "neows"
    }
}
