//! # Closest-approach detection
//!
//! [`ApproachDetector`] wires the whole pipeline together:
//!
//! ```text
//! ids ──► Fetcher (one task per id) ──► window filter ──► VicinityRanker sort ──► truncate
//! ```
//!
//! 1. **Fetch** – [`fetcher::Fetcher`] retrieves every identifier through the injected
//!    [`CatalogClient`]; failures are logged and dropped.
//! 2. **Filter** – objects without any approach inside the [`DateWindow`] are discarded.
//! 3. **Rank & select** – [`selector::select_closest`] sorts the survivors closest first and
//!    keeps at most `limit` of them.
//!
//! Filtering, ranking and selection run after the fetch barrier on an owned `Vec`, on the
//! calling task.
//!
//! ## Example
//!
//! ```rust,no_run
//! use neo_vicinity::{approach::ApproachDetector, config::CatalogConfig, vicinity::DateWindow};
//!
//! # async fn demo() -> Result<(), neo_vicinity::neo_errors::NeoError> {
//! let detector = ApproachDetector::from_config(CatalogConfig::from_env()?)?;
//! let window = DateWindow::new("2028-01-01".parse()?, "2028-12-31".parse()?);
//! let ids = vec!["3542519".to_string(), "3726710".to_string()];
//!
//! for neo in detector.get_closest_approaches(&ids, 10, &window).await {
//!     println!("{}", neo.display_name());
//! }
//! # Ok(()) }
//! ```
//!
//! ## Input consistency
//!
//! An inverted window (`start > end`) is not an error: it matches nothing, so the result is
//! empty and a warning is logged.
pub mod fetcher;
pub mod selector;

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    catalog::{neows::NeoWsClient, CatalogClient},
    config::CatalogConfig,
    constants::ObjectId,
    neo::CatalogObject,
    neo_errors::NeoError,
    vicinity::{is_approaching_within_window, DateWindow, VicinityRanker},
};

use self::{fetcher::Fetcher, selector::select_closest};

#[derive(Debug, Clone)]
pub struct ApproachDetector {
    fetcher: Fetcher,
}

impl ApproachDetector {
    /// Detector fetching concurrently, without a concurrency limit, through `client`.
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        ApproachDetector {
            fetcher: Fetcher::new(client),
        }
    }

    /// Detector backed by the NeoWs catalog described by `config`.
    pub fn from_config(config: CatalogConfig) -> Result<Self, NeoError> {
        let client = NeoWsClient::new(config.clone())?;
        Ok(ApproachDetector {
            fetcher: Fetcher::with_config(Arc::new(client), &config),
        })
    }

    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        ApproachDetector { fetcher }
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// The `limit` objects of `ids` passing closest to Earth inside `window`.
    ///
    /// Arguments
    /// -----------------
    /// * `ids`: catalog identifiers to look up.
    /// * `limit`: maximum number of objects returned.
    /// * `window`: the inclusive date range approaches must fall in.
    ///
    /// Return
    /// ----------
    /// * At most `limit` objects, closest first. Identifiers that could not be retrieved
    ///   are silently missing from the result (they are reported in the logs).
    pub async fn get_closest_approaches(
        &self,
        ids: &[ObjectId],
        limit: usize,
        window: &DateWindow,
    ) -> Vec<CatalogObject> {
        let report = self.fetcher.fetch(ids).await;
        info!(
            retrieved = report.retrieved(),
            failed = report.failures.len(),
            "Now sorting"
        );
        Self::closest_within(report.objects, limit, window)
    }

    /// Filter, rank and truncate an already retrieved collection.
    ///
    /// Return
    /// ----------
    /// * The `limit` closest objects having at least one approach inside `window`.
    pub fn closest_within(
        objects: Vec<CatalogObject>,
        limit: usize,
        window: &DateWindow,
    ) -> Vec<CatalogObject> {
        if window.is_inverted() {
            warn!(%window, "Date window starts after it ends, nothing can match");
        }

        let candidates: Vec<CatalogObject> = objects
            .into_iter()
            .filter(|neo| is_approaching_within_window(neo, window))
            .collect();

        select_closest(candidates, &VicinityRanker::new(*window), limit)
    }
}
