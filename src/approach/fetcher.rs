//! # Fan-out retrieval of catalog objects
//!
//! [`Fetcher`] drives a shared [`CatalogClient`] over a list of identifiers and collects
//! every object that could be retrieved into a [`FetchReport`].
//!
//! ## Execution modes
//! -----------------
//! * [`FetchMode::Concurrent`] – one `tokio` task per identifier in a [`JoinSet`], optionally
//!   throttled by a [`Semaphore`] (`max_concurrent_requests`). The fetcher waits for **every**
//!   task before returning; it never hands out partial results.
//! * [`FetchMode::Sequential`] – identifiers are retrieved one after the other on the calling
//!   task.
//!
//! ## Result slots
//! -----------------
//! Each concurrent task returns its outcome together with the index of its identifier.
//! Outcomes are written into a per-identifier slot after the join, so no collection is ever
//! shared between tasks, and successful objects come back in input order whatever the
//! completion order was.
//!
//! ## Error semantics
//! -----------------
//! * A failed retrieval (transport, HTTP status, malformed payload, invalid distance)
//!   drops the identifier and emits a `warn!` diagnostic; the batch goes on.
//! * A task that panics is handled the same way and reported as
//!   [`NeoError::RetrievalTaskFailed`].
//! * Nothing is retried, and no deadline is imposed beyond the client's own request timeout.
use std::{fmt, sync::Arc};

use itertools::Itertools;
use tokio::{sync::Semaphore, task::JoinSet};
use tracing::{debug, info, warn};

use crate::{
    catalog::CatalogClient,
    config::{CatalogConfig, FetchMode},
    constants::ObjectId,
    neo::CatalogObject,
    neo_errors::NeoError,
};

/// One identifier the fetcher had to drop.
#[derive(Debug)]
pub struct FetchFailure {
    pub id: ObjectId,
    pub error: NeoError,
}

/// Outcome of a fetch over a list of identifiers.
///
/// Display
/// -----------------
/// * `format!("{}", report)` – compact single line, e.g. `requested=3, retrieved=2, failed=1`
/// * `format!("{:#}", report)` – multi-line summary listing the dropped identifiers
#[derive(Debug, Default)]
pub struct FetchReport {
    pub requested: usize,
    /// Successfully retrieved objects, in input order
    pub objects: Vec<CatalogObject>,
    pub failures: Vec<FetchFailure>,
}

impl FetchReport {
    pub fn retrieved(&self) -> usize {
        self.objects.len()
    }

    pub fn failed_ids(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.id.as_str())
    }

    fn record(&mut self, id: ObjectId, outcome: Result<CatalogObject, NeoError>) {
        match outcome {
            Ok(object) => {
                debug!(object_id = %id, approaches = object.approaches.len(), "Object retrieved");
                self.objects.push(object);
            }
            Err(error) => {
                warn!(object_id = %id, error = %error, "Failed scanning for asteroid, dropping it");
                self.failures.push(FetchFailure { id, error });
            }
        }
    }
}

impl fmt::Display for FetchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Catalog retrieval summary")?;
            writeln!(f, "-------------------------")?;
            writeln!(f, "requested : {}", self.requested)?;
            writeln!(f, "retrieved : {}", self.retrieved())?;
            write!(f, "failed    : {}", self.failures.len())?;
            if !self.failures.is_empty() {
                write!(f, " ({})", self.failed_ids().join(", "))?;
            }
            Ok(())
        } else {
            write!(
                f,
                "requested={}, retrieved={}, failed={}",
                self.requested,
                self.retrieved(),
                self.failures.len()
            )
        }
    }
}

/// Retrieves catalog objects through an injected, shared [`CatalogClient`].
#[derive(Clone)]
pub struct Fetcher {
    client: Arc<dyn CatalogClient>,
    mode: FetchMode,
    max_concurrent_requests: Option<usize>,
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("client", &self.client.name())
            .field("mode", &self.mode)
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .finish()
    }
}

impl Fetcher {
    /// Concurrent, unbounded fetcher over `client`.
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Fetcher {
            client,
            mode: FetchMode::Concurrent,
            max_concurrent_requests: None,
        }
    }

    /// Fetcher using the mode and concurrency limit of `config`.
    pub fn with_config(client: Arc<dyn CatalogClient>, config: &CatalogConfig) -> Self {
        Fetcher {
            client,
            mode: config.fetch_mode,
            max_concurrent_requests: config.max_concurrent_requests,
        }
    }

    pub fn with_mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    /// `None` lifts the limit, `Some(0)` is treated as `Some(1)`.
    pub fn with_max_concurrent_requests(mut self, limit: Option<usize>) -> Self {
        self.max_concurrent_requests = limit.map(|n| n.max(1));
        self
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    pub fn client(&self) -> &Arc<dyn CatalogClient> {
        &self.client
    }

    /// Retrieve `ids` with the configured [`FetchMode`].
    pub async fn fetch(&self, ids: &[ObjectId]) -> FetchReport {
        match self.mode {
            FetchMode::Concurrent => self.fetch_all(ids).await,
            FetchMode::Sequential => self.fetch_sequential(ids).await,
        }
    }

    /// Retrieve every identifier concurrently and wait for all of them.
    ///
    /// Arguments
    /// -----------------
    /// * `ids`: identifiers to look up, duplicates are fetched as many times as they appear.
    ///
    /// Return
    /// ----------
    /// * A [`FetchReport`] holding the retrieved objects in input order and the dropped
    ///   identifiers with their errors.
    pub async fn fetch_all(&self, ids: &[ObjectId]) -> FetchReport {
        info!(
            count = ids.len(),
            catalog = self.client.name(),
            limit = ?self.max_concurrent_requests,
            "Checking passing of objects"
        );

        let semaphore = self
            .max_concurrent_requests
            .map(|n| Arc::new(Semaphore::new(n)));
        let mut tasks = JoinSet::new();

        for (slot, id) in ids.iter().enumerate() {
            let client = Arc::clone(&self.client);
            let semaphore = semaphore.clone();
            let id = id.clone();

            tasks.spawn(async move {
                let _permit = match semaphore {
                    Some(sem) => sem.acquire_owned().await.ok(),
                    None => None,
                };
                let outcome = client.fetch(&id).await;
                (slot, outcome)
            });
        }

        let mut slots: Vec<Option<Result<CatalogObject, NeoError>>> =
            ids.iter().map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, outcome)) => slots[slot] = Some(outcome),
                Err(join_err) => warn!(error = %join_err, "Retrieval task panicked"),
            }
        }

        let mut report = FetchReport {
            requested: ids.len(),
            ..FetchReport::default()
        };
        for (id, slot) in ids.iter().zip(slots) {
            let outcome = slot.unwrap_or_else(|| Err(NeoError::RetrievalTaskFailed(id.clone())));
            report.record(id.clone(), outcome);
        }

        info!(%report, "Received objects");
        report
    }

    /// Retrieve the identifiers one after the other.
    pub async fn fetch_sequential(&self, ids: &[ObjectId]) -> FetchReport {
        info!(
            count = ids.len(),
            catalog = self.client.name(),
            "Checking passing of objects sequentially"
        );

        let mut report = FetchReport {
            requested: ids.len(),
            ..FetchReport::default()
        };
        for id in ids {
            let outcome = self.client.fetch(id).await;
            report.record(id.clone(), outcome);
        }

        info!(%report, "Received objects");
        report
    }
}
