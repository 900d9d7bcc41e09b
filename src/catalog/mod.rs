//! # Catalog access
//!
//! The ranking pipeline never talks HTTP itself: it depends on the [`CatalogClient`]
//! capability, "given an object identifier, return that object's approach history or fail".
//!
//! * [`neows::NeoWsClient`] – the production implementation backed by the NASA NeoWs
//!   `neo/{id}` lookup endpoint.
//! * [`neows_records`] – serde mapping of the NeoWs JSON payload onto [`CatalogObject`].
//!
//! Implementations must be `Send + Sync`: a single client instance is shared by every
//! retrieval task of a run (see [`crate::approach::fetcher::Fetcher`]).
pub mod neows;
pub mod neows_records;

use async_trait::async_trait;

use crate::{neo::CatalogObject, neo_errors::NeoError};

#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Retrieve the full approach history of one object.
    ///
    /// Arguments
    /// -----------------
    /// * `id`: catalog identifier of the object.
    ///
    /// Return
    /// ----------
    /// * The object with every approach record the catalog knows of, or a [`NeoError`]
    ///   covering transport, status and decoding failures.
    async fn fetch(&self, id: &str) -> Result<CatalogObject, NeoError>;

    /// Short label used in diagnostics
    fn name(&self) -> &str {
        "catalog"
    }
}
