//! # neo_vicinity
//!
//! Find, among a set of near-Earth objects, the ones passing closest to Earth inside a
//! date window.
//!
//! The crate retrieves each object's close-approach history from the NASA NeoWs catalog
//! (one concurrent request per identifier), keeps the objects with at least one approach
//! in the window, ranks them by their smallest in-window miss distance and returns the
//! first N.
//!
//! ## Modules
//!
//! * [`approach`] – the pipeline entry point ([`ApproachDetector`]), the concurrent
//!   [`Fetcher`](approach::fetcher::Fetcher) and the selector.
//! * [`vicinity`] – [`DateWindow`], the window filter and the [`VicinityRanker`] comparator.
//! * [`catalog`] – the [`CatalogClient`] capability and its NeoWs implementation.
//! * [`neo`] – data model: [`CatalogObject`], [`ApproachRecord`], [`MissDistance`].
//! * [`config`] / [`env_state`] – configuration and the shared HTTP client.
//! * [`time`] – calendar dates and epoch-millisecond conversions (UTC).
pub mod approach;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod env_state;
pub mod neo;
pub mod neo_errors;
pub mod time;
pub mod vicinity;

pub use approach::ApproachDetector;
pub use catalog::{neows::NeoWsClient, CatalogClient};
pub use config::{CatalogConfig, FetchMode};
pub use neo::{ApproachRecord, CatalogObject, DistanceUnit, MissDistance};
pub use neo_errors::NeoError;
pub use time::CalendarDate;
pub use vicinity::{DateWindow, VicinityRanker};
