//! # Constants and type definitions for neo_vicinity
//!
//! This module centralizes the **distance conversion factors**, the **catalog defaults**
//! and the **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Astronomical distance constants (AU, lunar distance, statute mile)
//! - Default values for the NASA NeoWs catalog service
//! - Core type aliases shared by the catalog, the ranking and the pipeline

use std::time::Duration;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Mean Earth–Moon distance in kilometers, as used by the NeoWs "lunar" unit
pub const LUNAR_DISTANCE: f64 = 384_400.0;

/// International statute mile in kilometers
pub const MILE: f64 = 1.609_344;

/// Number of milliseconds in a day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

// -------------------------------------------------------------------------------------------------
// Catalog defaults
// -------------------------------------------------------------------------------------------------

/// Root of the NASA NeoWs REST API, the `neo/{id}` lookup is resolved against it
pub const NEOWS_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1/";

/// Public rate-limited key accepted by api.nasa.gov
pub const DEMO_API_KEY: &str = "DEMO_KEY";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 8;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Opaque identifier of a catalog entry (NeoWs `id`, e.g. `"3542519"`)
pub type ObjectId = String;
/// Distance in kilometers
pub type Kilometer = f64;
/// Milliseconds since 1970-01-01T00:00:00 UTC
pub type EpochMillis = i64;
