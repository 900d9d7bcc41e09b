#![allow(dead_code)]

use std::collections::HashMap;

use approx::assert_relative_eq;
use async_trait::async_trait;
use neo_vicinity::{
    catalog::neows_records::parse_neows_object, CatalogClient, CatalogObject, DateWindow,
    NeoError, VicinityRanker,
};
use tracing_subscriber::EnvFilter;

pub const NEO_EXAMPLE: &str = include_str!("../data/neo_example.json");
pub const NEO_EXAMPLE2: &str = include_str!("../data/neo_example2.json");

/// Object A: 2020 approach at 5,390,966 km, nothing in 2028.
pub const ID_A: &str = "3542519";
/// Object B: 2020 approach at 7,644,137 km and a 2028 approach at 5,261,628 km.
pub const ID_B: &str = "3726710";

/// Route the crate's `tracing` output to the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn object_a() -> CatalogObject {
    parse_neows_object(NEO_EXAMPLE).unwrap()
}

pub fn object_b() -> CatalogObject {
    parse_neows_object(NEO_EXAMPLE2).unwrap()
}

pub fn window(start: &str, end: &str) -> DateWindow {
    DateWindow::new(start.parse().unwrap(), end.parse().unwrap())
}

pub fn ids(objects: &[CatalogObject]) -> Vec<&str> {
    objects.iter().map(|o| o.id.as_str()).collect()
}

/// Catalog serving the JSON fixtures from memory.
///
/// Unknown identifiers fail with [`NeoError::ObjectNotFound`], identifiers registered
/// through [`FixtureCatalog::with_payload`] go through the NeoWs decoder so malformed bodies
/// fail the way a live response would.
#[derive(Default)]
pub struct FixtureCatalog {
    payloads: HashMap<String, String>,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        FixtureCatalog::default()
            .with_payload(ID_A, NEO_EXAMPLE)
            .with_payload(ID_B, NEO_EXAMPLE2)
    }

    pub fn with_payload(mut self, id: &str, body: &str) -> Self {
        self.payloads.insert(id.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl CatalogClient for FixtureCatalog {
    async fn fetch(&self, id: &str) -> Result<CatalogObject, NeoError> {
        let body = self
            .payloads
            .get(id)
            .ok_or_else(|| NeoError::ObjectNotFound(id.to_string()))?;
        parse_neows_object(body)
    }

    fn name(&self) -> &str {
        "fixtures"
    }
}

/// Check the ordering guarantees of a ranked result for `window` and `limit`.
pub fn assert_ranked(result: &[CatalogObject], window: &DateWindow, limit: usize) {
    let ranker = VicinityRanker::new(*window);
    assert!(result.len() <= limit);

    let minima: Vec<f64> = result
        .iter()
        .map(|o| {
            ranker
                .qualifying_minimum(o)
                .unwrap_or_else(|| panic!("{} has no approach inside {window}", o.id))
                .kilometers()
        })
        .collect();

    for pair in minima.windows(2) {
        assert!(pair[0] <= pair[1], "result not sorted: {minima:?}");
    }
}

pub fn assert_closest_km(object: &CatalogObject, window: &DateWindow, expected_km: f64) {
    let closest = VicinityRanker::new(*window)
        .qualifying_minimum(object)
        .expect("object should qualify");
    assert_relative_eq!(closest.kilometers(), expected_km, epsilon = 1e-6);
}
