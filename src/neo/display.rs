//! # Tabular display for ranked objects
//!
//! [`RankingDisplay`] borrows a slice of [`CatalogObject`] (typically the output of
//! [`ApproachDetector::get_closest_approaches`](crate::approach::ApproachDetector::get_closest_approaches))
//! and renders one line per object with its closest approach inside a [`DateWindow`]:
//!
//! ```text
//!  # | Id        | Name            | Closest approach (UTC) |     Miss distance | PHA
//!  1 | 3542519   | (2010 PK9)      | 2028-04-18 13:20       |     5261628.0 km  | yes
//! ```
//!
//! Distances are printed in the unit chosen with [`RankingDisplay::with_unit`] (or taken
//! from [`CatalogConfig::distance_unit`] with [`RankingDisplay::with_config`]); the
//! `PHA` column echoes the catalog's potentially-hazardous flag and nothing more.
//!
//! ```rust,ignore
//! use neo_vicinity::neo::display::RankingDisplayExt;
//!
//! println!("{}", ranked.ranking_table(&window).with_unit(DistanceUnit::LunarDistances));
//! ```
use std::fmt;

use crate::{
    config::CatalogConfig,
    neo::{CatalogObject, DistanceUnit},
    time::format_epoch_millis,
    vicinity::{DateWindow, VicinityRanker},
};

pub struct RankingDisplay<'a> {
    objects: &'a [CatalogObject],
    ranker: VicinityRanker,
    unit: DistanceUnit,
    precision: usize,
}

impl<'a> RankingDisplay<'a> {
    pub fn new(objects: &'a [CatalogObject], window: &DateWindow) -> Self {
        RankingDisplay {
            objects,
            ranker: VicinityRanker::new(*window),
            unit: DistanceUnit::default(),
            precision: 1,
        }
    }

    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Render distances in the unit selected by `config`
    pub fn with_config(self, config: &CatalogConfig) -> Self {
        self.with_unit(config.distance_unit)
    }

    /// Fractional digits of the distance column
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

pub trait RankingDisplayExt {
    fn ranking_table(&self, window: &DateWindow) -> RankingDisplay<'_>;
}

impl RankingDisplayExt for [CatalogObject] {
    fn ranking_table(&self, window: &DateWindow) -> RankingDisplay<'_> {
        RankingDisplay::new(self, window)
    }
}

impl RankingDisplayExt for Vec<CatalogObject> {
    fn ranking_table(&self, window: &DateWindow) -> RankingDisplay<'_> {
        RankingDisplay::new(self.as_slice(), window)
    }
}

impl fmt::Display for RankingDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distance_header = format!("Miss distance [{}]", self.unit.symbol());
        writeln!(
            f,
            "{:>3} | {:<10} | {:<24} | {:<22} | {:>20} | PHA",
            "#", "Id", "Name", "Closest approach (UTC)", distance_header
        )?;

        for (rank, neo) in self.objects.iter().enumerate() {
            let closest = self.ranker.closest_qualifying_approach(neo);
            let when = closest
                .map(|a| format_epoch_millis(a.epoch_millis))
                .unwrap_or_else(|| "-".into());
            let distance = closest
                .map(|a| format!("{:.*}", self.precision, a.miss_distance.in_unit(self.unit)))
                .unwrap_or_else(|| "-".into());

            write!(
                f,
                "{:>3} | {:<10} | {:<24} | {:<22} | {:>20} | {}",
                rank + 1,
                neo.id,
                neo.name.as_deref().unwrap_or("-"),
                when,
                distance,
                if neo.is_potentially_hazardous { "yes" } else { "no" }
            )?;
            if rank + 1 < self.objects.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
