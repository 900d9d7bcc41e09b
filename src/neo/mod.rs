//! # Near-Earth objects and their close approaches
//!
//! This module defines the catalog data model consumed by the ranking pipeline:
//!
//! * [`MissDistance`] – a validated, totally ordered separation between an object and Earth,
//!   stored in kilometers and rendered in any [`DistanceUnit`].
//! * [`ApproachRecord`] – one close-approach event (epoch timestamp + miss distance).
//! * [`CatalogObject`] – one catalog entry with its full approach history.
//!
//! Construction of a [`MissDistance`] rejects NaN, infinite and negative magnitudes, so that
//! comparisons between approaches can rely on [`f64::total_cmp`] and never observe an
//! unordered pair.
//!
//! ## See also
//! ------------
//! * [`crate::vicinity`] – Window filtering and ranking over these types.
//! * [`crate::catalog`] – Retrieval of [`CatalogObject`] values from the NeoWs service.
pub mod display;

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    constants::{EpochMillis, Kilometer, ObjectId, AU, LUNAR_DISTANCE, MILE},
    neo_errors::NeoError,
};

/// Units a miss distance can be expressed in.
///
/// Ranking is always performed on the canonical kilometer value; the unit only changes
/// how a distance is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    AstronomicalUnits,
    LunarDistances,
    Miles,
}

impl DistanceUnit {
    /// Number of kilometers in one unit
    pub fn kilometers_per_unit(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::AstronomicalUnits => AU,
            DistanceUnit::LunarDistances => LUNAR_DISTANCE,
            DistanceUnit::Miles => MILE,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::AstronomicalUnits => "AU",
            DistanceUnit::LunarDistances => "LD",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = NeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "au" | "astronomical" => Ok(DistanceUnit::AstronomicalUnits),
            "ld" | "lunar" => Ok(DistanceUnit::LunarDistances),
            "mi" | "miles" => Ok(DistanceUnit::Miles),
            other => Err(NeoError::InvalidConfig(format!(
                "unknown distance unit: {other}"
            ))),
        }
    }
}

/// Minimum separation between an object and Earth during one approach.
///
/// The magnitude is finite and non-negative, which makes the ordering total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissDistance {
    kilometers: Kilometer,
}

impl MissDistance {
    /// Build a miss distance from a value expressed in `unit`.
    ///
    /// Arguments
    /// -----------------
    /// * `value`: magnitude in the given unit.
    /// * `unit`: the unit of `value`.
    ///
    /// Return
    /// ----------
    /// * The distance, or [`NeoError::InvalidMissDistance`] if `value` is NaN or negative,
    ///   or if it is not finite once converted to kilometers.
    pub fn new(value: f64, unit: DistanceUnit) -> Result<Self, NeoError> {
        // abs() folds -0.0 into 0.0 so that == agrees with total_cmp
        let kilometers = value.abs() * unit.kilometers_per_unit();
        if value < 0.0 || !kilometers.is_finite() {
            return Err(NeoError::InvalidMissDistance(format!(
                "{value} {}",
                unit.symbol()
            )));
        }
        Ok(MissDistance { kilometers })
    }

    pub fn from_kilometers(kilometers: Kilometer) -> Result<Self, NeoError> {
        Self::new(kilometers, DistanceUnit::Kilometers)
    }

    pub fn kilometers(&self) -> Kilometer {
        self.kilometers
    }

    /// Magnitude converted to `unit`
    pub fn in_unit(&self, unit: DistanceUnit) -> f64 {
        self.kilometers / unit.kilometers_per_unit()
    }
}

impl Eq for MissDistance {}

impl PartialOrd for MissDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MissDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kilometers.total_cmp(&other.kilometers)
    }
}

/// A single close-approach event of one object.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachRecord {
    /// Time of closest approach, Unix epoch milliseconds (UTC)
    pub epoch_millis: EpochMillis,
    pub miss_distance: MissDistance,
    /// Calendar date as reported by the catalog (e.g. `"2028-04-18"`)
    pub calendar_date: Option<String>,
    /// Body the approach is relative to (`"Earth"`, `"Mars"`, ...)
    pub orbiting_body: Option<String>,
    pub relative_velocity_km_s: Option<f64>,
}

impl ApproachRecord {
    /// Build a bare approach record with no descriptive fields.
    pub fn new(epoch_millis: EpochMillis, miss_distance: MissDistance) -> Self {
        ApproachRecord {
            epoch_millis,
            miss_distance,
            calendar_date: None,
            orbiting_body: None,
            relative_velocity_km_s: None,
        }
    }
}

/// A catalog entry and its full close-approach history.
///
/// `is_potentially_hazardous` is carried as reported by the catalog; the ranking
/// and selection logic never consult it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogObject {
    pub id: ObjectId,
    pub name: Option<String>,
    pub is_potentially_hazardous: bool,
    pub approaches: Vec<ApproachRecord>,
}

impl CatalogObject {
    pub fn new(id: impl Into<ObjectId>, approaches: Vec<ApproachRecord>) -> Self {
        CatalogObject {
            id: id.into(),
            name: None,
            is_potentially_hazardous: false,
            approaches,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_hazard_flag(mut self, hazardous: bool) -> Self {
        self.is_potentially_hazardous = hazardous;
        self
    }

    /// Name if the catalog provided one, identifier otherwise
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn has_approaches(&self) -> bool {
        !self.approaches.is_empty()
    }
}

impl fmt::Display for MissDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} km", p, self.kilometers),
            None => write!(f, "{} km", self.kilometers),
        }
    }
}

#[cfg(test)]
mod neo_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_miss_distance_rejects_invalid_values() {
        assert!(MissDistance::from_kilometers(f64::NAN).is_err());
        assert!(MissDistance::from_kilometers(f64::INFINITY).is_err());
        assert!(MissDistance::from_kilometers(-1.0).is_err());
        assert!(MissDistance::from_kilometers(0.0).is_ok());
    }

    #[test]
    fn test_miss_distance_overflowing_conversion() {
        assert!(matches!(
            MissDistance::new(1e307, DistanceUnit::AstronomicalUnits),
            Err(NeoError::InvalidMissDistance(_))
        ));
        assert!(MissDistance::new(1e300, DistanceUnit::Kilometers).is_ok());
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let neg = MissDistance::from_kilometers(-0.0).unwrap();
        let pos = MissDistance::from_kilometers(0.0).unwrap();
        assert_eq!(neg, pos);
        assert_eq!(neg.cmp(&pos), Ordering::Equal);
    }

    #[test]
    fn test_miss_distance_units() {
        let one_au = MissDistance::new(1.0, DistanceUnit::AstronomicalUnits).unwrap();
        assert_relative_eq!(one_au.kilometers(), AU);
        assert_relative_eq!(one_au.in_unit(DistanceUnit::LunarDistances), AU / LUNAR_DISTANCE);

        let miles = MissDistance::new(100.0, DistanceUnit::Miles).unwrap();
        assert_relative_eq!(miles.kilometers(), 160.9344, epsilon = 1e-9);
        assert_relative_eq!(miles.in_unit(DistanceUnit::Miles), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_miss_distance_ordering_across_units() {
        let near = MissDistance::new(10.0, DistanceUnit::LunarDistances).unwrap();
        let far = MissDistance::new(0.1, DistanceUnit::AstronomicalUnits).unwrap();
        assert!(near < far);
        assert_eq!(near.cmp(&near), Ordering::Equal);
        assert_eq!(
            near.max(far),
            MissDistance::from_kilometers(0.1 * AU).unwrap()
        );
    }

    #[test]
    fn test_distance_unit_from_str() {
        assert_eq!("AU".parse::<DistanceUnit>(), Ok(DistanceUnit::AstronomicalUnits));
        assert_eq!("lunar".parse::<DistanceUnit>(), Ok(DistanceUnit::LunarDistances));
        assert!("parsec".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn test_catalog_object_display_name() {
        let object = CatalogObject::new("3542519", vec![]);
        assert_eq!(object.display_name(), "3542519");
        assert!(!object.has_approaches());

        let named = object.with_name("(2010 PK9)").with_hazard_flag(true);
        assert_eq!(named.display_name(), "(2010 PK9)");
        assert!(named.is_potentially_hazardous);
    }
}
