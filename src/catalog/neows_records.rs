//! Serde mapping of the NeoWs `neo/{id}` payload.
//!
//! Only the fields consumed by the pipeline are declared; everything else in the payload
//! (orbital data, estimated diameters, links, ...) is ignored by serde. NeoWs encodes most
//! numbers as JSON strings (`"kilometers": "5390966.5"`), hence the string-or-number
//! deserializer used for those fields.
use serde::{de, Deserialize, Deserializer};

use crate::{
    constants::{EpochMillis, ObjectId},
    neo::{ApproachRecord, CatalogObject, DistanceUnit, MissDistance},
    neo_errors::NeoError,
};

#[derive(Debug, Deserialize, PartialEq)]
pub struct NeoWsObject {
    pub id: ObjectId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub close_approach_data: Vec<NeoWsApproach>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct NeoWsApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    pub epoch_date_close_approach: EpochMillis,
    #[serde(default)]
    pub relative_velocity: Option<NeoWsVelocity>,
    pub miss_distance: NeoWsMissDistance,
    #[serde(default)]
    pub orbiting_body: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct NeoWsVelocity {
    #[serde(deserialize_with = "string_or_number")]
    pub kilometers_per_second: f64,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct NeoWsMissDistance {
    #[serde(deserialize_with = "string_or_number")]
    pub kilometers: f64,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(v) => Ok(v),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid decimal number: {s:?}"))),
    }
}

impl TryFrom<NeoWsApproach> for ApproachRecord {
    type Error = NeoError;

    fn try_from(raw: NeoWsApproach) -> Result<Self, Self::Error> {
        Ok(ApproachRecord {
            epoch_millis: raw.epoch_date_close_approach,
            miss_distance: MissDistance::new(
                raw.miss_distance.kilometers,
                DistanceUnit::Kilometers,
            )?,
            calendar_date: raw.close_approach_date,
            orbiting_body: raw.orbiting_body,
            relative_velocity_km_s: raw.relative_velocity.map(|v| v.kilometers_per_second),
        })
    }
}

impl TryFrom<NeoWsObject> for CatalogObject {
    type Error = NeoError;

    fn try_from(raw: NeoWsObject) -> Result<Self, Self::Error> {
        let approaches = raw
            .close_approach_data
            .into_iter()
            .map(ApproachRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CatalogObject {
            id: raw.id,
            name: raw.name,
            is_potentially_hazardous: raw.is_potentially_hazardous_asteroid,
            approaches,
        })
    }
}

/// Decode a NeoWs lookup body into a [`CatalogObject`].
///
/// Arguments
/// ---------
/// * `body`: the raw JSON answer of `neo/{id}`
///
/// Return
/// ------
/// * The object, [`NeoError::JsonError`] on malformed JSON or
///   [`NeoError::InvalidMissDistance`] on a negative or non-finite distance
pub fn parse_neows_object(body: &str) -> Result<CatalogObject, NeoError> {
    let raw: NeoWsObject = serde_json::from_str(body)?;
    CatalogObject::try_from(raw)
}
