//! Represents a pet park location record.

use crate::models::{amenity::Amenity, contributor::Contributor, geolocation::Geolocation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use std::{collections::BTreeSet, str::FromStr};

/// A persisted park, owned by exactly one contributor.
///
/// Amenity membership lives in the `pet_park_amenity` join table and is
/// loaded separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetPark {
    /// Surrogate key, generated on insert.
    pub pet_park_id: i64,

    /// Owning contributor.
    pub contributor_id: i64,

    pub park_name: String,

    /// Free-text directions to the park entrance.
    pub directions: Option<String>,

    pub state_or_province: Option<String>,

    pub country: Option<String>,

    /// Present only when both coordinates are stored.
    pub geolocation: Option<Geolocation>,
}

/// Fields needed to insert a park that does not exist yet.
#[derive(Clone, Debug)]
pub struct NewPetPark {
    pub contributor_id: i64,
    pub park_name: String,
    pub directions: Option<String>,
    pub state_or_province: Option<String>,
    pub country: Option<String>,
    pub geolocation: Option<Geolocation>,
}

impl PetPark {
    /// Copy the scalar fields of a transfer record onto this park.
    pub fn apply(&mut self, data: &PetParkData) {
        self.park_name = data.park_name.clone();
        self.directions = data.directions.clone();
        self.state_or_province = data.state_or_province.clone();
        self.country = data.country.clone();
        self.geolocation = data.geolocation;
    }
}

impl NewPetPark {
    pub fn from_data(contributor_id: i64, data: &PetParkData) -> Self {
        Self {
            contributor_id,
            park_name: data.park_name.clone(),
            directions: data.directions.clone(),
            state_or_province: data.state_or_province.clone(),
            country: data.country.clone(),
            geolocation: data.geolocation,
        }
    }
}

impl<'r> FromRow<'r, SqliteRow> for PetPark {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let latitude: Option<String> = row.try_get("latitude")?;
        let longitude: Option<String> = row.try_get("longitude")?;
        let geolocation = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Geolocation::new(
                decode_decimal("latitude", &lat)?,
                decode_decimal("longitude", &lon)?,
            )),
            _ => None,
        };

        Ok(Self {
            pet_park_id: row.try_get("pet_park_id")?,
            contributor_id: row.try_get("contributor_id")?,
            park_name: row.try_get("park_name")?,
            directions: row.try_get("directions")?,
            state_or_province: row.try_get("state_or_province")?,
            country: row.try_get("country")?,
            geolocation,
        })
    }
}

fn decode_decimal(column: &str, raw: &str) -> sqlx::Result<Decimal> {
    Decimal::from_str(raw).map_err(|err| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(err),
    })
}

/// Owner summary embedded in a park transfer object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParkContributor {
    pub contributor_id: i64,
    pub contributor_name: String,
    pub contributor_email: String,
}

impl From<Contributor> for ParkContributor {
    fn from(contributor: Contributor) -> Self {
        Self {
            contributor_id: contributor.contributor_id,
            contributor_name: contributor.contributor_name,
            contributor_email: contributor.contributor_email,
        }
    }
}

/// Transfer object for saving and retrieving a single park.
///
/// On input `amenities` is the set of requested amenity names and
/// `contributor` is ignored. On output both reflect what was persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetParkData {
    #[serde(default)]
    pub pet_park_id: Option<i64>,
    pub park_name: String,
    #[serde(default)]
    pub directions: Option<String>,
    #[serde(default)]
    pub state_or_province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub geolocation: Option<Geolocation>,
    #[serde(default, skip_deserializing)]
    pub contributor: Option<ParkContributor>,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
}

impl PetParkData {
    pub fn new(park: PetPark, owner: Contributor, amenities: Vec<Amenity>) -> Self {
        Self {
            pet_park_id: Some(park.pet_park_id),
            park_name: park.park_name,
            directions: park.directions,
            state_or_province: park.state_or_province,
            country: park.country,
            geolocation: park.geolocation,
            contributor: Some(owner.into()),
            amenities: amenity_names(amenities),
        }
    }
}

/// A park as listed under its contributor, without the owner summary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetParkResponse {
    pub pet_park_id: i64,
    pub park_name: String,
    pub directions: Option<String>,
    pub state_or_province: Option<String>,
    pub country: Option<String>,
    pub geolocation: Option<Geolocation>,
    pub amenities: BTreeSet<String>,
}

impl PetParkResponse {
    pub fn new(park: PetPark, amenities: Vec<Amenity>) -> Self {
        Self {
            pet_park_id: park.pet_park_id,
            park_name: park.park_name,
            directions: park.directions,
            state_or_province: park.state_or_province,
            country: park.country,
            geolocation: park.geolocation,
            amenities: amenity_names(amenities),
        }
    }
}

fn amenity_names(amenities: Vec<Amenity>) -> BTreeSet<String> {
    amenities.into_iter().map(|a| a.amenity).collect()
}
