//! Pet park persistence. Coordinates are written as decimal text.

use crate::models::{
    geolocation::Geolocation,
    pet_park::{NewPetPark, PetPark},
};
use sqlx::SqliteConnection;

const PET_PARK_COLUMNS: &str = "pet_park_id, contributor_id, park_name, directions, \
     state_or_province, country, latitude, longitude";

pub struct PetParkStore;

impl PetParkStore {
    pub async fn insert(conn: &mut SqliteConnection, new: &NewPetPark) -> sqlx::Result<PetPark> {
        let (latitude, longitude) = coordinates(new.geolocation.as_ref());
        sqlx::query_as::<_, PetPark>(&format!(
            "INSERT INTO pet_park (
                contributor_id, park_name, directions, state_or_province, country,
                latitude, longitude
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {PET_PARK_COLUMNS}"
        ))
        .bind(new.contributor_id)
        .bind(&new.park_name)
        .bind(&new.directions)
        .bind(&new.state_or_province)
        .bind(&new.country)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&mut *conn)
        .await
    }

    /// Overwrite every column of an existing park, including its owner.
    pub async fn update(conn: &mut SqliteConnection, park: &PetPark) -> sqlx::Result<PetPark> {
        let (latitude, longitude) = coordinates(park.geolocation.as_ref());
        sqlx::query_as::<_, PetPark>(&format!(
            "UPDATE pet_park SET
                contributor_id = ?, park_name = ?, directions = ?, state_or_province = ?,
                country = ?, latitude = ?, longitude = ?
            WHERE pet_park_id = ?
            RETURNING {PET_PARK_COLUMNS}"
        ))
        .bind(park.contributor_id)
        .bind(&park.park_name)
        .bind(&park.directions)
        .bind(&park.state_or_province)
        .bind(&park.country)
        .bind(latitude)
        .bind(longitude)
        .bind(park.pet_park_id)
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        pet_park_id: i64,
    ) -> sqlx::Result<Option<PetPark>> {
        sqlx::query_as::<_, PetPark>(&format!(
            "SELECT {PET_PARK_COLUMNS} FROM pet_park WHERE pet_park_id = ?"
        ))
        .bind(pet_park_id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Parks owned by a contributor, oldest first.
    pub async fn find_by_contributor(
        conn: &mut SqliteConnection,
        contributor_id: i64,
    ) -> sqlx::Result<Vec<PetPark>> {
        sqlx::query_as::<_, PetPark>(&format!(
            "SELECT {PET_PARK_COLUMNS} FROM pet_park
             WHERE contributor_id = ? ORDER BY pet_park_id"
        ))
        .bind(contributor_id)
        .fetch_all(&mut *conn)
        .await
    }
}

fn coordinates(geolocation: Option<&Geolocation>) -> (Option<String>, Option<String>) {
    match geolocation {
        Some(geo) => (
            Some(geo.latitude.to_string()),
            Some(geo.longitude.to_string()),
        ),
        None => (None, None),
    }
}
