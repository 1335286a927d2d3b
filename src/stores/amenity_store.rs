//! Amenity lookups and park/amenity join rows.

use crate::models::amenity::Amenity;
use sqlx::{QueryBuilder, SqliteConnection, sqlite::Sqlite};
use std::collections::BTreeSet;

pub struct AmenityStore;

impl AmenityStore {
    /// Resolve amenity names to stored amenities.
    ///
    /// Names with no stored amenity are simply absent from the result.
    pub async fn find_all_matching(
        conn: &mut SqliteConnection,
        names: &BTreeSet<String>,
    ) -> sqlx::Result<Vec<Amenity>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder =
            QueryBuilder::<Sqlite>::new("SELECT amenity_id, amenity FROM amenity WHERE amenity IN (");
        let mut separated = builder.separated(", ");
        for name in names {
            separated.push_bind(name);
        }
        separated.push_unseparated(") ORDER BY amenity");

        builder.build_query_as().fetch_all(&mut *conn).await
    }

    pub async fn find_all(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Amenity>> {
        sqlx::query_as::<_, Amenity>("SELECT amenity_id, amenity FROM amenity ORDER BY amenity")
            .fetch_all(&mut *conn)
            .await
    }

    /// Amenities currently associated with a park.
    pub async fn find_by_pet_park(
        conn: &mut SqliteConnection,
        pet_park_id: i64,
    ) -> sqlx::Result<Vec<Amenity>> {
        sqlx::query_as::<_, Amenity>(
            "SELECT a.amenity_id, a.amenity
             FROM amenity a
             JOIN pet_park_amenity pa ON pa.amenity_id = a.amenity_id
             WHERE pa.pet_park_id = ?
             ORDER BY a.amenity",
        )
        .bind(pet_park_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Associate a park with an amenity. Linking twice is a no-op.
    pub async fn link(
        conn: &mut SqliteConnection,
        pet_park_id: i64,
        amenity_id: i64,
    ) -> sqlx::Result<()> {
        sqlx::query("INSERT OR IGNORE INTO pet_park_amenity (pet_park_id, amenity_id) VALUES (?, ?)")
            .bind(pet_park_id)
            .bind(amenity_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Detach every amenity from a park. The amenities themselves remain.
    pub async fn unlink_all(conn: &mut SqliteConnection, pet_park_id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM pet_park_amenity WHERE pet_park_id = ?")
            .bind(pet_park_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
