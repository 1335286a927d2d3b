//! Contributor persistence.

use crate::models::contributor::{Contributor, NewContributor};
use sqlx::SqliteConnection;

pub struct ContributorStore;

impl ContributorStore {
    pub async fn insert(
        conn: &mut SqliteConnection,
        new: &NewContributor,
    ) -> sqlx::Result<Contributor> {
        sqlx::query_as::<_, Contributor>(
            "INSERT INTO contributor (contributor_name, contributor_email)
             VALUES (?, ?)
             RETURNING contributor_id, contributor_name, contributor_email",
        )
        .bind(&new.contributor_name)
        .bind(&new.contributor_email)
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn update(
        conn: &mut SqliteConnection,
        contributor: &Contributor,
    ) -> sqlx::Result<Contributor> {
        sqlx::query_as::<_, Contributor>(
            "UPDATE contributor SET contributor_name = ?, contributor_email = ?
             WHERE contributor_id = ?
             RETURNING contributor_id, contributor_name, contributor_email",
        )
        .bind(&contributor.contributor_name)
        .bind(&contributor.contributor_email)
        .bind(contributor.contributor_id)
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        contributor_id: i64,
    ) -> sqlx::Result<Option<Contributor>> {
        sqlx::query_as::<_, Contributor>(
            "SELECT contributor_id, contributor_name, contributor_email
             FROM contributor WHERE contributor_id = ?",
        )
        .bind(contributor_id)
        .fetch_optional(&mut *conn)
        .await
    }

    pub async fn find_by_email(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> sqlx::Result<Option<Contributor>> {
        sqlx::query_as::<_, Contributor>(
            "SELECT contributor_id, contributor_name, contributor_email
             FROM contributor WHERE contributor_email = ?",
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
    }

    /// All contributors in storage order.
    pub async fn find_all(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Contributor>> {
        sqlx::query_as::<_, Contributor>(
            "SELECT contributor_id, contributor_name, contributor_email
             FROM contributor ORDER BY contributor_id",
        )
        .fetch_all(&mut *conn)
        .await
    }

    /// Delete a contributor together with its parks and their amenity links.
    ///
    /// Does not depend on `ON DELETE CASCADE` being enforced.
    /// Returns the number of contributor rows removed (0 or 1).
    pub async fn delete(conn: &mut SqliteConnection, contributor_id: i64) -> sqlx::Result<u64> {
        sqlx::query(
            "DELETE FROM pet_park_amenity WHERE pet_park_id IN
             (SELECT pet_park_id FROM pet_park WHERE contributor_id = ?)",
        )
        .bind(contributor_id)
        .execute(&mut *conn)
        .await?;

        sqlx::query("DELETE FROM pet_park WHERE contributor_id = ?")
            .bind(contributor_id)
            .execute(&mut *conn)
            .await?;

        let result = sqlx::query("DELETE FROM contributor WHERE contributor_id = ?")
            .bind(contributor_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
