//! SQLite-backed storage collaborators.
//!
//! Every operation takes a `&mut SqliteConnection` so the service can run a
//! whole use-case inside one transaction and pass `&mut *tx` down.

pub mod amenity_store;
pub mod contributor_store;
pub mod pet_park_store;

/// Return true if SQLx error indicates a unique constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation()
    )
}
