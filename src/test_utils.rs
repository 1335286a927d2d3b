//! Shared fixtures for unit tests.

use crate::{
    db,
    models::{contributor::NewContributor, pet_park::PetParkData},
    services::park_service::{AmenityPolicy, ParkService},
};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{collections::BTreeSet, str::FromStr, sync::Arc};

/// A migrated in-memory database.
///
/// The pool holds exactly one connection that never expires, because every
/// new in-memory connection would see an empty database.
pub async fn test_pool() -> Arc<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    db::run_migrations(&pool).await.unwrap();
    Arc::new(pool)
}

pub async fn test_service(policy: AmenityPolicy) -> ParkService {
    ParkService::new(test_pool().await, policy)
}

pub fn new_contributor(name: &str, email: &str) -> NewContributor {
    NewContributor {
        contributor_name: name.to_string(),
        contributor_email: email.to_string(),
    }
}

pub fn park_data(name: &str, amenities: &[&str]) -> PetParkData {
    PetParkData {
        pet_park_id: None,
        park_name: name.to_string(),
        directions: None,
        state_or_province: None,
        country: Some("US".to_string()),
        geolocation: None,
        contributor: None,
        amenities: amenities
            .iter()
            .map(|a| a.to_string())
            .collect::<BTreeSet<_>>(),
    }
}
