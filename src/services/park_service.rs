//! src/services/park_service.rs
//!
//! ParkService — contributor and pet park use-cases backed by SQLite. Each
//! public operation runs inside one transaction: the stores receive
//! `&mut *tx`, and an early return drops the transaction, rolling it back.
//! Associations are written as join rows; nothing keeps in-memory
//! back-references between entities.

use crate::{
    models::{
        contributor::{Contributor, ContributorData, NewContributor},
        pet_park::{NewPetPark, PetPark, PetParkData, PetParkResponse},
    },
    stores::{
        amenity_store::AmenityStore, contributor_store::ContributorStore, is_unique_violation,
        pet_park_store::PetParkStore,
    },
};
use clap::ValueEnum;
use rust_decimal::Decimal;
use sqlx::{SqliteConnection, SqlitePool};
use std::{fmt, sync::Arc};
use thiserror::Error;
use tracing::{debug, info};

/// The kind of record an identifier lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Contributor,
    PetPark,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Contributor => write!(f, "Contributor"),
            EntityKind::PetPark => write!(f, "Pet park"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParkError {
    #[error("{kind} with ID={id} was not found")]
    NotFound { kind: EntityKind, id: i64 },
    #[error("contributor with email `{0}` already exists")]
    DuplicateKey(String),
    #[error("pet park with ID={park_id} is not owned by contributor with ID={contributor_id}")]
    OwnershipMismatch { park_id: i64, contributor_id: i64 },
    #[error("`{field}` {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type ParkResult<T> = Result<T, ParkError>;

/// How a park save treats amenities that the incoming record omits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AmenityPolicy {
    /// Add the incoming amenities and keep every existing association.
    #[default]
    Merge,
    /// Make the park's amenities exactly the incoming (resolved) set.
    Replace,
}

/// Outcome of resolving a record by an optional identifier.
#[derive(Debug, PartialEq, Eq)]
pub enum Upsert<T> {
    /// No identifier was given; a new record must be inserted.
    Insert,
    /// The identifier matched this persisted record.
    Update(T),
}

#[derive(Clone)]
pub struct ParkService {
    /// Shared SQLite connection pool.
    pub db: Arc<SqlitePool>,

    pub amenity_policy: AmenityPolicy,
}

impl ParkService {
    pub fn new(db: Arc<SqlitePool>, amenity_policy: AmenityPolicy) -> Self {
        Self { db, amenity_policy }
    }

    /// Create a contributor (no id) or update an existing one (id given).
    ///
    /// Creating with an email that is already registered fails with
    /// `DuplicateKey`; so does an update that collides with another
    /// contributor's email.
    pub async fn save_contributor(
        &self,
        mut data: ContributorData,
    ) -> ParkResult<ContributorData> {
        data.contributor_name = data.contributor_name.trim().to_string();
        data.contributor_email = data.contributor_email.trim().to_string();
        validate_contributor(&data)?;
        let mut tx = self.db.begin().await?;

        let target =
            find_or_create_contributor(&mut tx, data.contributor_id, &data.contributor_email)
                .await?;
        let saved = match target {
            Upsert::Insert => ContributorStore::insert(&mut tx, &NewContributor::from(&data)).await,
            Upsert::Update(mut existing) => {
                existing.contributor_name = data.contributor_name.clone();
                existing.contributor_email = data.contributor_email.clone();
                ContributorStore::update(&mut tx, &existing).await
            }
        }
        .map_err(|err| email_conflict(err, &data.contributor_email))?;

        let pet_parks = load_pet_parks(&mut tx, saved.contributor_id).await?;
        tx.commit().await?;

        info!(contributor_id = saved.contributor_id, "saved contributor");
        Ok(ContributorData::new(saved, pet_parks))
    }

    pub async fn retrieve_all_contributors(&self) -> ParkResult<Vec<ContributorData>> {
        let mut tx = self.db.begin().await?;

        let contributors = ContributorStore::find_all(&mut tx).await?;
        let mut response = Vec::with_capacity(contributors.len());
        for contributor in contributors {
            let pet_parks = load_pet_parks(&mut tx, contributor.contributor_id).await?;
            response.push(ContributorData::new(contributor, pet_parks));
        }

        tx.commit().await?;
        debug!("retrieved {} contributors", response.len());
        Ok(response)
    }

    pub async fn retrieve_contributor_by_id(
        &self,
        contributor_id: i64,
    ) -> ParkResult<ContributorData> {
        let mut tx = self.db.begin().await?;

        let contributor = find_contributor_by_id(&mut tx, contributor_id).await?;
        let pet_parks = load_pet_parks(&mut tx, contributor_id).await?;

        tx.commit().await?;
        Ok(ContributorData::new(contributor, pet_parks))
    }

    /// Delete a contributor along with every park it owns.
    pub async fn delete_contributor_by_id(&self, contributor_id: i64) -> ParkResult<()> {
        let mut tx = self.db.begin().await?;

        find_contributor_by_id(&mut tx, contributor_id).await?;
        ContributorStore::delete(&mut tx, contributor_id).await?;

        tx.commit().await?;
        info!(contributor_id, "deleted contributor");
        Ok(())
    }

    /// Create or update a park owned by `contributor_id`.
    ///
    /// Amenity names that match nothing are dropped. Omitted amenities are
    /// kept or detached according to the configured `AmenityPolicy`.
    pub async fn save_pet_park(
        &self,
        contributor_id: i64,
        data: PetParkData,
    ) -> ParkResult<PetParkData> {
        validate_pet_park(&data)?;
        let mut tx = self.db.begin().await?;

        let contributor = find_contributor_by_id(&mut tx, contributor_id).await?;
        let amenities = AmenityStore::find_all_matching(&mut tx, &data.amenities).await?;
        if amenities.len() < data.amenities.len() {
            debug!(
                requested = data.amenities.len(),
                matched = amenities.len(),
                "ignoring unknown amenities"
            );
        }

        let saved = match find_or_create_pet_park(&mut tx, data.pet_park_id).await? {
            Upsert::Insert => {
                let new = NewPetPark::from_data(contributor.contributor_id, &data);
                PetParkStore::insert(&mut tx, &new).await?
            }
            Upsert::Update(mut park) => {
                park.apply(&data);
                park.contributor_id = contributor.contributor_id;
                PetParkStore::update(&mut tx, &park).await?
            }
        };

        if self.amenity_policy == AmenityPolicy::Replace {
            AmenityStore::unlink_all(&mut tx, saved.pet_park_id).await?;
        }
        for amenity in &amenities {
            AmenityStore::link(&mut tx, saved.pet_park_id, amenity.amenity_id).await?;
        }
        let linked = AmenityStore::find_by_pet_park(&mut tx, saved.pet_park_id).await?;

        tx.commit().await?;
        info!(
            contributor_id,
            pet_park_id = saved.pet_park_id,
            "saved pet park"
        );
        Ok(PetParkData::new(saved, contributor, linked))
    }

    /// Fetch a park, checking that `contributor_id` owns it.
    pub async fn retrieve_pet_park_by_id(
        &self,
        contributor_id: i64,
        pet_park_id: i64,
    ) -> ParkResult<PetParkData> {
        let mut tx = self.db.begin().await?;

        let contributor = find_contributor_by_id(&mut tx, contributor_id).await?;
        let park = find_pet_park_by_id(&mut tx, pet_park_id).await?;
        if park.contributor_id != contributor_id {
            return Err(ParkError::OwnershipMismatch {
                park_id: pet_park_id,
                contributor_id,
            });
        }
        let amenities = AmenityStore::find_by_pet_park(&mut tx, pet_park_id).await?;

        tx.commit().await?;
        Ok(PetParkData::new(park, contributor, amenities))
    }

    /// Names of every known amenity, sorted.
    pub async fn retrieve_all_amenities(&self) -> ParkResult<Vec<String>> {
        let mut conn = self.db.acquire().await?;
        let amenities = AmenityStore::find_all(&mut conn).await?;
        Ok(amenities.into_iter().map(|a| a.amenity).collect())
    }
}

/// Resolve the contributor a save targets.
///
/// Without an id the email must be unused, and the result is `Insert`. A
/// record found by email is never returned as the update target.
async fn find_or_create_contributor(
    conn: &mut SqliteConnection,
    contributor_id: Option<i64>,
    contributor_email: &str,
) -> ParkResult<Upsert<Contributor>> {
    match contributor_id {
        None => {
            if ContributorStore::find_by_email(conn, contributor_email)
                .await?
                .is_some()
            {
                return Err(ParkError::DuplicateKey(contributor_email.to_string()));
            }
            Ok(Upsert::Insert)
        }
        Some(id) => find_contributor_by_id(conn, id).await.map(Upsert::Update),
    }
}

/// Same contract as contributors, minus the uniqueness check.
async fn find_or_create_pet_park(
    conn: &mut SqliteConnection,
    pet_park_id: Option<i64>,
) -> ParkResult<Upsert<PetPark>> {
    match pet_park_id {
        None => Ok(Upsert::Insert),
        Some(id) => find_pet_park_by_id(conn, id).await.map(Upsert::Update),
    }
}

async fn find_contributor_by_id(
    conn: &mut SqliteConnection,
    contributor_id: i64,
) -> ParkResult<Contributor> {
    ContributorStore::find_by_id(conn, contributor_id)
        .await?
        .ok_or(ParkError::NotFound {
            kind: EntityKind::Contributor,
            id: contributor_id,
        })
}

async fn find_pet_park_by_id(
    conn: &mut SqliteConnection,
    pet_park_id: i64,
) -> ParkResult<PetPark> {
    PetParkStore::find_by_id(conn, pet_park_id)
        .await?
        .ok_or(ParkError::NotFound {
            kind: EntityKind::PetPark,
            id: pet_park_id,
        })
}

async fn load_pet_parks(
    conn: &mut SqliteConnection,
    contributor_id: i64,
) -> ParkResult<Vec<PetParkResponse>> {
    let parks = PetParkStore::find_by_contributor(conn, contributor_id).await?;
    let mut response = Vec::with_capacity(parks.len());
    for park in parks {
        let amenities = AmenityStore::find_by_pet_park(conn, park.pet_park_id).await?;
        response.push(PetParkResponse::new(park, amenities));
    }
    Ok(response)
}

fn email_conflict(err: sqlx::Error, email: &str) -> ParkError {
    if is_unique_violation(&err) {
        ParkError::DuplicateKey(email.to_string())
    } else {
        ParkError::Sqlx(err)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ParkError {
    ParkError::InvalidField {
        field,
        reason: reason.into(),
    }
}

fn validate_contributor(data: &ContributorData) -> ParkResult<()> {
    if data.contributor_name.trim().is_empty() {
        return Err(invalid("contributorName", "must not be blank"));
    }
    let email = data.contributor_email.as_str();
    if email.is_empty() || !email.contains('@') {
        return Err(invalid("contributorEmail", "must be an email address"));
    }
    Ok(())
}

fn validate_pet_park(data: &PetParkData) -> ParkResult<()> {
    if data.park_name.trim().is_empty() {
        return Err(invalid("parkName", "must not be blank"));
    }
    if let Some(geo) = data.geolocation {
        if geo.latitude.abs() > Decimal::from(90) {
            return Err(invalid("latitude", "must be between -90 and 90"));
        }
        if geo.longitude.abs() > Decimal::from(180) {
            return Err(invalid("longitude", "must be between -180 and 180"));
        }
    }
    Ok(())
}
