//! Represents a registered contributor and its transfer representation.

use crate::models::pet_park::PetParkResponse;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted contributor.
///
/// Owns zero or more parks; deleting a contributor removes all of them.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq, Eq)]
pub struct Contributor {
    /// Surrogate key, generated on insert.
    pub contributor_id: i64,

    /// Display name.
    pub contributor_name: String,

    /// Email address, unique across all contributors.
    pub contributor_email: String,
}

/// Fields needed to insert a contributor that does not exist yet.
#[derive(Clone, Debug)]
pub struct NewContributor {
    pub contributor_name: String,
    pub contributor_email: String,
}

/// Transfer object exchanged with the HTTP layer.
///
/// `contributor_id` is absent when the caller wants a new contributor.
/// `pet_parks` is filled on the way out and ignored on the way in.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributorData {
    #[serde(default)]
    pub contributor_id: Option<i64>,
    pub contributor_name: String,
    pub contributor_email: String,
    #[serde(default)]
    pub pet_parks: Vec<PetParkResponse>,
}

impl ContributorData {
    /// Build the transfer representation of a contributor and its parks.
    pub fn new(contributor: Contributor, pet_parks: Vec<PetParkResponse>) -> Self {
        Self {
            contributor_id: Some(contributor.contributor_id),
            contributor_name: contributor.contributor_name,
            contributor_email: contributor.contributor_email,
            pet_parks,
        }
    }
}

impl From<&ContributorData> for NewContributor {
    fn from(data: &ContributorData) -> Self {
        Self {
            contributor_name: data.contributor_name.clone(),
            contributor_email: data.contributor_email.clone(),
        }
    }
}
