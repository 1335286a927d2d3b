//! Represents a named feature tag that parks can be associated with.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An amenity such as `fenced` or `leash-free`.
///
/// Amenities and parks share a many-to-many relation through the
/// `pet_park_amenity` join table. Neither side owns the other.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq, Eq)]
pub struct Amenity {
    /// Surrogate key.
    pub amenity_id: i64,

    /// Unique amenity name.
    pub amenity: String,
}
