//! Core data models for the pet park registry.
//!
//! Entities map to database rows via `sqlx::FromRow`. Transfer objects
//! (`*Data`, `*Response`) are what the HTTP layer serializes; they carry
//! amenities as plain names rather than entity references.

pub mod amenity;
pub mod contributor;
pub mod geolocation;
pub mod pet_park;
