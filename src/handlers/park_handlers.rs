//! HTTP handlers for pet parks and the amenity catalogue.

use crate::{
    errors::AppError, models::pet_park::PetParkData, services::park_service::ParkService,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// POST `/pet_park/contributor/{contributor_id}/park`
pub async fn create_pet_park(
    State(service): State<ParkService>,
    Path(contributor_id): Path<i64>,
    Json(mut data): Json<PetParkData>,
) -> Result<impl IntoResponse, AppError> {
    data.pet_park_id = None;
    tracing::info!("Creating pet park for contributor {}", contributor_id);
    let saved = service.save_pet_park(contributor_id, data).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT `/pet_park/contributor/{contributor_id}/park/{pet_park_id}`
pub async fn update_pet_park(
    State(service): State<ParkService>,
    Path((contributor_id, pet_park_id)): Path<(i64, i64)>,
    Json(mut data): Json<PetParkData>,
) -> Result<Json<PetParkData>, AppError> {
    data.pet_park_id = Some(pet_park_id);
    tracing::info!(
        "Updating pet park {} for contributor {}",
        pet_park_id,
        contributor_id
    );
    Ok(Json(service.save_pet_park(contributor_id, data).await?))
}

/// GET `/pet_park/contributor/{contributor_id}/park/{pet_park_id}`
pub async fn get_pet_park(
    State(service): State<ParkService>,
    Path((contributor_id, pet_park_id)): Path<(i64, i64)>,
) -> Result<Json<PetParkData>, AppError> {
    Ok(Json(
        service
            .retrieve_pet_park_by_id(contributor_id, pet_park_id)
            .await?,
    ))
}

/// GET `/pet_park/amenity` — names accepted in a park's `amenities` list.
pub async fn list_amenities(
    State(service): State<ParkService>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(service.retrieve_all_amenities().await?))
}
