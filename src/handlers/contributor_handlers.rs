//! HTTP handlers for contributor operations.
//! Deserialize transfer objects and delegate everything else to `ParkService`.

use crate::{
    errors::AppError, models::contributor::ContributorData, services::park_service::ParkService,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

/// POST `/pet_park/contributor` — register a new contributor.
pub async fn create_contributor(
    State(service): State<ParkService>,
    Json(mut data): Json<ContributorData>,
) -> Result<impl IntoResponse, AppError> {
    data.contributor_id = None;
    tracing::info!("Creating contributor {}", data.contributor_email);
    let saved = service.save_contributor(data).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT `/pet_park/contributor/{contributor_id}` — update an existing contributor.
pub async fn update_contributor(
    State(service): State<ParkService>,
    Path(contributor_id): Path<i64>,
    Json(mut data): Json<ContributorData>,
) -> Result<Json<ContributorData>, AppError> {
    data.contributor_id = Some(contributor_id);
    tracing::info!("Updating contributor {}", contributor_id);
    Ok(Json(service.save_contributor(data).await?))
}

/// GET `/pet_park/contributor`
pub async fn list_contributors(
    State(service): State<ParkService>,
) -> Result<Json<Vec<ContributorData>>, AppError> {
    Ok(Json(service.retrieve_all_contributors().await?))
}

/// GET `/pet_park/contributor/{contributor_id}`
pub async fn get_contributor(
    State(service): State<ParkService>,
    Path(contributor_id): Path<i64>,
) -> Result<Json<ContributorData>, AppError> {
    Ok(Json(service.retrieve_contributor_by_id(contributor_id).await?))
}

/// DELETE `/pet_park/contributor/{contributor_id}` — removes the contributor and its parks.
pub async fn delete_contributor(
    State(service): State<ParkService>,
    Path(contributor_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Deleting contributor {}", contributor_id);
    service.delete_contributor_by_id(contributor_id).await?;
    Ok(Json(json!({
        "message": format!("Deletion of contributor with ID={} was successful.", contributor_id)
    })))
}
