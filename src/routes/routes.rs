//! Defines routes for all contributor, park and amenity operations.
//!
//! ## Structure
//! - **Contributor endpoints**
//!   - `POST   /pet_park/contributor` — create contributor
//!   - `GET    /pet_park/contributor` — list contributors
//!   - `GET    /pet_park/contributor/{contributor_id}` — fetch contributor
//!   - `PUT    /pet_park/contributor/{contributor_id}` — update contributor
//!   - `DELETE /pet_park/contributor/{contributor_id}` — delete contributor and its parks
//!
//! - **Park endpoints** (always scoped to the owning contributor)
//!   - `POST   /pet_park/contributor/{contributor_id}/park` — create park
//!   - `GET    /pet_park/contributor/{contributor_id}/park/{pet_park_id}` — fetch park
//!   - `PUT    /pet_park/contributor/{contributor_id}/park/{pet_park_id}` — update park
//!
//! - `GET /pet_park/amenity` — amenity catalogue

use crate::{
    handlers::{
        contributor_handlers::{
            create_contributor, delete_contributor, get_contributor, list_contributors,
            update_contributor,
        },
        health_handlers::{healthz, readyz},
        park_handlers::{create_pet_park, get_pet_park, list_amenities, update_pet_park},
    },
    services::park_service::ParkService,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build and return the router for the pet park API.
///
/// The router carries shared state (`ParkService`) to all handlers.
pub fn routes() -> Router<ParkService> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route(
            "/pet_park/contributor",
            post(create_contributor).get(list_contributors),
        )
        .route(
            "/pet_park/contributor/{contributor_id}",
            get(get_contributor)
                .put(update_contributor)
                .delete(delete_contributor),
        )
        .route(
            "/pet_park/contributor/{contributor_id}/park",
            post(create_pet_park),
        )
        .route(
            "/pet_park/contributor/{contributor_id}/park/{pet_park_id}",
            get(get_pet_park).put(update_pet_park),
        )
        .route("/pet_park/amenity", get(list_amenities))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::park_service::AmenityPolicy;
    use crate::test_utils::test_service;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app() -> Router {
        routes().with_state(test_service(AmenityPolicy::Merge).await)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/healthz", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readyz_checks_sqlite() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/readyz", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"]["sqlite"]["ok"], true);
    }

    #[tokio::test]
    async fn contributor_lifecycle_over_http() {
        let app = app().await;

        let (status, created) = send(
            &app,
            Method::POST,
            "/pet_park/contributor",
            Some(json!({ "contributorName": "Ann", "contributorEmail": "a@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["contributorId"], 1);
        assert_eq!(created["petParks"], json!([]));

        let (status, body) = send(
            &app,
            Method::POST,
            "/pet_park/contributor",
            Some(json!({ "contributorName": "Again", "contributorEmail": "a@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], 409);

        let (status, updated) = send(
            &app,
            Method::PUT,
            "/pet_park/contributor/1",
            Some(json!({ "contributorName": "Ann Smith", "contributorEmail": "a@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["contributorName"], "Ann Smith");

        let (status, all) = send(&app, Method::GET, "/pet_park/contributor", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 1);

        let (status, body) = send(&app, Method::DELETE, "/pet_park/contributor/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Deletion of contributor with ID=1 was successful."
        );

        let (status, body) = send(&app, Method::GET, "/pet_park/contributor/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Contributor with ID=1 was not found");
    }

    #[tokio::test]
    async fn park_ownership_over_http() {
        let app = app().await;
        for (name, email) in [("Ann", "a@x.com"), ("Bob", "b@x.com")] {
            send(
                &app,
                Method::POST,
                "/pet_park/contributor",
                Some(json!({ "contributorName": name, "contributorEmail": email })),
            )
            .await;
        }

        let (status, park) = send(
            &app,
            Method::POST,
            "/pet_park/contributor/1/park",
            Some(json!({
                "parkName": "Riverside Park",
                "country": "US",
                "geolocation": { "latitude": "45.5231", "longitude": "-122.6765" },
                "amenities": ["fenced", "water-fountain"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(park["contributor"]["contributorId"], 1);
        assert_eq!(park["amenities"], json!(["fenced"]));
        assert_eq!(park["geolocation"]["latitude"].to_string(), "45.5231");
        let park_id = park["petParkId"].as_i64().unwrap();

        let (status, fetched) = send(
            &app,
            Method::GET,
            &format!("/pet_park/contributor/1/park/{park_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, park);

        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/pet_park/contributor/2/park/{park_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/pet_park/contributor/1/park/{park_id}"),
            Some(json!({ "parkName": "Riverside Dog Park", "amenities": ["shade"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["petParkId"], park_id);
        assert_eq!(updated["amenities"], json!(["fenced", "shade"]));

        let (status, _) = send(
            &app,
            Method::PUT,
            "/pet_park/contributor/1/park/999",
            Some(json!({ "parkName": "Nowhere" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn numeric_coordinates_round_trip_exactly_over_http() {
        let app = app().await;
        send(
            &app,
            Method::POST,
            "/pet_park/contributor",
            Some(json!({ "contributorName": "Ann", "contributorEmail": "a@x.com" })),
        )
        .await;
        let body: Value = serde_json::from_str(
            r#"{
                "parkName": "Precise Park",
                "geolocation": {
                    "latitude": 45.523123456789012345,
                    "longitude": -122.676482000000000001
                }
            }"#,
        )
        .unwrap();

        let (status, park) =
            send(&app, Method::POST, "/pet_park/contributor/1/park", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(park["geolocation"]["latitude"].is_number());
        assert_eq!(
            park["geolocation"]["latitude"].to_string(),
            "45.523123456789012345"
        );

        let park_id = park["petParkId"].as_i64().unwrap();
        let (_, fetched) = send(
            &app,
            Method::GET,
            &format!("/pet_park/contributor/1/park/{park_id}"),
            None,
        )
        .await;
        assert_eq!(
            fetched["geolocation"]["latitude"].to_string(),
            "45.523123456789012345"
        );
        assert_eq!(
            fetched["geolocation"]["longitude"].to_string(),
            "-122.676482000000000001"
        );
    }

    #[tokio::test]
    async fn amenity_catalogue_over_http() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/pet_park/amenity", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().contains(&json!("leash-free")));
    }
}
