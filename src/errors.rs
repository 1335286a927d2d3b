use crate::services::park_service::ParkError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// A lightweight wrapper for general errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "status": self.status.as_u16()
        }));

        (self.status, body).into_response()
    }
}

impl From<ParkError> for AppError {
    fn from(err: ParkError) -> Self {
        let status = match &err {
            ParkError::NotFound { .. } => StatusCode::NOT_FOUND,
            ParkError::DuplicateKey(_) => StatusCode::CONFLICT,
            ParkError::OwnershipMismatch { .. } | ParkError::InvalidField { .. } => {
                StatusCode::BAD_REQUEST
            }
            ParkError::Sqlx(db_err) => {
                tracing::error!("database error: {}", db_err);
                return AppError::internal("internal database error");
            }
        };
        tracing::warn!("request failed: {}", err);
        AppError::new(status, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::park_service::EntityKind;

    #[test]
    fn park_errors_map_to_status_codes() {
        let cases = [
            (
                ParkError::NotFound {
                    kind: EntityKind::PetPark,
                    id: 3,
                },
                StatusCode::NOT_FOUND,
            ),
            (
                ParkError::DuplicateKey("a@x.com".into()),
                StatusCode::CONFLICT,
            ),
            (
                ParkError::OwnershipMismatch {
                    park_id: 3,
                    contributor_id: 2,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                ParkError::Sqlx(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status, expected);
        }
    }

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = AppError::from(ParkError::NotFound {
            kind: EntityKind::PetPark,
            id: 3,
        });

        assert_eq!(err.message, "Pet park with ID=3 was not found");
    }

    #[test]
    fn database_details_stay_out_of_the_response() {
        let err = AppError::from(ParkError::Sqlx(sqlx::Error::PoolTimedOut));

        assert_eq!(err.message, "internal database error");
    }
}
