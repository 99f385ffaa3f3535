use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every failed API call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Planner(#[from] mealgrid_shared::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Planner(mealgrid_shared::Error::Unknown(e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use mealgrid_shared::Error;

        let (status, error, message) = match self {
            AppError::Planner(Error::Validate(e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                e.to_string(),
            ),
            AppError::Planner(Error::User(msg)) | AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            AppError::Planner(e @ Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "NotFound", e.to_string())
            }
            AppError::Planner(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}
