use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rail_core::CoreError;
use rail_store::StoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::SeatLookup { ref source, .. }
                if matches!(source.downcast_ref::<StoreError>(), Some(StoreError::UnknownTrain(_))) =>
            {
                AppError::NotFoundError(source.to_string())
            }
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}
