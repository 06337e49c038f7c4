use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::store::StoreError;

/// Failures a handler can surface. Existence checks become 404s with a JSON
/// string body (what the front end expects); store failures stay 5xx and are
/// never converted to a not-found.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not find the product.")]
    ProductNotFound,
    #[error("Could not find user")]
    UserNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ProductNotFound | ApiError::UserNotFound => {
                (StatusCode::NOT_FOUND, Json(self.to_string())).into_response()
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
