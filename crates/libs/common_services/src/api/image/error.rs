use crate::photo_client::RemoteError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Missing photoId parameter")]
    MissingPhotoId,

    #[error("Server configuration error")]
    Configuration,

    /// Upstream answered with a non-success status; passed through as-is.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

fn log_error(error: &ImageError) {
    match error {
        ImageError::MissingPhotoId => warn!("Image -> request without photoId"),
        ImageError::Configuration => error!("Image -> photo service URL or API key missing"),
        ImageError::Upstream { status, message } => {
            error!("Error fetching image: {} {}", status, message);
        }
        ImageError::Internal(e) => error!("Error in image API: {:?}", e),
    }
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::MissingPhotoId => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Configuration => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            Self::Upstream { status, message } => (status, message),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<RemoteError> for ImageError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Configuration => Self::Configuration,
            RemoteError::Status { status, message } => Self::Upstream { status, message },
            other => Self::Internal(eyre::Report::new(other)),
        }
    }
}
