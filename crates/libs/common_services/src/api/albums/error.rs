use crate::photo_client::RemoteError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("Server configuration error")]
    Configuration,

    #[error("Photo service error: {0}")]
    Remote(RemoteError),

    #[error("Album not found: {0}")]
    NotFound(String),
}

fn log_error(error: &AlbumError) {
    match error {
        AlbumError::Configuration => error!("Album -> photo service URL or API key missing"),
        AlbumError::Remote(e) => warn!("Album -> photo service error: {}", e),
        AlbumError::NotFound(id) => warn!("Album -> not found: {}", id),
    }
}

impl IntoResponse for AlbumError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error".to_string(),
            ),
            Self::Remote(RemoteError::Status { status, .. }) => {
                (status, format!("HTTP error! status: {}", status.as_u16()))
            }
            Self::Remote(_) => (
                StatusCode::BAD_GATEWAY,
                "Could not contact the photo service.".to_string(),
            ),
            Self::NotFound(album_id) => {
                (StatusCode::NOT_FOUND, format!("Album not found: {album_id}"))
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<RemoteError> for AlbumError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Configuration => Self::Configuration,
            other => Self::Remote(other),
        }
    }
}
