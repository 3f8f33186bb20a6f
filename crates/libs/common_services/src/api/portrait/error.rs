use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum PortraitError {
    #[error("Failed to read portrait: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to transform portrait")]
    Transform(#[from] eyre::Report),
}

impl IntoResponse for PortraitError {
    fn into_response(self) -> Response {
        error!("Error processing portrait: {:?}", self);
        let body = Json(json!({ "error": "Failed to process portrait" }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
