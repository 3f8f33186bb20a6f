use super::interfaces::{CONTACT_FAILURE_MESSAGE, ContactResponse};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Mail relay is not configured: missing {0}")]
    Configuration(&'static str),

    #[error("Invalid contact submission: {0}")]
    InvalidRequest(String),

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Mail relay did not accept the connection")]
    Unreachable,
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        // The relay's own error stays in the log.
        match &self {
            Self::Smtp(e) => error!(
                "Error sending email: {e} (code: {:?}, permanent: {}, transient: {})",
                e.status(),
                e.is_permanent(),
                e.is_transient()
            ),
            other => error!("Error sending email: {other}"),
        }

        let body = ContactResponse {
            success: false,
            error: Some(CONTACT_FAILURE_MESSAGE.to_string()),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
