use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use common_services::api::contact::error::ContactError;
use common_services::api::contact::interfaces::{ContactRequest, ContactResponse};
use common_services::api::contact::service::send_contact_message;
use tracing::instrument;

/// Relay a contact form submission to the site owner.
///
/// # Errors
///
/// Returns a `ContactError` if the body is malformed or the mail cannot be sent.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message sent.", body = ContactResponse),
        (status = 500, description = "Failed to send message.", body = ContactResponse),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn post_contact_handler(
    State(context): State<ApiContext>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ContactError> {
    let Json(request) = payload.map_err(|e| ContactError::InvalidRequest(e.body_text()))?;
    let response =
        send_contact_message(context.mail_relay.as_ref(), &context.settings.mail, &request)
            .await?;
    Ok(Json(response))
}
