use super::error::ContactError;
use super::interfaces::{ContactRequest, ContactResponse};
use super::relay::{ContactEmail, MailRelay};
use app_state::MailSettings;
use tracing::{info, instrument};

/// Composes the notification for one contact form submission. Fields are embedded
/// verbatim; line breaks in the message become `<br>` in the HTML part.
#[must_use]
pub fn compose_contact_email(settings: &MailSettings, request: &ContactRequest) -> ContactEmail {
    let ContactRequest {
        name,
        email,
        message,
    } = request;

    let text = format!("\nName: {name}\nEmail: {email}\nMessage: {message}\n");
    let html = format!(
        "\n<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n",
        message.replace('\n', "<br>")
    );

    ContactEmail {
        from: settings.from.clone(),
        to: settings.to.clone(),
        subject: format!("New Contact Form Submission from {name}"),
        text,
        html,
    }
}

/// Verifies the relay, then sends the submission. Nothing is sent when the
/// relay cannot be verified.
#[instrument(skip(relay, settings, request), fields(name = %request.name))]
pub async fn send_contact_message(
    relay: &dyn MailRelay,
    settings: &MailSettings,
    request: &ContactRequest,
) -> Result<ContactResponse, ContactError> {
    let email = compose_contact_email(settings, request);
    relay.verify().await?;
    relay.send(email).await?;
    info!("Contact message from {} sent", request.name);
    Ok(ContactResponse::ok())
}
