use super::error::ContactError;
use app_state::MailSettings;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, instrument};

/// A fully composed email, independent of the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl ContactEmail {
    pub fn to_message(&self) -> Result<Message, ContactError> {
        let from: Mailbox = self.from.parse()?;
        let to: Mailbox = self.to.parse()?;
        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(&self.subject)
            .multipart(MultiPart::alternative_plain_html(
                self.text.clone(),
                self.html.clone(),
            ))?;
        Ok(message)
    }
}

#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Checks that the relay is reachable and accepts the configured credentials.
    async fn verify(&self) -> Result<(), ContactError>;

    async fn send(&self, email: ContactEmail) -> Result<(), ContactError>;
}

/// Submission port used when `mail.port` is not set.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP relay with opportunistic STARTTLS, built from settings on every use.
#[derive(Clone)]
pub struct SmtpRelay {
    settings: MailSettings,
}

impl SmtpRelay {
    #[must_use]
    pub const fn new(settings: MailSettings) -> Self {
        Self { settings }
    }

    fn port(&self) -> u16 {
        self.settings.port.unwrap_or(DEFAULT_SMTP_PORT)
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, ContactError> {
        let host = required(self.settings.host.as_deref(), "host")?;
        let port = self.port();
        let user = required(self.settings.user.as_deref(), "user")?;
        let password = required(self.settings.password.as_deref(), "password")?;

        let tls = TlsParameters::new(host.to_string())?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .tls(Tls::Opportunistic(tls))
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .build();
        Ok(transport)
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ContactError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ContactError::Configuration(name))
}

#[async_trait]
impl MailRelay for SmtpRelay {
    #[instrument(skip(self), err(Debug))]
    async fn verify(&self) -> Result<(), ContactError> {
        let transport = self.transport()?;
        if transport.test_connection().await? {
            Ok(())
        } else {
            Err(ContactError::Unreachable)
        }
    }

    #[instrument(skip(self, email), fields(subject = %email.subject), err(Debug))]
    async fn send(&self, email: ContactEmail) -> Result<(), ContactError> {
        let message = email.to_message()?;
        let transport = self.transport()?;
        let response = transport.send(message).await?;
        debug!("Mail relay accepted message: {:?}", response.code());
        Ok(())
    }
}
