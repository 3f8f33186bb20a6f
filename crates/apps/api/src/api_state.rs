use app_state::{AppSettings, MailSettings, PortraitSettings};
use axum::extract::FromRef;
use color_eyre::Result;
use common_services::api::albums::gallery::Galleries;
use common_services::api::contact::relay::{MailRelay, SmtpRelay};
use common_services::photo_client::{ImmichClient, PhotoSource};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    pub settings: AppSettings,
    pub photo_source: Arc<dyn PhotoSource>,
    pub mail_relay: Arc<dyn MailRelay>,
    pub galleries: Arc<Galleries>,
}

impl ApiContext {
    /// Context backed by the real photo service and SMTP relay.
    pub fn new(settings: AppSettings, http_client: Client) -> Result<Self> {
        let photo_source = Arc::new(ImmichClient::new(http_client, settings.remote.clone()));
        let mail_relay = Arc::new(SmtpRelay::new(settings.mail.clone()));
        Self::with_services(settings, photo_source, mail_relay)
    }

    pub fn with_services(
        settings: AppSettings,
        photo_source: Arc<dyn PhotoSource>,
        mail_relay: Arc<dyn MailRelay>,
    ) -> Result<Self> {
        let galleries = Arc::new(Galleries::new(&settings.galleries)?);
        Ok(Self {
            settings,
            photo_source,
            mail_relay,
            galleries,
        })
    }
}

// Lets handlers extract only the part of the state they need.
impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}

impl FromRef<ApiContext> for MailSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.mail.clone()
    }
}

impl FromRef<ApiContext> for PortraitSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.portrait.clone()
    }
}

impl FromRef<ApiContext> for Arc<dyn PhotoSource> {
    fn from_ref(state: &ApiContext) -> Self {
        state.photo_source.clone()
    }
}
