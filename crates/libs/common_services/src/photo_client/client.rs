use super::{ImageVariant, PhotoSource, RemoteError};
use app_state::RemoteSettings;
use async_trait::async_trait;
use common_types::{AlbumDetail, AlbumSummary, AssetDetail};
use http::{StatusCode, header};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

const API_KEY_HEADER: &str = "x-api-key";

/// Client for an Immich-compatible photo service.
#[derive(Clone)]
pub struct ImmichClient {
    http_client: Client,
    settings: RemoteSettings,
}

impl ImmichClient {
    #[must_use]
    pub const fn new(http_client: Client, settings: RemoteSettings) -> Self {
        Self {
            http_client,
            settings,
        }
    }

    fn api_key(&self) -> Result<&str, RemoteError> {
        self.settings
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(RemoteError::Configuration)
    }

    /// Builds `{base}/api/{segments..}`, percent-encoding every segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let base = self
            .settings
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(RemoteError::Configuration)?;
        let mut url: Url = base.parse()?;
        url.path_segments_mut()
            .map_err(|()| RemoteError::Configuration)?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, segments: &[&str], accept: &str) -> Result<Response, RemoteError> {
        // Both values are checked before anything goes over the wire.
        let api_key = self.api_key()?;
        let url = self.endpoint(segments)?;
        debug!("GET {}", url.path());

        let response = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .header(header::ACCEPT, accept)
            .send()
            .await?;
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, RemoteError> {
        let response = self.get(segments, "application/json").await?;
        let response = error_for_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

async fn error_for_status(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(RemoteError::Status { status, message })
}

#[async_trait]
impl PhotoSource for ImmichClient {
    #[instrument(skip(self), err(Debug))]
    async fn list_albums(&self) -> Result<Vec<AlbumSummary>, RemoteError> {
        self.get_json(&["albums"]).await
    }

    #[instrument(skip(self), err(Debug))]
    async fn get_album(&self, album_id: &str) -> Result<AlbumDetail, RemoteError> {
        self.get_json(&["albums", album_id]).await
    }

    #[instrument(skip(self), err(Debug))]
    async fn get_asset(&self, asset_id: &str) -> Result<Option<AssetDetail>, RemoteError> {
        match self.get_json(&["assets", asset_id]).await {
            Ok(asset) => Ok(Some(asset)),
            Err(RemoteError::Status { status, .. }) if status == StatusCode::NOT_FOUND => Ok(None),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self), err(Debug))]
    async fn get_image(
        &self,
        asset_id: &str,
        variant: ImageVariant,
    ) -> Result<Vec<u8>, RemoteError> {
        let response = self
            .get(&["assets", asset_id, variant.path_segment()], "image/jpeg")
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
