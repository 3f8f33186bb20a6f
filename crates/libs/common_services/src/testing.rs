//! In-memory stand-ins for the photo service and the mail relay.

use crate::api::contact::error::ContactError;
use crate::api::contact::relay::{ContactEmail, MailRelay};
use crate::photo_client::{ImageVariant, PhotoSource, RemoteError};
use async_trait::async_trait;
use common_types::{AlbumDetail, AlbumSummary, AssetDetail, AssetStub};
use http::StatusCode;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

#[must_use]
pub fn album(id: &str, name: &str, shared: bool) -> AlbumSummary {
    AlbumSummary {
        id: id.to_string(),
        album_name: name.to_string(),
        description: format!("Description of {name}"),
        shared,
        album_thumbnail_asset_id: None,
        assets: vec![],
    }
}

#[must_use]
pub fn asset(id: &str) -> AssetStub {
    AssetStub {
        id: id.to_string(),
        local_date_time: Some("2024-01-01T12:00:00.000Z".to_string()),
        description: None,
    }
}

#[must_use]
pub fn asset_detail(id: &str, description: Option<&str>) -> AssetDetail {
    AssetDetail {
        id: id.to_string(),
        local_date_time: Some("2024-01-01T12:00:00.000Z".to_string()),
        description: description.map(str::to_string),
        exif_info: None,
    }
}

fn status_error(status: StatusCode, message: &str) -> RemoteError {
    RemoteError::Status {
        status,
        message: message.to_string(),
    }
}

/// A photo service holding a fixed data set. Every call is counted.
#[derive(Default)]
pub struct FakePhotoSource {
    albums: Vec<AlbumSummary>,
    details: HashMap<String, AlbumDetail>,
    assets: HashMap<String, AssetDetail>,
    images: HashMap<(String, ImageVariant), Vec<u8>>,
    failing_albums: HashSet<String>,
    failing_assets: HashSet<String>,
    list_fails: bool,
    unconfigured: bool,
    calls: AtomicUsize,
    asset_calls: AtomicUsize,
}

impl FakePhotoSource {
    /// Adds an album to the list; its detail carries `assets`, the list entry does not.
    #[must_use]
    pub fn with_album(mut self, album: AlbumSummary, assets: Vec<AssetStub>) -> Self {
        self.details.insert(
            album.id.clone(),
            AlbumDetail {
                assets,
                ..album.clone()
            },
        );
        self.albums.push(album);
        self
    }

    #[must_use]
    pub fn with_asset(mut self, asset: AssetDetail) -> Self {
        self.assets.insert(asset.id.clone(), asset);
        self
    }

    #[must_use]
    pub fn with_image(mut self, asset_id: &str, variant: ImageVariant, bytes: Vec<u8>) -> Self {
        self.images.insert((asset_id.to_string(), variant), bytes);
        self
    }

    #[must_use]
    pub fn failing_album(mut self, album_id: &str) -> Self {
        self.failing_albums.insert(album_id.to_string());
        self
    }

    #[must_use]
    pub fn failing_asset(mut self, asset_id: &str) -> Self {
        self.failing_assets.insert(asset_id.to_string());
        self
    }

    #[must_use]
    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    /// Behaves like a client with no base URL or API key.
    #[must_use]
    pub fn unconfigured(mut self) -> Self {
        self.unconfigured = true;
        self
    }

    /// Total number of calls made, of any kind.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn asset_calls(&self) -> usize {
        self.asset_calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unconfigured {
            return Err(RemoteError::Configuration);
        }
        Ok(())
    }
}

#[async_trait]
impl PhotoSource for FakePhotoSource {
    async fn list_albums(&self) -> Result<Vec<AlbumSummary>, RemoteError> {
        self.enter()?;
        if self.list_fails {
            return Err(status_error(StatusCode::SERVICE_UNAVAILABLE, "down"));
        }
        Ok(self.albums.clone())
    }

    async fn get_album(&self, album_id: &str) -> Result<AlbumDetail, RemoteError> {
        self.enter()?;
        if self.failing_albums.contains(album_id) {
            return Err(status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"));
        }
        self.details
            .get(album_id)
            .cloned()
            .ok_or_else(|| status_error(StatusCode::NOT_FOUND, "Album not found"))
    }

    async fn get_asset(&self, asset_id: &str) -> Result<Option<AssetDetail>, RemoteError> {
        self.enter()?;
        self.asset_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_assets.contains(asset_id) {
            return Err(status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"));
        }
        Ok(self.assets.get(asset_id).cloned())
    }

    async fn get_image(
        &self,
        asset_id: &str,
        variant: ImageVariant,
    ) -> Result<Vec<u8>, RemoteError> {
        self.enter()?;
        self.images
            .get(&(asset_id.to_string(), variant))
            .cloned()
            .ok_or_else(|| status_error(StatusCode::NOT_FOUND, "Asset not found"))
    }
}

/// A mail relay that records what it would have sent.
#[derive(Default)]
pub struct FakeMailRelay {
    unreachable: bool,
    verifications: AtomicUsize,
    sent: Mutex<Vec<ContactEmail>>,
}

impl FakeMailRelay {
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<ContactEmail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl MailRelay for FakeMailRelay {
    async fn verify(&self) -> Result<(), ContactError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(ContactError::Unreachable);
        }
        Ok(())
    }

    async fn send(&self, email: ContactEmail) -> Result<(), ContactError> {
        if self.unreachable {
            return Err(ContactError::Unreachable);
        }
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(email);
        Ok(())
    }
}
