use super::RemoteError;
use async_trait::async_trait;
use common_types::{AlbumDetail, AlbumSummary, AssetDetail};

/// Which rendition of an asset to fetch from the photo service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageVariant {
    Thumbnail,
    Original,
}

impl ImageVariant {
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Original => "original",
        }
    }
}

/// Read access to albums and assets held by the upstream photo service.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    async fn list_albums(&self) -> Result<Vec<AlbumSummary>, RemoteError>;

    async fn get_album(&self, album_id: &str) -> Result<AlbumDetail, RemoteError>;

    /// `Ok(None)` when the service does not know the asset.
    async fn get_asset(&self, asset_id: &str) -> Result<Option<AssetDetail>, RemoteError>;

    async fn get_image(
        &self,
        asset_id: &str,
        variant: ImageVariant,
    ) -> Result<Vec<u8>, RemoteError>;
}
