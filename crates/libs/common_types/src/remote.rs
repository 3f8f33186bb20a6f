//! Shapes returned by the upstream photo service. Only the fields the site uses are
//! kept; anything else in the response is ignored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetStub {
    pub id: String,
    #[serde(default)]
    pub local_date_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSummary {
    pub id: String,
    #[serde(default)]
    pub album_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub shared: bool,
    #[serde(default, alias = "coverImage")]
    pub album_thumbnail_asset_id: Option<String>,
    #[serde(default)]
    pub assets: Vec<AssetStub>,
}

/// A single album fetched by id. Same shape as the list entry, but the asset list
/// is always populated.
pub type AlbumDetail = AlbumSummary;

impl AlbumSummary {
    /// First asset of the album, used as its cover.
    #[must_use]
    pub fn cover_asset_id(&self) -> Option<&str> {
        self.assets.first().map(|a| a.id.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExifInfo {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetail {
    pub id: String,
    #[serde(default)]
    pub local_date_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exif_info: Option<ExifInfo>,
}

impl AssetDetail {
    /// Top-level description, falling back to the one stored in the EXIF block.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| {
                self.exif_info
                    .as_ref()
                    .and_then(|e| e.description.as_deref())
            })
    }
}
