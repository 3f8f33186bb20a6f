//! Request-scoped records handed to the rendering layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayAlbum {
    pub id: String,
    /// Album name with gallery markers removed.
    pub title: String,
    pub description: String,
    /// Asset id of the first photo, or an empty string for an empty album.
    pub cover_image: String,
    pub photo_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPhoto {
    pub url: String,
    pub thumbnail_url: String,
    pub title: String,
    pub description: String,
}

/// Publishable albums by id, mapped to their cleaned display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AlbumNameIndex(pub BTreeMap<String, String>);

impl AlbumNameIndex {
    pub fn insert(&mut self, album_id: impl Into<String>, name: impl Into<String>) {
        self.0.insert(album_id.into(), name.into());
    }

    #[must_use]
    pub fn get(&self, album_id: &str) -> Option<&str> {
        self.0.get(album_id).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, album_id: &str) -> bool {
        self.0.contains_key(album_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPage {
    /// The album actually shown, after falling back to the default album.
    pub album_id: String,
    pub title: String,
    pub description: String,
    pub photos: Vec<DisplayPhoto>,
    pub album_names_by_id: AlbumNameIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub umami_website_id: Option<String>,
}
