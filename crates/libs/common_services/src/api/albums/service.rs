use super::error::AlbumError;
use super::gallery::{Galleries, Gallery};
use crate::photo_client::PhotoSource;
use crate::utils::thumbnail_url;
use common_types::{AlbumDetail, AlbumNameIndex, AlbumSummary, DisplayAlbum};
use futures_util::future::join_all;
use tracing::{info, instrument, warn};

/// Lists the albums published under `gallery` as display records.
///
/// The album list itself must load; a failing per-album detail fetch only empties
/// that album's photos.
#[instrument(skip(source, galleries, gallery), fields(marker = gallery.marker()))]
pub async fn build_gallery_albums(
    source: &dyn PhotoSource,
    galleries: &Galleries,
    gallery: &Gallery,
) -> Result<Vec<DisplayAlbum>, AlbumError> {
    let albums = source.list_albums().await?;
    let published: Vec<AlbumSummary> = albums
        .into_iter()
        .filter(|album| gallery.publishes(album))
        .collect();

    let details = join_all(
        published
            .iter()
            .map(|album| album_detail_or_empty(source, album)),
    )
    .await;

    let display_albums: Vec<DisplayAlbum> = published
        .iter()
        .zip(details)
        .map(|(album, detail)| to_display_album(galleries, album, &detail))
        .collect();

    info!("Built {} gallery albums", display_albums.len());
    Ok(display_albums)
}

async fn album_detail_or_empty(source: &dyn PhotoSource, album: &AlbumSummary) -> AlbumDetail {
    match source.get_album(&album.id).await {
        Ok(detail) => detail,
        Err(e) => {
            warn!("Could not load album {} for listing: {}", album.id, e);
            AlbumDetail {
                assets: vec![],
                ..album.clone()
            }
        }
    }
}

/// Shapes one album: cleaned title, first asset as cover, thumbnail URLs in asset order.
#[must_use]
pub fn to_display_album(
    galleries: &Galleries,
    album: &AlbumSummary,
    detail: &AlbumDetail,
) -> DisplayAlbum {
    DisplayAlbum {
        id: album.id.clone(),
        title: galleries.clean_title(&album.album_name),
        description: album.description.clone(),
        cover_image: detail.cover_asset_id().unwrap_or_default().to_string(),
        photo_urls: detail
            .assets
            .iter()
            .map(|asset| thumbnail_url(&asset.id))
            .collect(),
    }
}

/// Maps every album publishable under any gallery to its cleaned name.
#[instrument(skip(source, galleries))]
pub async fn build_album_name_index(
    source: &dyn PhotoSource,
    galleries: &Galleries,
) -> Result<AlbumNameIndex, AlbumError> {
    let albums = source.list_albums().await?;
    Ok(album_name_index(galleries, &albums))
}

#[must_use]
pub fn album_name_index(galleries: &Galleries, albums: &[AlbumSummary]) -> AlbumNameIndex {
    let mut index = AlbumNameIndex::default();
    for album in albums.iter().filter(|a| galleries.is_publishable(a)) {
        index.insert(&album.id, galleries.clean_title(&album.album_name));
    }
    index
}
