use super::interfaces::{AlbumPageRequest, NO_DATE, NO_DESCRIPTION, PhotoSourcing};
use crate::api::albums::error::AlbumError;
use crate::api::albums::gallery::Galleries;
use crate::api::albums::service::album_name_index;
use crate::photo_client::PhotoSource;
use crate::utils::{first_non_empty, thumbnail_url, web_url};
use common_types::{AlbumPage, AssetDetail, AssetStub, DisplayPhoto};
use futures_util::future::join_all;
use tracing::{debug, info, instrument, warn};

/// Maps one asset to its display record. Title and description fall back to the
/// capture time and then to fixed placeholders, so neither is ever empty.
#[must_use]
pub fn to_display_photo(
    asset_id: &str,
    local_date_time: Option<&str>,
    description: Option<&str>,
) -> DisplayPhoto {
    DisplayPhoto {
        url: web_url(asset_id),
        thumbnail_url: thumbnail_url(asset_id),
        title: first_non_empty([local_date_time])
            .unwrap_or(NO_DATE)
            .to_string(),
        description: first_non_empty([description, local_date_time])
            .unwrap_or(NO_DESCRIPTION)
            .to_string(),
    }
}

/// Display record from the asset stub embedded in an album.
#[must_use]
pub fn photo_from_stub(asset: &AssetStub) -> DisplayPhoto {
    to_display_photo(
        &asset.id,
        asset.local_date_time.as_deref(),
        asset.description.as_deref(),
    )
}

/// Display record from full asset detail; the EXIF description counts too.
#[must_use]
pub fn photo_from_detail(asset: &AssetDetail) -> DisplayPhoto {
    to_display_photo(
        &asset.id,
        asset.local_date_time.as_deref(),
        asset.description(),
    )
}

/// Display photos of one album, in album order.
///
/// The album itself must load. With [`PhotoSourcing::FetchDetails`] every asset is
/// fetched concurrently and assets that fail to load are left out.
#[instrument(skip(source))]
pub async fn build_photo_list(
    source: &dyn PhotoSource,
    album_id: &str,
    sourcing: PhotoSourcing,
) -> Result<Vec<DisplayPhoto>, AlbumError> {
    let album = source.get_album(album_id).await?;
    let photos = photos_for_assets(source, &album.assets, sourcing).await;
    debug!("Album {} has {} photos", album_id, photos.len());
    Ok(photos)
}

async fn photos_for_assets(
    source: &dyn PhotoSource,
    assets: &[AssetStub],
    sourcing: PhotoSourcing,
) -> Vec<DisplayPhoto> {
    match sourcing {
        PhotoSourcing::Inline => assets.iter().map(photo_from_stub).collect(),
        PhotoSourcing::FetchDetails => {
            let details = join_all(assets.iter().map(|a| source.get_asset(&a.id))).await;
            assets
                .iter()
                .zip(details)
                .filter_map(|(stub, detail)| match detail {
                    Ok(Some(detail)) => Some(photo_from_detail(&detail)),
                    Ok(None) => {
                        warn!("Asset {} not found, leaving it out", stub.id);
                        None
                    }
                    Err(e) => {
                        warn!("Could not load asset {}, leaving it out: {}", stub.id, e);
                        None
                    }
                })
                .collect()
        }
    }
}

/// The home page photo wall: photos of every album whose name contains one of the
/// keywords, flattened in album order. An album that fails to load contributes nothing.
#[instrument(skip(source))]
pub async fn build_featured_photos(
    source: &dyn PhotoSource,
    keywords: &[String],
) -> Result<Vec<DisplayPhoto>, AlbumError> {
    let keywords: Vec<String> = keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| k.to_lowercase())
        .collect();
    let albums = source.list_albums().await?;
    let featured: Vec<_> = albums
        .iter()
        .filter(|album| {
            let name = album.album_name.to_lowercase();
            keywords.iter().any(|k| name.contains(k.as_str()))
        })
        .collect();

    let photo_lists = join_all(featured.iter().map(|album| async move {
        match build_photo_list(source, &album.id, PhotoSourcing::Inline).await {
            Ok(photos) => photos,
            Err(e) => {
                warn!("Could not load featured album {}: {}", album.id, e);
                vec![]
            }
        }
    }))
    .await;

    let photos: Vec<DisplayPhoto> = photo_lists.into_iter().flatten().collect();
    info!(
        "Featured {} photos from {} albums",
        photos.len(),
        featured.len()
    );
    Ok(photos)
}

/// Data for the album detail page.
///
/// The requested album is only shown when it is publishable; otherwise the default
/// album is shown instead. Photos are built from per-asset detail.
#[instrument(skip(source, galleries))]
pub async fn build_album_page(
    source: &dyn PhotoSource,
    galleries: &Galleries,
    request: AlbumPageRequest<'_>,
) -> Result<AlbumPage, AlbumError> {
    let albums = source.list_albums().await?;
    let index = album_name_index(galleries, &albums);

    let album_id = match request.requested_album_id {
        Some(id) if index.contains(id) => id,
        requested => {
            let Some(default_id) = request.default_album_id else {
                return Err(AlbumError::NotFound(
                    requested.unwrap_or_default().to_string(),
                ));
            };
            if let Some(requested) = requested {
                info!("Album {requested} is not published, showing default album");
            }
            default_id
        }
    };

    let album = source.get_album(album_id).await?;
    let photos = photos_for_assets(source, &album.assets, PhotoSourcing::FetchDetails).await;

    Ok(AlbumPage {
        album_id: album_id.to_string(),
        title: galleries.clean_title(&album.album_name),
        description: album.description,
        photos,
        album_names_by_id: index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakePhotoSource, album, asset, asset_detail};
    use app_state::GallerySettings;
    use common_types::{AlbumSummary, ExifInfo};

    fn galleries() -> Galleries {
        Galleries::new(&GallerySettings::default()).unwrap()
    }

    #[test]
    fn fallback_chain_never_yields_empty_text() {
        let cases = [
            (Some("2024-01-02T03:04:05.000Z"), Some("Sunset")),
            (Some("2024-01-02T03:04:05.000Z"), None),
            (Some("2024-01-02T03:04:05.000Z"), Some("")),
            (None, Some("Sunset")),
            (None, None),
            (Some(""), Some("")),
            (Some("   "), None),
        ];
        for (date, description) in cases {
            let photo = to_display_photo("p", date, description);
            assert!(!photo.title.trim().is_empty(), "{date:?} {description:?}");
            assert!(!photo.description.trim().is_empty(), "{date:?} {description:?}");
        }
    }

    #[test]
    fn fallback_order() {
        let photo = to_display_photo("p1", Some("2024-01-02"), Some("Sunset"));
        assert_eq!(photo.url, "/api/image?photoId=p1&isWeb=true");
        assert_eq!(photo.thumbnail_url, "/api/image?photoId=p1&isThumb=true");
        assert_eq!(photo.title, "2024-01-02");
        assert_eq!(photo.description, "Sunset");

        let photo = to_display_photo("p1", Some("2024-01-02"), None);
        assert_eq!(photo.description, "2024-01-02");

        let photo = to_display_photo("p1", None, None);
        assert_eq!(photo.title, NO_DATE);
        assert_eq!(photo.description, NO_DESCRIPTION);
    }

    #[test]
    fn detail_photo_falls_back_to_exif_description() {
        let detail = AssetDetail {
            exif_info: Some(ExifInfo {
                description: Some("From camera".to_string()),
            }),
            ..asset_detail("p1", None)
        };
        assert_eq!(photo_from_detail(&detail).description, "From camera");

        let stub = AssetStub {
            description: Some("Inline".to_string()),
            ..asset("p2")
        };
        let photo = photo_from_stub(&stub);
        assert_eq!(photo.description, "Inline");
        assert_eq!(photo.url, "/api/image?photoId=p2&isWeb=true");
    }

    #[tokio::test]
    async fn inline_sourcing_makes_no_asset_calls() {
        let source = FakePhotoSource::default()
            .with_album(album("a", "** A", true), vec![asset("p1"), asset("p2")]);
        let photos = build_photo_list(&source, "a", PhotoSourcing::Inline)
            .await
            .unwrap();

        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].title, "2024-01-01T12:00:00.000Z");
        assert_eq!(source.asset_calls(), 0);
    }

    #[tokio::test]
    async fn fetch_details_drops_failed_and_missing_assets() {
        let source = FakePhotoSource::default()
            .with_album(
                album("a", "** A", true),
                vec![asset("p1"), asset("gone"), asset("broken"), asset("p2")],
            )
            .with_asset(asset_detail("p1", Some("First")))
            .with_asset(asset_detail("broken", None))
            .with_asset(asset_detail("p2", None))
            .failing_asset("broken");

        let photos = build_photo_list(&source, "a", PhotoSourcing::FetchDetails)
            .await
            .unwrap();

        let urls: Vec<&str> = photos.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "/api/image?photoId=p1&isWeb=true",
                "/api/image?photoId=p2&isWeb=true"
            ]
        );
        assert_eq!(photos[0].description, "First");
        assert_eq!(source.asset_calls(), 4);
    }

    #[tokio::test]
    async fn missing_album_propagates() {
        let source = FakePhotoSource::default();
        let result = build_photo_list(&source, "nope", PhotoSourcing::Inline).await;
        assert!(matches!(result, Err(AlbumError::Remote(_))));
    }

    #[tokio::test]
    async fn featured_photos_come_from_keyword_albums_in_order() {
        let source = FakePhotoSource::default()
            .with_album(album("l", "Landscape 2024", true), vec![asset("l1"), asset("l2")])
            .with_album(album("x", "Weddings", true), vec![asset("x1")])
            .with_album(album("p", "PEOPLE", false), vec![asset("p1")])
            .with_album(album("broken", "people too", true), vec![asset("b1")])
            .failing_album("broken");

        let keywords = vec!["people".to_string(), "landscape".to_string()];
        let photos = build_featured_photos(&source, &keywords).await.unwrap();

        let urls: Vec<&str> = photos.iter().map(|p| p.thumbnail_url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "/api/image?photoId=l1&isThumb=true",
                "/api/image?photoId=l2&isThumb=true",
                "/api/image?photoId=p1&isThumb=true",
            ]
        );
    }

    fn page_source() -> FakePhotoSource {
        FakePhotoSource::default()
            .with_album(album("pub", "**Portraits**", true), vec![asset("p1")])
            .with_album(album("cust", "Lee *customer*", true), vec![asset("c1")])
            .with_album(album("secret", "Secret", true), vec![asset("s1")])
            .with_album(
                AlbumSummary {
                    description: "Default album".to_string(),
                    ..album("default", "Home **", true)
                },
                vec![asset("d1")],
            )
            .with_asset(asset_detail("p1", Some("Portrait one")))
            .with_asset(asset_detail("c1", None))
            .with_asset(asset_detail("s1", None))
            .with_asset(asset_detail("d1", None))
    }

    #[tokio::test]
    async fn album_page_shows_publishable_album() {
        let source = page_source();
        let page = build_album_page(
            &source,
            &galleries(),
            AlbumPageRequest {
                requested_album_id: Some("cust"),
                default_album_id: Some("default"),
            },
        )
        .await
        .unwrap();

        assert_eq!(page.album_id, "cust");
        assert_eq!(page.title, "Lee");
        assert_eq!(page.photos.len(), 1);
        assert_eq!(page.album_names_by_id.len(), 3);
        assert_eq!(page.album_names_by_id.get("pub"), Some("Portraits"));
    }

    #[tokio::test]
    async fn album_page_falls_back_to_default_for_unpublished_album() {
        let source = page_source();
        let page = build_album_page(
            &source,
            &galleries(),
            AlbumPageRequest {
                requested_album_id: Some("secret"),
                default_album_id: Some("default"),
            },
        )
        .await
        .unwrap();

        assert_eq!(page.album_id, "default");
        assert_eq!(page.title, "Home");
        assert_eq!(page.description, "Default album");
        assert_eq!(page.photos[0].url, "/api/image?photoId=d1&isWeb=true");
    }

    #[tokio::test]
    async fn album_page_without_default_is_not_found() {
        let source = page_source();
        let result = build_album_page(
            &source,
            &galleries(),
            AlbumPageRequest {
                requested_album_id: Some("secret"),
                default_album_id: None,
            },
        )
        .await;
        assert!(matches!(result, Err(AlbumError::NotFound(id)) if id == "secret"));
    }
}
