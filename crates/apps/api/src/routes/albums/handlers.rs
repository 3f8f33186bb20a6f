use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Path, State};
use common_services::api::albums::error::AlbumError;
use common_services::api::albums::service::build_gallery_albums;
use common_services::api::photos::interfaces::AlbumPageRequest;
use common_services::api::photos::service::build_album_page;
use common_types::{AlbumPage, DisplayAlbum};
use tracing::instrument;

/// List the albums of the public gallery.
///
/// # Errors
///
/// Returns an `AlbumError` if the album list cannot be fetched.
#[utoipa::path(
    get,
    path = "/api/albums",
    tag = "Albums",
    responses(
        (status = 200, description = "Albums of the public gallery.", body = [DisplayAlbum]),
        (status = 500, description = "The photo service is not configured."),
        (status = 502, description = "The photo service could not be reached."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn list_gallery_albums_handler(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<DisplayAlbum>>, AlbumError> {
    let galleries = &context.galleries;
    let albums =
        build_gallery_albums(context.photo_source.as_ref(), galleries, &galleries.public).await?;
    Ok(Json(albums))
}

/// List the albums of the customer gallery.
///
/// # Errors
///
/// Returns an `AlbumError` if the album list cannot be fetched.
#[utoipa::path(
    get,
    path = "/api/customer-albums",
    tag = "Albums",
    responses(
        (status = 200, description = "Albums of the customer gallery.", body = [DisplayAlbum]),
        (status = 500, description = "The photo service is not configured."),
        (status = 502, description = "The photo service could not be reached."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn list_customer_albums_handler(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<DisplayAlbum>>, AlbumError> {
    let galleries = &context.galleries;
    let albums =
        build_gallery_albums(context.photo_source.as_ref(), galleries, &galleries.customer)
            .await?;
    Ok(Json(albums))
}

/// Get the data for an album page.
///
/// An album that is not published falls back to the configured default album.
///
/// # Errors
///
/// Returns an `AlbumError` if the album cannot be loaded.
#[utoipa::path(
    get,
    path = "/api/albums/{album_id}",
    tag = "Albums",
    params(
        ("album_id" = String, Path, description = "Id of the album to show")
    ),
    responses(
        (status = 200, description = "Album page data.", body = AlbumPage),
        (status = 404, description = "Album not published and no default album configured."),
        (status = 502, description = "The photo service could not be reached."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn get_album_page_handler(
    State(context): State<ApiContext>,
    Path(album_id): Path<String>,
) -> Result<Json<AlbumPage>, AlbumError> {
    album_page(&context, &album_id).await
}

/// Get the data for a customer album page.
///
/// # Errors
///
/// Returns an `AlbumError` if the album cannot be loaded.
#[utoipa::path(
    get,
    path = "/api/customer-albums/{album_id}",
    tag = "Albums",
    params(
        ("album_id" = String, Path, description = "Id of the album to show")
    ),
    responses(
        (status = 200, description = "Album page data.", body = AlbumPage),
        (status = 404, description = "Album not published and no default album configured."),
        (status = 502, description = "The photo service could not be reached."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn get_customer_album_page_handler(
    State(context): State<ApiContext>,
    Path(album_id): Path<String>,
) -> Result<Json<AlbumPage>, AlbumError> {
    album_page(&context, &album_id).await
}

async fn album_page(context: &ApiContext, album_id: &str) -> Result<Json<AlbumPage>, AlbumError> {
    let request = AlbumPageRequest::new(Some(album_id), &context.settings.galleries);
    let page = build_album_page(context.photo_source.as_ref(), &context.galleries, request).await?;
    Ok(Json(page))
}
