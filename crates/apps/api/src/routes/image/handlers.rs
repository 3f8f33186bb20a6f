use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use common_services::api::image::error::ImageError;
use common_services::api::image::interfaces::{IMAGE_CACHE_CONTROL, ImageParams};
use common_services::api::image::service::fetch_image;
use common_services::photo_client::PhotoSource;
use std::sync::Arc;
use tracing::instrument;

/// Get an image from the photo service.
///
/// Thumbnails and `fullRes` originals are passed through, everything else is
/// resized to fit 1920x1080.
///
/// # Errors
///
/// Returns an `ImageError` if `photoId` is missing or the image cannot be fetched or resized.
#[utoipa::path(
    get,
    path = "/api/image",
    tag = "Images",
    params(ImageParams),
    responses(
        (status = 200, description = "Image bytes.", content_type = "image/jpeg"),
        (status = 400, description = "Missing photoId parameter."),
        (status = 500, description = "Configuration or processing error."),
    )
)]
#[instrument(skip(source))]
pub async fn get_image_handler(
    State(source): State<Arc<dyn PhotoSource>>,
    Query(params): Query<ImageParams>,
) -> Result<impl IntoResponse, ImageError> {
    let bytes = fetch_image(source.as_ref(), &params).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg"),
            (header::CACHE_CONTROL, IMAGE_CACHE_CONTROL),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        bytes,
    ))
}
