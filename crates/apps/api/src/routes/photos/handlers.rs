use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::State;
use common_services::api::albums::error::AlbumError;
use common_services::api::photos::service::build_featured_photos;
use common_types::DisplayPhoto;
use tracing::instrument;

/// Get the featured photos shown on the home page.
///
/// # Errors
///
/// Returns an `AlbumError` if the album list cannot be fetched.
#[utoipa::path(
    get,
    path = "/api/photos",
    tag = "Albums",
    responses(
        (status = 200, description = "Photos of the featured albums.", body = [DisplayPhoto]),
        (status = 500, description = "The photo service is not configured."),
        (status = 502, description = "The photo service could not be reached."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn featured_photos_handler(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<DisplayPhoto>>, AlbumError> {
    let photos = build_featured_photos(
        context.photo_source.as_ref(),
        &context.settings.featured.keywords,
    )
    .await?;
    Ok(Json(photos))
}
