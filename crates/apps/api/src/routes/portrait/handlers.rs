use app_state::PortraitSettings;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use common_services::api::portrait::error::PortraitError;
use common_services::api::portrait::service::{PORTRAIT_CACHE_CONTROL, random_portrait_jpeg};
use tracing::instrument;

/// Get one of the two portraits at random, at most 600x600.
#[utoipa::path(
    get,
    path = "/api/robphoto",
    tag = "Images",
    responses(
        (status = 200, description = "Portrait JPEG.", content_type = "image/jpeg"),
        (status = 500, description = "Failed to process portrait."),
    )
)]
#[instrument(skip(settings))]
pub async fn get_portrait_handler(
    State(settings): State<PortraitSettings>,
) -> Result<impl IntoResponse, PortraitError> {
    let jpeg = random_portrait_jpeg(&settings).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg"),
            (header::CACHE_CONTROL, PORTRAIT_CACHE_CONTROL),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        jpeg,
    ))
}
