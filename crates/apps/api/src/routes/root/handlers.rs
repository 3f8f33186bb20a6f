use app_state::AppSettings;
use axum::Json;
use axum::extract::State;
use common_types::SiteInfo;

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "API is up.", body = String),
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}

/// Public values the rendering layer needs, such as the analytics site id.
#[utoipa::path(
    get,
    path = "/api/site",
    tag = "System",
    responses(
        (status = 200, description = "Public site configuration.", body = SiteInfo),
    )
)]
pub async fn site_info(State(settings): State<AppSettings>) -> Json<SiteInfo> {
    Json(SiteInfo {
        umami_website_id: settings.site.umami_website_id,
    })
}
