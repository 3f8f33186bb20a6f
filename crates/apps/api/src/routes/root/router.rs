use crate::api_state::ApiContext;
use crate::root::handlers::{health_check, site_info};
use axum::{Router, routing::get};

pub fn root_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/site", get(site_info))
}
