use crate::api_state::ApiContext;
use crate::image::handlers::get_image_handler;
use axum::{Router, routing::get};

pub fn image_public_router() -> Router<ApiContext> {
    Router::new().route("/api/image", get(get_image_handler))
}
