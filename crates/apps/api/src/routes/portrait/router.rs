use crate::api_state::ApiContext;
use crate::portrait::handlers::get_portrait_handler;
use axum::{Router, routing::get};

pub fn portrait_public_router() -> Router<ApiContext> {
    Router::new().route("/api/robphoto", get(get_portrait_handler))
}
