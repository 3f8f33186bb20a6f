use crate::api_state::ApiContext;
use crate::contact::handlers::post_contact_handler;
use axum::{Router, routing::post};

pub fn contact_public_router() -> Router<ApiContext> {
    Router::new().route("/api/contact", post(post_contact_handler))
}
