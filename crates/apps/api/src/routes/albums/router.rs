use crate::api_state::ApiContext;
use crate::albums::handlers::{
    get_album_page_handler, get_customer_album_page_handler, list_customer_albums_handler,
    list_gallery_albums_handler,
};
use axum::{Router, routing::get};

pub fn albums_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/albums", get(list_gallery_albums_handler))
        .route("/api/albums/{album_id}", get(get_album_page_handler))
        .route("/api/customer-albums", get(list_customer_albums_handler))
        .route(
            "/api/customer-albums/{album_id}",
            get(get_customer_album_page_handler),
        )
}
