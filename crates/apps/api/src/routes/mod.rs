pub mod albums;
mod api_doc;
pub mod contact;
pub mod image;
pub mod photos;
pub mod portrait;
pub mod root;

use crate::albums::router::albums_public_router;
use crate::api_state::ApiContext;
use crate::contact::router::contact_public_router;
use crate::image::router::image_public_router;
use crate::photos::router::photos_public_router;
use crate::portrait::router::portrait_public_router;
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(public_routes())
        .with_state(api_state)
}

fn public_routes() -> Router<ApiContext> {
    Router::new()
        .merge(root_public_router())
        .merge(albums_public_router())
        .merge(photos_public_router())
        .merge(image_public_router())
        .merge(contact_public_router())
        .merge(portrait_public_router())
}
