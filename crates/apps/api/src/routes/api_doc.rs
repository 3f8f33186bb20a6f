use crate::routes::{albums, contact, image, photos, portrait, root};
use common_services::api::contact::interfaces::{ContactRequest, ContactResponse};
use common_types::{AlbumNameIndex, AlbumPage, DisplayAlbum, DisplayPhoto, SiteInfo};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::health_check,
        root::handlers::site_info,
        // Album handlers
        albums::handlers::list_gallery_albums_handler,
        albums::handlers::list_customer_albums_handler,
        albums::handlers::get_album_page_handler,
        albums::handlers::get_customer_album_page_handler,
        // Photo handlers
        photos::handlers::featured_photos_handler,
        // Image handlers
        image::handlers::get_image_handler,
        portrait::handlers::get_portrait_handler,
        // Contact handlers
        contact::handlers::post_contact_handler,
    ),
    components(
        schemas(
            DisplayAlbum,
            DisplayPhoto,
            AlbumPage,
            AlbumNameIndex,
            SiteInfo,
            ContactRequest,
            ContactResponse,
        ),
    ),
    tags(
        (name = "Photo Site", description = "Photography site API"),
        (name = "Albums", description = "Gallery listings and album pages"),
        (name = "Images", description = "Resized image delivery"),
        (name = "Contact", description = "Contact form relay"),
        (name = "System", description = "Health and site information"),
    )
)]
pub struct ApiDoc;
