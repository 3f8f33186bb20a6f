use app_state::GallerySettings;

pub const NO_DATE: &str = "No date";
pub const NO_DESCRIPTION: &str = "No description available";

/// How per-photo metadata is obtained for an album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSourcing {
    /// Use the asset stubs embedded in the album detail response.
    Inline,
    /// Fetch every asset individually for its full metadata.
    FetchDetails,
}

/// Inputs of the album detail page.
#[derive(Debug, Clone)]
pub struct AlbumPageRequest<'a> {
    pub requested_album_id: Option<&'a str>,
    pub default_album_id: Option<&'a str>,
}

impl<'a> AlbumPageRequest<'a> {
    #[must_use]
    pub fn new(requested_album_id: Option<&'a str>, settings: &'a GallerySettings) -> Self {
        Self {
            requested_album_id,
            default_album_id: settings.default_album_id.as_deref(),
        }
    }
}
