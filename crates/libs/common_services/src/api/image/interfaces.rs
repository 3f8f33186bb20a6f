use crate::photo_client::ImageVariant;
use serde::Deserialize;
use utoipa::IntoParams;

pub const IMAGE_CACHE_CONTROL: &str = "max-age=604800, immutable";

/// Query of the image endpoint. Flags are true only when spelled `true`.
#[derive(Deserialize, IntoParams, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageParams {
    /// Asset id in the photo service.
    pub photo_id: Option<String>,
    /// Serve the upstream thumbnail unchanged.
    pub is_thumb: Option<String>,
    /// Serve the upstream original unchanged.
    pub full_res: Option<String>,
    /// Web-sized rendition; this is the default and the flag is informational.
    pub is_web: Option<String>,
}

fn is_true(flag: Option<&String>) -> bool {
    flag.is_some_and(|f| f == "true")
}

impl ImageParams {
    #[must_use]
    pub fn photo_id(&self) -> Option<&str> {
        self.photo_id.as_deref().filter(|id| !id.is_empty())
    }

    #[must_use]
    pub fn is_thumb(&self) -> bool {
        is_true(self.is_thumb.as_ref())
    }

    #[must_use]
    pub fn full_res(&self) -> bool {
        is_true(self.full_res.as_ref())
    }

    #[must_use]
    pub fn variant(&self) -> ImageVariant {
        if self.is_thumb() {
            ImageVariant::Thumbnail
        } else {
            ImageVariant::Original
        }
    }

    /// Only web-sized originals are re-encoded; thumbnails arrive pre-sized.
    #[must_use]
    pub fn needs_downsampling(&self) -> bool {
        !self.is_thumb() && !self.full_res()
    }
}
