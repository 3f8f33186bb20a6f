use url::form_urlencoded::byte_serialize;

/// Site-relative URL of the thumbnail rendition served by the image endpoint.
#[must_use]
pub fn thumbnail_url(asset_id: &str) -> String {
    format!("/api/image?photoId={}&isThumb=true", encode(asset_id))
}

/// Site-relative URL of the web-sized rendition served by the image endpoint.
#[must_use]
pub fn web_url(asset_id: &str) -> String {
    format!("/api/image?photoId={}&isWeb=true", encode(asset_id))
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// First non-empty value, if any.
#[must_use]
pub fn first_non_empty<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    values
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
}
