use super::error::ImageError;
use super::interfaces::ImageParams;
use crate::image_utils::{WEB_RENDITION, downsample_to_jpeg_blocking};
use crate::photo_client::PhotoSource;
use tracing::{debug, instrument};

/// Fetches the requested rendition and downsizes web-sized originals to 1920x1080 JPEG.
/// A failed transform is an error; the original bytes are never served instead.
#[instrument(skip(source), err(Debug))]
pub async fn fetch_image(
    source: &dyn PhotoSource,
    params: &ImageParams,
) -> Result<Vec<u8>, ImageError> {
    let photo_id = params.photo_id().ok_or(ImageError::MissingPhotoId)?;
    let bytes = source.get_image(photo_id, params.variant()).await?;
    debug!("Fetched {} bytes for {}", bytes.len(), photo_id);

    if !params.needs_downsampling() {
        return Ok(bytes);
    }
    Ok(downsample_to_jpeg_blocking(bytes, WEB_RENDITION).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_utils::tests::{decoded_size, sample_image};
    use crate::photo_client::ImageVariant;
    use crate::testing::FakePhotoSource;
    use image::ImageFormat;

    fn params(query: &[(&str, &str)]) -> ImageParams {
        let mut params = ImageParams::default();
        for (key, value) in query {
            let value = Some((*value).to_string());
            match *key {
                "photoId" => params.photo_id = value,
                "isThumb" => params.is_thumb = value,
                "fullRes" => params.full_res = value,
                _ => params.is_web = value,
            }
        }
        params
    }

    fn source() -> FakePhotoSource {
        FakePhotoSource::default()
            .with_image("big", ImageVariant::Original, sample_image(3000, 2000, ImageFormat::Png))
            .with_image("small", ImageVariant::Original, sample_image(640, 480, ImageFormat::Png))
            .with_image("big", ImageVariant::Thumbnail, b"thumb-bytes".to_vec())
    }

    #[tokio::test]
    async fn thumbnail_bytes_pass_through() {
        let bytes = fetch_image(&source(), &params(&[("photoId", "big"), ("isThumb", "true")]))
            .await
            .unwrap();
        assert_eq!(bytes, b"thumb-bytes");
    }

    #[tokio::test]
    async fn full_res_bypasses_resizing() {
        let original = sample_image(3000, 2000, ImageFormat::Png);
        let bytes = fetch_image(&source(), &params(&[("photoId", "big"), ("fullRes", "true")]))
            .await
            .unwrap();
        assert_eq!(bytes, original);
    }

    #[tokio::test]
    async fn web_rendition_is_bounded_jpeg() {
        let bytes = fetch_image(&source(), &params(&[("photoId", "big"), ("isWeb", "true")]))
            .await
            .unwrap();
        assert_eq!(decoded_size(&bytes), (1620, 1080, ImageFormat::Jpeg));

        let bytes = fetch_image(&source(), &params(&[("photoId", "small")]))
            .await
            .unwrap();
        assert_eq!(decoded_size(&bytes), (640, 480, ImageFormat::Jpeg));
    }

    #[tokio::test]
    async fn flags_other_than_true_are_false() {
        let bytes = fetch_image(&source(), &params(&[("photoId", "big"), ("isThumb", "1")]))
            .await
            .unwrap();
        assert_eq!(decoded_size(&bytes).2, ImageFormat::Jpeg);
    }

    #[tokio::test]
    async fn missing_photo_id_makes_no_upstream_call() {
        let source = source();
        for query in [&[][..], &[("photoId", "")][..]] {
            let result = fetch_image(&source, &params(query)).await;
            assert!(matches!(result, Err(ImageError::MissingPhotoId)));
        }
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn upstream_status_is_propagated() {
        let result = fetch_image(&source(), &params(&[("photoId", "unknown")])).await;
        match result {
            Err(ImageError::Upstream { status, message }) => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(message, "Asset not found");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_original_is_internal_error() {
        let source = FakePhotoSource::default().with_image(
            "bad",
            ImageVariant::Original,
            b"not an image".to_vec(),
        );
        let result = fetch_image(&source, &params(&[("photoId", "bad")])).await;
        assert!(matches!(result, Err(ImageError::Internal(_))));
    }

    #[tokio::test]
    async fn unconfigured_source_is_configuration_error() {
        let source = FakePhotoSource::default().unconfigured();
        let result = fetch_image(&source, &params(&[("photoId", "x")])).await;
        assert!(matches!(result, Err(ImageError::Configuration)));
    }
}
