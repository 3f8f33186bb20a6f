use color_eyre::eyre::{Result, WrapErr, eyre};
use fast_image_resize as fr;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageReader};
use std::io::Cursor;
use std::time::Instant;
use tokio::task;
use tracing::debug;

/// Bounding box and quality for a downsampled JPEG rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegRendition {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: u8,
}

/// Full-size photos on the site.
pub const WEB_RENDITION: JpegRendition = JpegRendition {
    max_width: 1920,
    max_height: 1080,
    quality: 80,
};

pub const PORTRAIT_RENDITION: JpegRendition = JpegRendition {
    max_width: 600,
    max_height: 600,
    quality: 70,
};

/// Largest size with the same aspect ratio that fits the box. Never upscales.
#[must_use]
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let dst_width = (f64::from(width) * scale).round() as u32;
    let dst_height = (f64::from(height) * scale).round() as u32;
    (dst_width.clamp(1, max_width), dst_height.clamp(1, max_height))
}

/// Decodes any supported image, shrinks it to fit the rendition box and re-encodes it as JPEG.
pub fn downsample_to_jpeg(bytes: &[u8], rendition: JpegRendition) -> Result<Vec<u8>> {
    let now = Instant::now();
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .wrap_err("Failed to guess image format")?
        .decode()
        .wrap_err("Failed to decode image")?;
    let dbg_decode_time = now.elapsed();

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(eyre!("source image has no pixels"));
    }
    let (dst_width, dst_height) =
        fit_within(width, height, rendition.max_width, rendition.max_height);

    let rgb = img.into_rgb8().into_raw();
    let pixels = if (dst_width, dst_height) == (width, height) {
        rgb
    } else {
        let src_image = fr::images::Image::from_vec_u8(width, height, rgb, fr::PixelType::U8x3)
            .map_err(|e| eyre!("Resize source error: {e}"))?;
        let mut dst_image = fr::images::Image::new(dst_width, dst_height, fr::PixelType::U8x3);
        fr::Resizer::new()
            .resize(&src_image, &mut dst_image, None)
            .map_err(|e| eyre!("Resize error: {e}"))?;
        dst_image.into_vec()
    };

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, rendition.quality)
        .encode(&pixels, dst_width, dst_height, ExtendedColorType::Rgb8)
        .wrap_err("Failed to encode jpeg")?;

    debug!(
        "Downsampled {width}x{height} -> {dst_width}x{dst_height} (decode {dbg_decode_time:?}, total {:?})",
        now.elapsed()
    );
    Ok(jpeg)
}

/// [`downsample_to_jpeg`] on the blocking pool.
pub async fn downsample_to_jpeg_blocking(
    bytes: Vec<u8>,
    rendition: JpegRendition,
) -> Result<Vec<u8>> {
    task::spawn_blocking(move || downsample_to_jpeg(&bytes, rendition))
        .await
        .wrap_err("Image transform task failed")?
}
