use super::error::PortraitError;
use crate::image_utils::{PORTRAIT_RENDITION, downsample_to_jpeg_blocking};
use app_state::PortraitSettings;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, instrument};

pub const PORTRAIT_CACHE_CONTROL: &str = "max-age=3600";

/// One of the two portrait files, chosen uniformly.
#[must_use]
pub fn pick_portrait(settings: &PortraitSettings, rng: &mut fastrand::Rng) -> PathBuf {
    let [first, second] = settings.paths();
    if rng.bool() { first } else { second }
}

/// A randomly chosen portrait, shrunk to fit 600x600.
#[instrument(skip(settings))]
pub async fn random_portrait_jpeg(settings: &PortraitSettings) -> Result<Vec<u8>, PortraitError> {
    let path = pick_portrait(settings, &mut fastrand::Rng::new());
    debug!("Serving portrait {}", path.display());
    let bytes = fs::read(&path).await?;
    Ok(downsample_to_jpeg_blocking(bytes, PORTRAIT_RENDITION).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_utils::tests::{decoded_size, sample_image};
    use image::ImageFormat;
    use std::fs as std_fs;

    fn portrait_dir() -> (tempfile::TempDir, PortraitSettings) {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("a.jpg"), sample_image(1200, 800, ImageFormat::Jpeg))
            .unwrap();
        std_fs::write(dir.path().join("b.jpg"), sample_image(300, 900, ImageFormat::Jpeg))
            .unwrap();
        let settings = PortraitSettings {
            directory: dir.path().to_path_buf(),
            files: ["a.jpg".to_string(), "b.jpg".to_string()],
        };
        (dir, settings)
    }

    #[test]
    fn both_portraits_get_picked() {
        let settings = PortraitSettings::default();
        let [first, second] = settings.paths();
        let mut rng = fastrand::Rng::new();

        let (mut first_count, mut second_count) = (0, 0);
        for _ in 0..1000 {
            let picked = pick_portrait(&settings, &mut rng);
            if picked == first {
                first_count += 1;
            } else if picked == second {
                second_count += 1;
            } else {
                panic!("unexpected portrait {}", picked.display());
            }
        }
        assert!(first_count > 0);
        assert!(second_count > 0);
    }

    #[tokio::test]
    async fn portraits_are_bounded_jpegs() {
        let (_dir, settings) = portrait_dir();
        for _ in 0..20 {
            let jpeg = random_portrait_jpeg(&settings).await.unwrap();
            let (width, height, format) = decoded_size(&jpeg);
            assert_eq!(format, ImageFormat::Jpeg);
            assert!(width <= 600 && height <= 600, "{width}x{height}");
            assert!((width, height) == (600, 400) || (width, height) == (200, 600));
        }
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let settings = PortraitSettings {
            directory: PathBuf::from("/nonexistent-portrait-dir"),
            ..PortraitSettings::default()
        };
        let result = random_portrait_jpeg(&settings).await;
        assert!(matches!(result, Err(PortraitError::Read(_))));
    }
}
