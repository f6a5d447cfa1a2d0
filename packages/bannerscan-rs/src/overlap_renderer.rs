use std::path::{Path, PathBuf};

use tracing::info;

use crate::annotate::{draw_outline, load_image, save_image, HIGHLIGHT_RGBA};
use crate::config::DetectorConfig;
use crate::error::ScanResult;
use crate::geometry::BoundingBox;

pub const OVERLAP_FILE_NAME: &str = "banner_with_overlap.png";

#[derive(Debug, Clone, PartialEq)]
pub struct OverlapRendering {
    pub path: PathBuf,
    /// Outlined intersection, `None` when the boxes do not overlap
    pub intersection: Option<BoundingBox>,
}

/// Outlines the intersection of `a` and `b` on a fresh copy of the source image.
///
/// The copy is written to [`OVERLAP_FILE_NAME`] under `output_dir` whether or
/// not the boxes intersect.
pub fn render_overlap(
    source_image_path: &Path,
    a: &BoundingBox,
    b: &BoundingBox,
    output_dir: &Path,
    config: &DetectorConfig,
) -> ScanResult<OverlapRendering> {
    let mut image = load_image(source_image_path)?;

    let intersection = a.intersection(b);
    match &intersection {
        Some(bounds) => {
            draw_outline(&mut image, bounds, config.overlap_outline_width, HIGHLIGHT_RGBA);
            info!("Overlap drawn: {}", bounds);
        }
        None => info!("No overlap detected."),
    }

    let path = output_dir.join(OVERLAP_FILE_NAME);
    save_image(&image, &path)?;
    info!("Image with overlap saved to {}", path.display());

    Ok(OverlapRendering { path, intersection })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::HIGHLIGHT;
    use image::{ColorType, Rgb, RgbImage, Rgba, RgbaImage};

    fn source(dir: &Path) -> PathBuf {
        let path = dir.join("full_banner.png");
        RgbImage::from_pixel(50, 50, Rgb([0, 0, 200])).save(&path).unwrap();
        path
    }

    #[test]
    fn test_render_intersection() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(dir.path());
        let rendering = render_overlap(
            &src,
            &BoundingBox::new(0, 0, 30, 30),
            &BoundingBox::new(10, 10, 45, 45),
            dir.path(),
            &DetectorConfig::default(),
        )
        .unwrap();

        assert_eq!(rendering.path, dir.path().join(OVERLAP_FILE_NAME));
        assert_eq!(rendering.intersection, Some(BoundingBox::new(10, 10, 30, 30)));

        let out = image::open(&rendering.path).unwrap().to_rgb8();
        assert_eq!(*out.get_pixel(10, 20), HIGHLIGHT);
        assert_eq!(*out.get_pixel(14, 20), HIGHLIGHT);
        assert_eq!(*out.get_pixel(20, 20), Rgb([0, 0, 200]));
    }

    #[test]
    fn test_disjoint_boxes_still_save() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(dir.path());
        let rendering = render_overlap(
            &src,
            &BoundingBox::new(0, 0, 10, 10),
            &BoundingBox::new(10, 0, 20, 10),
            dir.path(),
            &DetectorConfig::default(),
        )
        .unwrap();

        assert_eq!(rendering.intersection, None);
        let out = image::open(&rendering.path).unwrap().to_rgb8();
        assert!(out.pixels().all(|p| *p == Rgb([0, 0, 200])));
    }

    #[test]
    fn test_rgba_capture_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("rgba_banner.png");
        RgbaImage::from_pixel(30, 30, Rgba([0, 120, 0, 128])).save(&src).unwrap();

        let rendering = render_overlap(
            &src,
            &BoundingBox::new(0, 0, 20, 20),
            &BoundingBox::new(5, 5, 25, 25),
            dir.path(),
            &DetectorConfig::default(),
        )
        .unwrap();

        let out = image::open(&rendering.path).unwrap();
        assert_eq!(out.color(), ColorType::Rgba8);
        let out = out.to_rgba8();
        assert_eq!(*out.get_pixel(5, 12), HIGHLIGHT_RGBA);
        assert_eq!(*out.get_pixel(12, 12), Rgba([0, 120, 0, 128]));
        assert_eq!(*out.get_pixel(28, 28), Rgba([0, 120, 0, 128]));
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_overlap(
            &dir.path().join("gone.png"),
            &BoundingBox::new(0, 0, 10, 10),
            &BoundingBox::new(5, 5, 15, 15),
            dir.path(),
            &DetectorConfig::default(),
        );
        assert!(result.is_err());
        assert!(!dir.path().join(OVERLAP_FILE_NAME).exists());
    }
}
