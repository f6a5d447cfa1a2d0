//! Locates the significant region of a banner capture with the text layer hidden.
//!
//! The capture is reduced to grayscale, normalized so that mostly dark images
//! are inverted, contrast enhanced around its mean intensity and binarized. The
//! bounding box of every foreground pixel below the ignored header rows is the
//! significant region.
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma, RgbImage};
use tracing::{debug, info};

use crate::annotate::{draw_outline, load_image, save_image, HIGHLIGHT};
use crate::config::DetectorConfig;
use crate::error::ScanResult;
use crate::geometry::{BoundingBox, BoxAccumulator};

pub const HIGHLIGHT_FILE_NAME: &str = "highlighted_banner_image.png";

/// Outcome of running the detector over an in-memory image.
pub struct RegionDetection {
    /// Binarized capture rendered as RGB, outlined when a region was found
    pub annotated: RgbImage,
    pub region: Option<BoundingBox>,
    /// Whether intensities were inverted during normalization
    pub inverted: bool,
}

/// ITU-R 601-2 luma with the fixed-point rounding used by common imaging libraries.
pub fn grayscale(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
        Luma([luma as u8])
    })
}

/// Inverts the image unless more than half of its pixels are light.
pub fn normalize_polarity(gray: &mut GrayImage, light_threshold: u8) -> bool {
    let total = gray.width() as usize * gray.height() as usize;
    let light = gray.pixels().filter(|p| p.0[0] > light_threshold).count();
    let invert = light * 2 <= total;
    if invert {
        image::imageops::invert(gray);
    }
    invert
}

fn mean_intensity(gray: &GrayImage) -> f32 {
    let total = gray.width() as u64 * gray.height() as u64;
    if total == 0 {
        return 0.0;
    }
    let sum: u64 = gray.pixels().map(|p| p.0[0] as u64).sum();
    (sum as f64 / total as f64 + 0.5).floor() as f32
}

/// Scales every pixel's distance from the rounded mean intensity by `factor`.
pub fn enhance_contrast(gray: &GrayImage, factor: f32) -> GrayImage {
    let mean = mean_intensity(gray);
    let mut out = gray.clone();
    for pixel in out.pixels_mut() {
        let value = mean + factor * (pixel.0[0] as f32 - mean);
        pixel.0[0] = if value <= 0.0 {
            0
        } else if value >= 255.0 {
            255
        } else {
            value as u8
        };
    }
    out
}

/// Pixels below `threshold` become 255, the rest 0.
pub fn binarize(gray: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = gray.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = if pixel.0[0] < threshold { 255 } else { 0 };
    }
    out
}

fn scan_light_pixels(
    binary: &RgbImage,
    top_ignore_rows: u32,
    light_threshold: u8,
) -> Option<BoundingBox> {
    let mut acc = BoxAccumulator::new();
    for y in top_ignore_rows..binary.height() {
        for x in 0..binary.width() {
            if binary.get_pixel(x, y).0[0] > light_threshold {
                acc.add_point(x as i32, y as i32);
            }
        }
    }
    acc.finish().filter(BoundingBox::has_area)
}

pub fn detect_in_image(
    image: &DynamicImage,
    top_ignore_rows: u32,
    config: &DetectorConfig,
) -> RegionDetection {
    let mut gray = grayscale(image);
    let inverted = normalize_polarity(&mut gray, config.light_pixel_threshold);
    let enhanced = enhance_contrast(&gray, config.contrast_factor);
    let binary = binarize(&enhanced, config.binarize_threshold);

    let mut annotated = DynamicImage::ImageLuma8(binary).to_rgb8();
    let region = scan_light_pixels(&annotated, top_ignore_rows, config.light_pixel_threshold);
    if let Some(bounds) = &region {
        draw_outline(&mut annotated, bounds, config.region_outline_width, HIGHLIGHT);
    }

    RegionDetection {
        annotated,
        region,
        inverted,
    }
}

/// Path of the highlight image written next to `image_path`.
pub fn highlight_path_for(image_path: &Path) -> PathBuf {
    image_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(HIGHLIGHT_FILE_NAME)
}

/// Detects the significant region of the capture at `image_path`.
///
/// The binarized capture, outlined when a region was found, is always saved
/// as [`HIGHLIGHT_FILE_NAME`] beside the input.
pub fn detect_significant_region(
    image_path: &Path,
    top_ignore_rows: u32,
    config: &DetectorConfig,
) -> ScanResult<Option<BoundingBox>> {
    let image = load_image(image_path)?;
    let detection = detect_in_image(&image, top_ignore_rows, config);
    debug!(
        "region detection on {} (inverted: {})",
        image_path.display(),
        detection.inverted
    );

    if let Some(bounds) = &detection.region {
        info!("Significant region found: {}", bounds);
    }

    let result_path = highlight_path_for(image_path);
    save_image(&DynamicImage::ImageRgb8(detection.annotated), &result_path)?;
    info!("Highlighted image saved to {}", result_path.display());

    Ok(detection.region)
}
