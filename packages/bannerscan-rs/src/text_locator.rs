//! Aggregates OCR text regions into one box around all promotional text.
use std::path::Path;

use bannerscan_ocr::{OcrEngine, OcrInput, TextRegion};
use tracing::{debug, info};

use crate::annotate::{draw_outline, load_image, save_image, HIGHLIGHT_RGBA};
use crate::config::DetectorConfig;
use crate::error::ScanResult;
use crate::geometry::{overlaps, BoundingBox, BoxAccumulator};

pub const SELECTED_TEXT_FILE_NAME: &str = "selected_text_banner.png";

/// Union of every region box, skipping regions that overlap `exclude_region`.
///
/// Regions without geometry are ignored. `None` when no region qualified.
pub fn aggregate_text_regions(
    regions: &[TextRegion],
    exclude_region: Option<&BoundingBox>,
) -> Option<BoundingBox> {
    let mut acc = BoxAccumulator::new();
    for region in regions {
        let Some(bounds) = region.bounding_box.as_ref().map(BoundingBox::from_ocr) else {
            continue;
        };
        if let Some(excluded) = exclude_region {
            if overlaps(&bounds, excluded) {
                debug!("skipping text {:?} inside {}", region.text, excluded);
                continue;
            }
        }
        acc.add_box(&bounds);
    }
    acc.finish()
}

/// Runs OCR over `image_path` and returns the box around all text found.
///
/// A copy of the original image, outlined around the text when the box has
/// area, is saved to `output_path`.
pub async fn detect_text_bounding_box(
    engine: &dyn OcrEngine,
    image_path: &Path,
    output_path: &Path,
    exclude_region: Option<&BoundingBox>,
    config: &DetectorConfig,
) -> ScanResult<Option<BoundingBox>> {
    let mut image = load_image(image_path)?;

    let output = engine
        .recognize(&OcrInput::ImagePath(image_path.to_path_buf()))
        .await?;
    debug!("OCR returned {} regions", output.regions.len());

    let text_box = aggregate_text_regions(&output.regions, exclude_region);
    if let Some(bounds) = text_box.filter(BoundingBox::has_area) {
        draw_outline(&mut image, &bounds, config.text_outline_width, HIGHLIGHT_RGBA);
        info!("Bounding box around all text: {}", bounds);
    }

    save_image(&image, output_path)?;
    info!("Bounding box image saved to {}", output_path.display());

    Ok(text_box)
}
