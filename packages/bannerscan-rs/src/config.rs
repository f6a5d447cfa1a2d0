//! Tunable thresholds for the detectors, loadable from a TOML file.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for region detection, text location and annotation.
///
/// Any key missing from a TOML file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Grayscale value above which a pixel counts as light (200)
    pub light_pixel_threshold: u8,
    /// Contrast enhancement factor applied around the mean intensity (3.0)
    pub contrast_factor: f32,
    /// Enhanced intensities below this become foreground (100)
    pub binarize_threshold: u8,
    /// Leading rows skipped when scanning for the significant region (0)
    pub top_ignore_rows: u32,
    /// Leading rows cropped off the "no text" capture before detection (1)
    pub crop_top_rows: u32,
    /// Outline width of the significant region highlight (5)
    pub region_outline_width: u32,
    /// Outline width of the aggregate text box (2)
    pub text_outline_width: u32,
    /// Outline width of the overlap rectangle (5)
    pub overlap_outline_width: u32,
    /// Ignore text that overlaps the significant region when locating text (false)
    pub exclude_significant_text: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            light_pixel_threshold: 200,
            contrast_factor: 3.0,
            binarize_threshold: 100,
            top_ignore_rows: 0,
            crop_top_rows: 1,
            region_outline_width: 5,
            text_outline_width: 2,
            overlap_outline_width: 5,
            exclude_significant_text: false,
        }
    }
}

impl DetectorConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse detector config")
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }
}
