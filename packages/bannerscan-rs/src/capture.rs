//! Screenshots handed over by the browser capture step, and their preparation.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotate::load_image;
use crate::error::{ScanError, ScanResult};

pub const CROPPED_NO_TEXT_FILE_NAME: &str = "no_text_banner.png";

/// The three states of the banner element captured by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerCaptures {
    /// Banner as rendered, text included
    pub full_banner: PathBuf,
    /// Banner with the text columns hidden
    pub no_text_banner: PathBuf,
    /// Banner with the picture hidden behind a flat background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_only_banner: Option<PathBuf>,
}

impl BannerCaptures {
    pub fn new(full_banner: impl Into<PathBuf>, no_text_banner: impl Into<PathBuf>) -> Self {
        Self {
            full_banner: full_banner.into(),
            no_text_banner: no_text_banner.into(),
            text_only_banner: None,
        }
    }

    pub fn with_text_only(mut self, text_only_banner: impl Into<PathBuf>) -> Self {
        self.text_only_banner = Some(text_only_banner.into());
        self
    }
}

/// Writes `source` minus its first `rows` pixel rows to `destination`.
pub fn crop_top_rows(source: &Path, rows: u32, destination: &Path) -> ScanResult<PathBuf> {
    let image = load_image(source)?;
    if rows > 0 && rows >= image.height() {
        return Err(ScanError::InvalidCapture(format!(
            "cannot crop {rows} rows from {} ({}px tall)",
            source.display(),
            image.height()
        )));
    }

    let cropped = image.crop_imm(0, rows, image.width(), image.height() - rows);
    cropped.save(destination).map_err(|source| ScanError::ImageSave {
        path: destination.to_path_buf(),
        source,
    })?;
    debug!(
        "cropped {rows} rows from {} into {}",
        source.display(),
        destination.display()
    );
    Ok(destination.to_path_buf())
}
