use std::path::PathBuf;

use bannerscan_ocr::OcrError;
use thiserror::Error;

/// Failure of a single scan stage. Empty results are not errors.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to save image {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("text detection failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid capture: {0}")]
    InvalidCapture(String),
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
