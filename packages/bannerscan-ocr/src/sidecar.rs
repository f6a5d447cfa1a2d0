//! OCR backend that replays regions recognized ahead of time by an external tool.
//!
//! A sidecar is a JSON array of [`TextRegion`] values:
//!
//! ```json
//! [{ "text": "SALE", "confidence": 0.97,
//!    "bounding_box": { "x": 12.0, "y": 40.0, "width": 88.0, "height": 24.0 } }]
//! ```
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::engine::{OcrEngine, OcrError, OcrInput, OcrOutput};
use crate::region::TextRegion;

const SIDECAR_EXTENSION: &str = "ocr.json";

pub struct SidecarOcrEngine {
    fixed_path: Option<PathBuf>,
}

impl SidecarOcrEngine {
    /// Looks for `<image stem>.ocr.json` next to every image it is asked about.
    pub fn new() -> Self {
        Self { fixed_path: None }
    }

    /// Always answers with the regions stored in `path`, whatever the input.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            fixed_path: Some(path.into()),
        }
    }

    pub fn sidecar_path_for(image_path: &Path) -> PathBuf {
        image_path.with_extension(SIDECAR_EXTENSION)
    }

    fn resolve(&self, input: &OcrInput) -> Result<PathBuf, OcrError> {
        match (&self.fixed_path, input.image_path()) {
            (Some(path), _) => Ok(path.clone()),
            (None, Some(image)) => Ok(Self::sidecar_path_for(image)),
            (None, None) => Err(OcrError::unsupported(input)),
        }
    }
}

impl Default for SidecarOcrEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_regions(json: &str) -> Result<Vec<TextRegion>, OcrError> {
    serde_json::from_str(json).map_err(|e| OcrError::MalformedRegions(e.to_string()))
}

#[async_trait]
impl OcrEngine for SidecarOcrEngine {
    async fn recognize(&self, input: &OcrInput) -> Result<OcrOutput, OcrError> {
        let path = self.resolve(input)?;
        debug!("reading OCR sidecar {}", path.display());

        let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OcrError::MissingSidecar(path.clone())
            } else {
                OcrError::Io(e)
            }
        })?;

        let output = OcrOutput::from_regions(parse_regions(&contents)?);
        debug!(
            "{} regions, {} placed",
            output.regions.len(),
            output.placed_regions().count()
        );
        Ok(output)
    }
}
