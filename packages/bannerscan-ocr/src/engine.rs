//! The seam between banner scanning and whatever recognizes the text.
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::region::TextRegion;

/// Image handed to an engine: a capture on disk or encoded image bytes.
#[derive(Debug, Clone)]
pub enum OcrInput {
    ImagePath(PathBuf),
    EncodedImage(Vec<u8>),
}

impl OcrInput {
    pub fn image_path(&self) -> Option<&Path> {
        match self {
            OcrInput::ImagePath(path) => Some(path),
            OcrInput::EncodedImage(_) => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            OcrInput::ImagePath(_) => "image path",
            OcrInput::EncodedImage(_) => "encoded image",
        }
    }
}

/// Regions in reading order plus their texts joined line by line.
#[derive(Debug, Clone, Default)]
pub struct OcrOutput {
    pub text: String,
    pub regions: Vec<TextRegion>,
}

impl OcrOutput {
    pub fn from_regions(regions: Vec<TextRegion>) -> Self {
        regions.into_iter().collect()
    }

    pub fn push(&mut self, region: TextRegion) {
        if !self.regions.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(&region.text);
        self.regions.push(region);
    }

    /// Regions the engine could place on the image.
    pub fn placed_regions(&self) -> impl Iterator<Item = &TextRegion> {
        self.regions.iter().filter(|r| r.bounding_box.is_some())
    }
}

impl FromIterator<TextRegion> for OcrOutput {
    fn from_iter<I: IntoIterator<Item = TextRegion>>(iter: I) -> Self {
        let mut output = OcrOutput::default();
        for region in iter {
            output.push(region);
        }
        output
    }
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("{0} input is not supported by this engine")]
    Unsupported(&'static str),
    #[error("no OCR sidecar at {}", .0.display())]
    MissingSidecar(PathBuf),
    #[error("malformed OCR regions: {0}")]
    MalformedRegions(String),
    #[error("missing OCR model file: {}", .0.display())]
    MissingModel(PathBuf),
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("OCR backend failed: {0}")]
    Backend(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl OcrError {
    pub fn unsupported(input: &OcrInput) -> Self {
        OcrError::Unsupported(input.kind())
    }
}

/// Recognizes text regions in a banner capture.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, input: &OcrInput) -> Result<OcrOutput, OcrError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> TextRegion {
        TextRegion::unplaced(s)
    }

    #[test]
    fn test_collected_text_is_one_line_per_region() {
        let output: OcrOutput = ["50%", "OFF", ""].into_iter().map(text).collect();
        assert_eq!(output.text, "50%\nOFF\n");
        assert_eq!(output.regions.len(), 3);
        assert_eq!(OcrOutput::from_regions(vec![]).text, "");
    }

    #[test]
    fn test_placed_regions_skip_unplaced() {
        let placed = TextRegion::placed("SALE", crate::BoundingBox::new(1.0, 2.0, 30.0, 8.0), Some(0.8));
        let output = OcrOutput::from_regions(vec![text("?"), placed, text("!")]);
        let found: Vec<_> = output.placed_regions().map(|r| r.text.as_str()).collect();
        assert_eq!(found, ["SALE"]);
    }

    #[test]
    fn test_unsupported_names_the_input() {
        let err = OcrError::unsupported(&OcrInput::EncodedImage(vec![0]));
        assert_eq!(err.to_string(), "encoded image input is not supported by this engine");
        assert_eq!(OcrInput::ImagePath("a.png".into()).image_path(), Some(Path::new("a.png")));
    }
}
