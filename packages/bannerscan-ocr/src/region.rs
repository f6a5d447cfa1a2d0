use serde::{Deserialize, Serialize};

/// Rectangle in image pixels, origin top-left, as OCR backends report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left and bottom-right corners.
    pub fn corners(&self) -> ((f32, f32), (f32, f32)) {
        (
            (self.x, self.y),
            (self.x + self.width, self.y + self.height),
        )
    }
}

/// One recognized run of text. Sidecar files may omit geometry and confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRegion {
    pub text: String,
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub confidence: Option<f32>,
}

impl TextRegion {
    pub fn placed(text: impl Into<String>, bounds: BoundingBox, confidence: Option<f32>) -> Self {
        Self {
            text: text.into(),
            bounding_box: Some(bounds),
            confidence,
        }
    }

    pub fn unplaced(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bounding_box: None,
            confidence: None,
        }
    }
}
