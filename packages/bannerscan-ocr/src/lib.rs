pub mod engine;
pub mod region;
pub mod sidecar;

#[cfg(feature = "paddle")]
pub mod paddle;

pub use engine::{OcrEngine, OcrError, OcrInput, OcrOutput};
pub use region::{BoundingBox, TextRegion};
pub use sidecar::SidecarOcrEngine;

#[cfg(feature = "paddle")]
pub use paddle::PaddleOcrEngine;
