//! # bannerscan-rs
//!
//! Checks screenshots of a promotional banner for text that sits on top of a
//! significant background region, such as a product photo or a colored graphic.
//!
//! ## Pipeline
//!
//! - **Region detection**: binarizes the banner captured without its text layer
//!   and boxes the significant region
//! - **Text location**: runs OCR over the full banner and boxes all text,
//!   optionally ignoring text inside the significant region
//! - **Overlap evaluation**: strict rectangle intersection test
//! - **Overlap rendering**: outlines the intersection on the full banner
//!
//! Every stage writes an annotated PNG into the session's output directory.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bannerscan_rs::prelude::*;
//! use bannerscan_ocr::SidecarOcrEngine;
//!
//! let session = ScanSession::new("downloads", DetectorConfig::default(), Box::new(SidecarOcrEngine::new()))?;
//! let captures = BannerCaptures::new("full_banner.png", "no_text_banner.png");
//! let report = session.analyze(&captures).await?;
//! println!("{}", report.verdict);
//! ```

pub mod annotate;
pub mod capture;
pub mod config;
pub mod error;
pub mod geometry;
pub mod overlap_renderer;
pub mod region_detector;
pub mod session;
pub mod text_locator;

// Re-export commonly used types at the root level
pub use capture::{crop_top_rows, BannerCaptures};
pub use config::DetectorConfig;
pub use error::{ScanError, ScanResult};
pub use geometry::{overlaps, BoundingBox, BoxAccumulator};
pub use overlap_renderer::{render_overlap, OverlapRendering};
pub use region_detector::detect_significant_region;
pub use session::{ScanReport, ScanSession, Verdict};
pub use text_locator::{aggregate_text_regions, detect_text_bounding_box};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```ignore
/// use bannerscan_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        aggregate_text_regions, crop_top_rows, detect_significant_region, detect_text_bounding_box, overlaps,
        render_overlap, BannerCaptures, BoundingBox, BoxAccumulator, DetectorConfig, OverlapRendering, ScanError,
        ScanReport, ScanResult, ScanSession, Verdict,
    };
}
