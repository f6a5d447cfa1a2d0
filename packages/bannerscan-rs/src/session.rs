//! One scan run over a set of banner captures.
//!
//! A [`ScanSession`] owns everything a run needs: the output directory every
//! annotated image is written to, the detector configuration and the OCR
//! engine. Stages run strictly in order. Region detection and overlap
//! rendering failures are logged and end the run early; OCR failures abort it.
use anyhow::{Context, Result};
use bannerscan_ocr::OcrEngine;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::capture::{crop_top_rows, BannerCaptures, CROPPED_NO_TEXT_FILE_NAME};
use crate::config::DetectorConfig;
use crate::error::ScanResult;
use crate::geometry::{overlaps, BoundingBox};
use crate::overlap_renderer::render_overlap;
use crate::region_detector::{detect_significant_region, highlight_path_for};
use crate::text_locator::{detect_text_bounding_box, SELECTED_TEXT_FILE_NAME};

pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NoSignificantRegion,
    NoText,
    NoOverlap,
    Overlap,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Verdict::NoSignificantRegion => "no significant region",
            Verdict::NoText => "no text",
            Verdict::NoOverlap => "no overlap",
            Verdict::Overlap => "overlap detected",
        };
        f.write_str(text)
    }
}

/// Everything a run found and wrote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub generated_at: String,
    pub captures: BannerCaptures,
    pub verdict: Verdict,
    pub significant_region: Option<BoundingBox>,
    pub text_region: Option<BoundingBox>,
    pub intersection: Option<BoundingBox>,
    /// Annotated images written during the run, in order
    pub artifacts: Vec<PathBuf>,
}

impl ScanReport {
    fn new(captures: &BannerCaptures) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            captures: captures.clone(),
            verdict: Verdict::NoSignificantRegion,
            significant_region: None,
            text_region: None,
            intersection: None,
            artifacts: Vec::new(),
        }
    }

    pub fn has_overlap(&self) -> bool {
        self.verdict == Verdict::Overlap
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize scan report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write scan report to {}", path.display()))?;
        Ok(())
    }
}

pub struct ScanSession {
    output_dir: PathBuf,
    config: DetectorConfig,
    engine: Box<dyn OcrEngine>,
}

impl ScanSession {
    /// Creates the output directory if needed.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        config: DetectorConfig,
        engine: Box<dyn OcrEngine>,
    ) -> ScanResult<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            config,
            engine,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub async fn analyze(&self, captures: &BannerCaptures) -> ScanResult<ScanReport> {
        let mut report = ScanReport::new(captures);
        let config = &self.config;

        let significant = match self.find_significant_region(captures, &mut report) {
            Ok(Some(bounds)) => bounds,
            Ok(None) => {
                info!("No significant content detected.");
                return Ok(report);
            }
            Err(e) => {
                warn!("Error processing the image: {}", e);
                return Ok(report);
            }
        };
        report.significant_region = Some(significant);

        let text_output = self.output_dir.join(SELECTED_TEXT_FILE_NAME);
        let exclude = config.exclude_significant_text.then_some(&significant);
        let text_box = detect_text_bounding_box(
            self.engine.as_ref(),
            &captures.full_banner,
            &text_output,
            exclude,
            config,
        )
        .await?;
        report.artifacts.push(text_output);
        report.text_region = text_box;

        let Some(text_box) = text_box else {
            info!("No text detected in {}", captures.full_banner.display());
            report.verdict = Verdict::NoText;
            return Ok(report);
        };

        if !overlaps(&significant, &text_box) {
            info!("No overlap detected between text and significant regions.");
            report.verdict = Verdict::NoOverlap;
            return Ok(report);
        }

        report.verdict = Verdict::Overlap;
        match render_overlap(
            &captures.full_banner,
            &text_box,
            &significant,
            &self.output_dir,
            config,
        ) {
            Ok(rendering) => {
                report.intersection = rendering.intersection;
                report.artifacts.push(rendering.path);
            }
            Err(e) => warn!("Error drawing overlap: {}", e),
        }

        Ok(report)
    }

    fn find_significant_region(
        &self,
        captures: &BannerCaptures,
        report: &mut ScanReport,
    ) -> ScanResult<Option<BoundingBox>> {
        let cropped = crop_top_rows(
            &captures.no_text_banner,
            self.config.crop_top_rows,
            &self.output_dir.join(CROPPED_NO_TEXT_FILE_NAME),
        )?;
        let region = detect_significant_region(&cropped, self.config.top_ignore_rows, &self.config)?;
        report.artifacts.push(highlight_path_for(&cropped));
        Ok(region)
    }
}
