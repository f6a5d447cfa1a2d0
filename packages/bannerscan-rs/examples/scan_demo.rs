use anyhow::Result;
use bannerscan_ocr::SidecarOcrEngine;
use bannerscan_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let full_banner = std::env::args().nth(1).unwrap_or_else(|| "full_banner.png".to_string());
    let no_text_banner = std::env::args().nth(2).unwrap_or_else(|| "no_text_banner.png".to_string());

    // OCR regions are read from `<full banner stem>.ocr.json`
    let session = ScanSession::new("downloads", DetectorConfig::default(), Box::new(SidecarOcrEngine::new()))?;
    let report = session.analyze(&BannerCaptures::new(full_banner, no_text_banner)).await?;

    println!("Verdict: {}", report.verdict);
    if let Some(region) = report.significant_region {
        println!("  Significant region: {}", region);
    }
    if let Some(text) = report.text_region {
        println!("  Text: {}", text);
    }
    if let Some(overlap) = report.intersection {
        println!("  Overlap: {}", overlap);
    }
    for artifact in &report.artifacts {
        println!("  Wrote {}", artifact.display());
    }

    Ok(())
}
