//! Integration tests for the CLI commands

use assert_cmd::cargo::cargo_bin_cmd;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;

/// Dark banner with a bright square graphic at x 100..=160, y 20..=80 below a one-row seam.
fn write_no_text(path: &Path) {
    RgbImage::from_fn(200, 101, |x, y| {
        if y == 0 {
            Rgb([255, 255, 255])
        } else if (100..=160).contains(&x) && (21..=81).contains(&y) {
            Rgb([240, 240, 240])
        } else {
            Rgb([15, 15, 40])
        }
    })
    .save(path)
    .unwrap();
}

fn write_full(path: &Path) {
    RgbImage::from_pixel(200, 100, Rgb([15, 15, 40])).save(path).unwrap();
}

const REGIONS: &str = r#"[
  {"text": "BIG SALE", "confidence": 0.93,
   "bounding_box": {"x": 20.0, "y": 40.0, "width": 110.0, "height": 20.0}}
]"#;

#[test]
fn test_version_command() {
    let mut cmd = cargo_bin_cmd!("bannerscan");
    cmd.arg("version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("bannerscan "));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("bannerscan");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("bannerscan "));
}

#[test]
fn test_region_command() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("no_text.png");
    write_no_text(&image);

    let mut cmd = cargo_bin_cmd!("bannerscan");
    cmd.arg("region").arg(&image).arg("--top-ignore").arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(100, 21), (160, 81)"));
    assert!(dir.path().join("highlighted_banner_image.png").exists());
}

#[test]
fn test_region_command_on_blank_image() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("blank.png");
    RgbImage::from_pixel(30, 30, Rgb([0, 0, 0])).save(&image).unwrap();

    let mut cmd = cargo_bin_cmd!("bannerscan");
    cmd.arg("region").arg(&image);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no significant region"));
}

#[test]
fn test_analyze_reports_overlap() {
    let dir = tempfile::tempdir().unwrap();
    let full = dir.path().join("full_banner.png");
    let no_text = dir.path().join("no_text_raw.png");
    let regions = dir.path().join("regions.json");
    let out = dir.path().join("downloads");
    let report = dir.path().join("report.json");
    write_full(&full);
    write_no_text(&no_text);
    std::fs::write(&regions, REGIONS).unwrap();

    let mut cmd = cargo_bin_cmd!("bannerscan");
    cmd.arg("--quiet")
        .arg("analyze")
        .arg("--full-banner")
        .arg(&full)
        .arg("--no-text-banner")
        .arg(&no_text)
        .arg("--ocr-regions")
        .arg(&regions)
        .arg("--output-dir")
        .arg(&out)
        .arg("--report")
        .arg(&report);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("overlap detected"));

    assert!(out.join("banner_with_overlap.png").exists());
    let json = std::fs::read_to_string(&report).unwrap();
    assert!(json.contains("\"verdict\": \"overlap\""));
}

#[test]
fn test_analyze_with_bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bannerscan.toml");
    std::fs::write(&config, "binarize_threshold = \"high\"").unwrap();

    let mut cmd = cargo_bin_cmd!("bannerscan");
    cmd.arg("analyze")
        .arg("--full-banner")
        .arg(dir.path().join("a.png"))
        .arg("--no-text-banner")
        .arg(dir.path().join("b.png"))
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse detector config"));
}
