//! Command line arguments backing the `bannerscan` binary.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  name = "bannerscan",
  about = "Checks banner screenshots for promotional text overlapping significant background regions",
  version
)]
pub struct Args {
  /// Only log warnings and errors
  #[arg(long, short = 'q', global = true)]
  pub quiet: bool,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print version information
  Version,
  /// Run the full overlap check over a set of banner captures
  Analyze(AnalyzeArgs),
  /// Detect the significant region of a single capture
  Region {
    /// Capture to scan
    image: PathBuf,

    /// Rows to skip from the top (overrides the config file)
    #[arg(long)]
    top_ignore: Option<u32>,

    /// TOML file with detector thresholds
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
  },
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
  /// Screenshot of the banner as rendered
  #[arg(long)]
  pub full_banner: PathBuf,

  /// Screenshot of the banner with its text hidden
  #[arg(long)]
  pub no_text_banner: PathBuf,

  /// Screenshot of the banner with its picture hidden
  #[arg(long)]
  pub text_only_banner: Option<PathBuf>,

  /// Directory receiving the annotated images
  #[arg(long, short = 'o', default_value = bannerscan_rs::session::DEFAULT_OUTPUT_DIR)]
  pub output_dir: PathBuf,

  /// TOML file with detector thresholds
  #[arg(long, short = 'c')]
  pub config: Option<PathBuf>,

  /// JSON file with OCR regions for the full banner
  #[arg(long)]
  pub ocr_regions: Option<PathBuf>,

  /// Directory with the PaddleOCR models
  #[cfg(feature = "paddle")]
  #[arg(long, conflicts_with = "ocr_regions")]
  pub paddle_models: Option<PathBuf>,

  /// Write a JSON report of the run
  #[arg(long)]
  pub report: Option<PathBuf>,
}
