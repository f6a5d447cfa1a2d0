mod cli;

use anyhow::{Context, Result};
use bannerscan_ocr::{OcrEngine, SidecarOcrEngine};
use bannerscan_rs::{detect_significant_region, BannerCaptures, DetectorConfig, ScanSession};
use clap::Parser;
use cli::{AnalyzeArgs, Args, Commands};
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(quiet: bool) {
  let default_level = if quiet { "warn" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  // stdout carries the verdict only
  fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_config(path: Option<&Path>) -> Result<DetectorConfig> {
  match path {
    Some(path) => DetectorConfig::from_toml_file(path),
    None => Ok(DetectorConfig::default()),
  }
}

fn sidecar_engine(args: &AnalyzeArgs) -> Box<dyn OcrEngine> {
  match &args.ocr_regions {
    Some(path) => Box::new(SidecarOcrEngine::with_file(path)),
    None => Box::new(SidecarOcrEngine::new()),
  }
}

#[cfg(feature = "paddle")]
fn build_engine(args: &AnalyzeArgs) -> Result<Box<dyn OcrEngine>> {
  if let Some(models) = &args.paddle_models {
    let engine = bannerscan_ocr::PaddleOcrEngine::new(models).context("Failed to load PaddleOCR models")?;
    return Ok(Box::new(engine));
  }
  Ok(sidecar_engine(args))
}

#[cfg(not(feature = "paddle"))]
fn build_engine(args: &AnalyzeArgs) -> Result<Box<dyn OcrEngine>> {
  Ok(sidecar_engine(args))
}

async fn analyze(args: AnalyzeArgs) -> Result<()> {
  let config = load_config(args.config.as_deref())?;
  let engine = build_engine(&args)?;
  let session = ScanSession::new(&args.output_dir, config, engine)
    .with_context(|| format!("Failed to prepare output directory {}", args.output_dir.display()))?;

  let mut captures = BannerCaptures::new(args.full_banner, args.no_text_banner);
  if let Some(text_only) = args.text_only_banner {
    captures = captures.with_text_only(text_only);
  }

  let scan = session.analyze(&captures).await.context("Scan failed")?;
  if let Some(path) = &args.report {
    scan.write_json(path)?;
    tracing::info!("Report saved to {}", path.display());
  }
  println!("{}", scan.verdict);
  Ok(())
}

async fn run(args: Args) -> Result<()> {
  match args.command {
    Commands::Version => {
      println!("bannerscan {}", env!("CARGO_PKG_VERSION"));
    }
    Commands::Analyze(analyze_args) => analyze(analyze_args).await?,
    Commands::Region {
      image,
      top_ignore,
      config,
    } => {
      let config = load_config(config.as_deref())?;
      let top_ignore = top_ignore.unwrap_or(config.top_ignore_rows);
      match detect_significant_region(&image, top_ignore, &config)? {
        Some(bounds) => println!("{}", bounds),
        None => println!("no significant region"),
      }
    }
  }
  Ok(())
}

#[tokio::main]
async fn main() {
  let args = Args::parse();
  init_logging(args.quiet);

  if let Err(e) = run(args).await {
    eprintln!("Error: {:#}", e);
    std::process::exit(1);
  }
}
