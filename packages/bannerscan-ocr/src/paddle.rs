use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;

use crate::engine::{OcrEngine, OcrError, OcrInput, OcrOutput};
use crate::region::{BoundingBox, TextRegion};

const DETECTION_MODEL: &str = "PP-OCRv5_mobile_det.mnn";
const RECOGNITION_MODEL: &str = "en_PP-OCRv5_mobile_rec_infer.mnn";
const CHARSET: &str = "ppocr_keys_en.txt";

/// PaddleOCR (PP-OCRv5, English) running on MNN through `ocr-rs`.
pub struct PaddleOcrEngine {
    inner: Arc<Mutex<ocr_rs::OcrEngine>>,
}

/// Detection model, recognition model and charset inside `models_dir`.
pub fn model_paths(models_dir: &Path) -> Result<(PathBuf, PathBuf, PathBuf), OcrError> {
    let paths = (
        models_dir.join(DETECTION_MODEL),
        models_dir.join(RECOGNITION_MODEL),
        models_dir.join(CHARSET),
    );
    for path in [&paths.0, &paths.1, &paths.2] {
        if !path.exists() {
            return Err(OcrError::MissingModel(path.clone()));
        }
    }
    Ok(paths)
}

impl PaddleOcrEngine {
    pub fn new(models_dir: &Path) -> Result<Self, OcrError> {
        let (det, rec, charset) = model_paths(models_dir)?;
        let engine = ocr_rs::OcrEngine::new(&det, &rec, &charset, None)
            .map_err(|e| OcrError::Backend(format!("failed to create OCR engine: {e}")))?;
        info!("loaded PaddleOCR models from {}", models_dir.display());
        Ok(Self {
            inner: Arc::new(Mutex::new(engine)),
        })
    }
}

fn recognize_image(
    engine: &Mutex<ocr_rs::OcrEngine>,
    img: &image::DynamicImage,
) -> Result<Vec<TextRegion>, OcrError> {
    let engine = engine
        .lock()
        .map_err(|_| OcrError::Backend("OCR engine lock poisoned".to_string()))?;
    let raw = engine
        .recognize(img)
        .map_err(|e| OcrError::Backend(e.to_string()))?;

    Ok(raw
        .into_iter()
        .filter(|r| !r.text.trim().is_empty())
        .map(|r| {
            let rect = &r.bbox.rect;
            let bounds = BoundingBox::new(
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            );
            TextRegion::placed(r.text, bounds, Some(r.confidence))
        })
        .collect())
}

#[async_trait]
impl OcrEngine for PaddleOcrEngine {
    async fn recognize(&self, input: &OcrInput) -> Result<OcrOutput, OcrError> {
        let input = input.clone();
        let inner = Arc::clone(&self.inner);
        let regions = tokio::task::spawn_blocking(move || {
            let img = match &input {
                OcrInput::ImagePath(path) => image::open(path),
                OcrInput::EncodedImage(data) => image::load_from_memory(data),
            }
            .map_err(|e| OcrError::Decode(e.to_string()))?;
            recognize_image(&inner, &img)
        })
        .await
        .map_err(|e| OcrError::Backend(e.to_string()))??;

        Ok(regions.into_iter().collect())
    }
}
