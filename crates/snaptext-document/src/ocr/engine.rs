// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Text recognizer — extracts text from photos using the `ocrs` crate, a
// pure-Rust OCR engine backed by neural network models executed via `rten`.
//
// Two model files are required: a detection model that locates text regions
// and a recognition model that decodes characters from them. Both are cached
// under `$XDG_CACHE_HOME/ocrs` (typically `~/.cache/ocrs`); running the
// `ocrs-cli` tool once downloads them there. The model directory can be
// overridden through `AppConfig::ocr_model_dir`.
//
// Model loading is the expensive step, so the app constructs one
// `TextRecognizer` lazily and reuses it for every capture. ocrs/rten must be
// compiled in release mode — debug builds are 10-100x slower.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use snaptext_core::error::{Result, SnapTextError};
use tracing::{debug, info, instrument};

const DETECTION_MODEL_FILENAME: &str = "text-detection.rten";
const RECOGNITION_MODEL_FILENAME: &str = "text-recognition.rten";

/// Default directory for cached OCR model files, per the XDG Base Directory
/// spec.
fn default_model_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("ocrs")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".cache").join("ocrs")
    } else {
        // Last resort — current directory.
        PathBuf::from("ocrs-models")
    }
}

/// Model file locations for constructing a [`TextRecognizer`].
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    pub detection_model_path: PathBuf,
    pub recognition_model_path: PathBuf,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self::from_dir(default_model_dir())
    }
}

impl RecognizerConfig {
    /// Point both models at a directory containing `text-detection.rten`
    /// and `text-recognition.rten`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            detection_model_path: dir.join(DETECTION_MODEL_FILENAME),
            recognition_model_path: dir.join(RECOGNITION_MODEL_FILENAME),
        }
    }

    /// Config for an optional override directory, falling back to the cache
    /// location when `None`.
    pub fn from_override(dir: Option<&Path>) -> Self {
        match dir {
            Some(d) => Self::from_dir(d),
            None => Self::default(),
        }
    }

    /// Verify that both model files exist.
    pub fn validate(&self) -> Result<()> {
        for path in [&self.detection_model_path, &self.recognition_model_path] {
            if !path.exists() {
                return Err(SnapTextError::OcrError(format!(
                    "OCR model not found at {}; run `ocrs-cli` once to download the models",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

/// Wraps the `ocrs` engine with SnapText error handling and logging.
pub struct TextRecognizer {
    engine: OcrEngine,
}

impl TextRecognizer {
    /// Load both models and initialise the engine.
    ///
    /// # Errors
    ///
    /// Returns [`SnapTextError::OcrError`] if a model file is missing or
    /// corrupt.
    #[instrument(skip_all, fields(
        detection = %config.detection_model_path.display(),
        recognition = %config.recognition_model_path.display(),
    ))]
    pub fn new(config: RecognizerConfig) -> Result<Self> {
        config.validate()?;

        info!("loading OCR models");
        let detection_model = Model::load_file(&config.detection_model_path).map_err(|err| {
            SnapTextError::OcrError(format!(
                "failed to load detection model from {}: {}",
                config.detection_model_path.display(),
                err
            ))
        })?;
        let recognition_model =
            Model::load_file(&config.recognition_model_path).map_err(|err| {
                SnapTextError::OcrError(format!(
                    "failed to load recognition model from {}: {}",
                    config.recognition_model_path.display(),
                    err
                ))
            })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(|err| {
            SnapTextError::OcrError(format!("failed to initialise OCR engine: {err}"))
        })?;

        info!("text recognizer ready");
        Ok(Self { engine })
    }

    /// Recognize all text in a photo.
    ///
    /// Returns the recognized text as a single string with newline-separated
    /// lines — the exact value that seeds the presentation buffer. The input
    /// is converted to RGB8 internally; no size or format validation happens
    /// here, failures surface through the engine's own error channel.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn recognize_text(&self, image: &DynamicImage) -> Result<String> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();

        let source = ImageSource::from_bytes(rgb.as_raw(), (width, height)).map_err(|err| {
            SnapTextError::OcrError(format!(
                "failed to prepare image source ({width}x{height}): {err}"
            ))
        })?;

        let input = self
            .engine
            .prepare_input(source)
            .map_err(|err| SnapTextError::OcrError(format!("OCR preprocessing failed: {err}")))?;

        let text = self
            .engine
            .get_text(&input)
            .map_err(|err| SnapTextError::OcrError(format!("text recognition failed: {err}")))?;

        debug!(
            line_count = text.lines().count(),
            char_count = text.len(),
            "recognition complete"
        );
        Ok(text)
    }
}

/// Whether both model files are present in the given directory (or the
/// default cache when `None`). Used by the UI to show setup guidance before
/// the first capture.
pub fn models_available(override_dir: Option<&Path>) -> bool {
    RecognizerConfig::from_override(override_dir).validate().is_ok()
}

/// The model directory in effect, for display in diagnostics.
pub fn model_directory(override_dir: Option<&Path>) -> PathBuf {
    match override_dir {
        Some(d) => d.to_path_buf(),
        None => default_model_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_dir_joins_model_filenames() {
        let config = RecognizerConfig::from_dir("/opt/models");
        assert_eq!(
            config.detection_model_path,
            PathBuf::from("/opt/models/text-detection.rten")
        );
        assert_eq!(
            config.recognition_model_path,
            PathBuf::from("/opt/models/text-recognition.rten")
        );
    }

    #[test]
    fn override_dir_wins_over_default() {
        let config = RecognizerConfig::from_override(Some(Path::new("/custom")));
        assert!(config
            .detection_model_path
            .starts_with("/custom"));
    }

    #[test]
    fn default_config_ends_with_model_filenames() {
        let config = RecognizerConfig::default();
        assert!(config
            .detection_model_path
            .to_string_lossy()
            .ends_with(DETECTION_MODEL_FILENAME));
        assert!(config
            .recognition_model_path
            .to_string_lossy()
            .ends_with(RECOGNITION_MODEL_FILENAME));
    }

    #[test]
    fn validate_fails_for_missing_models() {
        let config = RecognizerConfig::from_dir("/nonexistent/ocr-models");
        assert!(config.validate().is_err());
        assert!(!models_available(Some(Path::new("/nonexistent/ocr-models"))));
    }
}
