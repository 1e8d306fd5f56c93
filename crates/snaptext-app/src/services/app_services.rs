// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Central service layer — owns the data directory, the persisted config,
// the lazily-created OCR engine, and the platform bridge, and provides
// async-friendly methods for the Dioxus UI to call.
//
// The recognizer is behind `Arc<Mutex<Option<...>>>`: model loading takes
// hundreds of milliseconds and happens at most once, on the blocking worker
// of the first recognition. All fields are cheaply cloneable so the struct
// can be passed into closures and async blocks without lifetime issues.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use snaptext_bridge::platform_bridge;
use snaptext_bridge::traits::PlatformBridge;
use snaptext_core::AppConfig;
use snaptext_core::error::{Result, SnapTextError};
use snaptext_core::types::ExportKind;
use snaptext_document::capture;
use snaptext_document::image::loader;
use snaptext_document::ocr::{RecognizerConfig, TextRecognizer, models_available};
use snaptext_document::{CsvExporter, PdfExporter};
use tracing::info;

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    recognizer: Arc<Mutex<Option<Arc<TextRecognizer>>>>,
    bridge: Arc<dyn PlatformBridge>,
    data_dir: PathBuf,
    config: Arc<Mutex<AppConfig>>,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");
        Ok(Self::with_data_dir(dir))
    }

    /// Fallback used when the regular data directory is unusable: everything
    /// lands in a temp directory and nothing persists across restarts.
    pub fn fallback() -> Result<Self> {
        let dir = std::env::temp_dir().join("snaptext");
        std::fs::create_dir_all(&dir)?;
        Ok(Self::with_data_dir(dir))
    }

    fn with_data_dir(dir: PathBuf) -> Self {
        // Load persisted config or use defaults
        let config = load_config(&dir).unwrap_or_default();

        Self {
            recognizer: Arc::new(Mutex::new(None)),
            bridge: Arc::from(platform_bridge()),
            data_dir: dir,
            config: Arc::new(Mutex::new(config)),
        }
    }

    // -- Platform bridge -----------------------------------------------------

    pub fn bridge(&self) -> &dyn PlatformBridge {
        &*self.bridge
    }

    // -- Recognition ---------------------------------------------------------

    /// The shared OCR engine, created on first use.
    fn recognizer(&self) -> Result<Arc<TextRecognizer>> {
        let mut guard = self.recognizer.lock().expect("recognizer lock poisoned");
        if let Some(ref recognizer) = *guard {
            return Ok(Arc::clone(recognizer));
        }
        let model_dir = self.config().ocr_model_dir;
        let recognizer = Arc::new(TextRecognizer::new(RecognizerConfig::from_override(
            model_dir.as_deref(),
        ))?);
        *guard = Some(Arc::clone(&recognizer));
        Ok(recognizer)
    }

    /// Whether the OCR model files are present (UI setup guidance).
    pub fn ocr_models_available(&self) -> bool {
        let model_dir = self.config().ocr_model_dir;
        models_available(model_dir.as_deref())
    }

    /// Decode the image at `path` and recognize its text.
    ///
    /// Decoding and inference are CPU-bound, so both run on a blocking
    /// worker; the first call also pays the one-time model load there.
    pub async fn recognize_file(&self, path: PathBuf) -> Result<String> {
        let services = self.clone();
        tokio::task::spawn_blocking(move || {
            let recognizer = services.recognizer()?;
            let image = loader::load_from_path(&path)?;
            recognizer.recognize_text(&image)
        })
        .await
        .map_err(|e| SnapTextError::OcrError(format!("recognition task failed: {e}")))?
    }

    // -- Export --------------------------------------------------------------

    /// Append `text` as one row to the CSV artifact. Returns the artifact path.
    pub fn export_csv(&self, text: &str) -> Result<PathBuf> {
        let path = self.artifact_path(ExportKind::Csv);
        let exporter = CsvExporter::new(&path);
        exporter.append_row(text)?;
        info!(path = %path.display(), "CSV exported");
        Ok(path)
    }

    /// Render `text` to the single-page PDF artifact, overwriting any
    /// previous export. Returns the artifact path.
    pub fn export_pdf(&self, text: &str) -> Result<PathBuf> {
        let path = self.artifact_path(ExportKind::Pdf);
        PdfExporter::new().write_to_file(text, &path)?;
        info!(path = %path.display(), "PDF exported");
        Ok(path)
    }

    /// Fixed path of an export artifact inside the documents directory.
    pub fn artifact_path(&self, kind: ExportKind) -> PathBuf {
        let config = self.config();
        self.documents_dir().join(config.filename_for(kind))
    }

    // -- Capture temp files --------------------------------------------------

    /// Create a fresh capture target file for the camera to write into.
    pub fn new_capture_file(&self) -> Result<PathBuf> {
        capture::create_capture_file(self.captures_dir())
    }

    /// Remove a capture temp file that was displaced or consumed, unless the
    /// config says to keep them.
    pub fn discard_capture(&self, path: &std::path::Path) {
        if self.config().keep_captures {
            return;
        }
        capture::remove_capture_file(path);
    }

    // -- Directories ---------------------------------------------------------

    /// Where export artifacts live.
    pub fn documents_dir(&self) -> PathBuf {
        let dir = self.data_dir.join("documents");
        std::fs::create_dir_all(&dir).ok();
        dir
    }

    fn captures_dir(&self) -> PathBuf {
        let dir = self.data_dir.join("captures");
        std::fs::create_dir_all(&dir).ok();
        dir
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    // -- Config persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &std::path::Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &std::path::Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn services_in(dir: &std::path::Path) -> AppServices {
        AppServices::with_data_dir(dir.to_path_buf())
    }

    #[test]
    fn csv_export_lands_in_documents_dir() {
        let dir = tempdir().unwrap();
        let svc = services_in(dir.path());

        let path = svc.export_csv("Hello World").unwrap();
        assert_eq!(path, svc.documents_dir().join("data.csv"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Text Data\n\"Hello World\"\n");
    }

    #[test]
    fn pdf_export_lands_in_documents_dir() {
        let dir = tempdir().unwrap();
        let svc = services_in(dir.path());

        let path = svc.export_pdf("Hello World").unwrap();
        assert_eq!(path, svc.documents_dir().join("data.pdf"));
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn capture_files_are_created_and_discarded() {
        let dir = tempdir().unwrap();
        let svc = services_in(dir.path());

        let capture = svc.new_capture_file().unwrap();
        assert!(capture.exists());

        svc.discard_capture(&capture);
        assert!(!capture.exists());
    }

    #[test]
    fn keep_captures_config_preserves_files() {
        let dir = tempdir().unwrap();
        let svc = services_in(dir.path());

        let mut config = svc.config();
        config.keep_captures = true;
        svc.save_config(&config).unwrap();

        let capture = svc.new_capture_file().unwrap();
        svc.discard_capture(&capture);
        assert!(capture.exists());
    }

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let svc = services_in(dir.path());

        let mut config = svc.config();
        config.csv_filename = "notes.csv".into();
        svc.save_config(&config).unwrap();

        let reloaded = services_in(dir.path());
        assert_eq!(reloaded.config().csv_filename, "notes.csv");
    }
}
