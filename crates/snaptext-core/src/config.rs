// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::ExportKind;

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// File name of the append-only CSV artifact inside the documents dir.
    pub csv_filename: String,
    /// File name of the overwrite-on-export PDF artifact inside the documents dir.
    pub pdf_filename: String,
    /// Directory containing the OCR model files. `None` means the default
    /// ocrs cache directory.
    pub ocr_model_dir: Option<PathBuf>,
    /// Keep temporary capture files after recognition instead of deleting
    /// them (useful when debugging camera output).
    pub keep_captures: bool,
}

impl AppConfig {
    /// The configured artifact file name for an export kind.
    pub fn filename_for(&self, kind: ExportKind) -> &str {
        match kind {
            ExportKind::Csv => &self.csv_filename,
            ExportKind::Pdf => &self.pdf_filename,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_filename: ExportKind::Csv.default_filename().into(),
            pdf_filename: ExportKind::Pdf.default_filename().into(),
            ocr_model_dir: None,
            keep_captures: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filenames_follow_export_kinds() {
        let config = AppConfig::default();
        assert_eq!(config.filename_for(ExportKind::Csv), "data.csv");
        assert_eq!(config.filename_for(ExportKind::Pdf), "data.pdf");
    }
}
