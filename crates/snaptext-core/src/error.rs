// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Unified error types for SnapText.

use thiserror::Error;

/// Top-level error type for all SnapText operations.
#[derive(Debug, Error)]
pub enum SnapTextError {
    // -- Acquisition errors --
    #[error("camera permission denied")]
    CameraPermissionDenied,

    #[error("capture file error: {0}")]
    CaptureFile(String),

    #[error("image decoding failed: {0}")]
    ImageError(String),

    // -- Recognition errors --
    #[error("OCR failed: {0}")]
    OcrError(String),

    #[error("a recognition is already in progress")]
    RecognitionBusy,

    // -- Export errors --
    #[error("nothing to export: text is empty")]
    EmptyText,

    #[error("CSV export failed: {0}")]
    CsvError(String),

    #[error("PDF export failed: {0}")]
    PdfError(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SnapTextError>;
