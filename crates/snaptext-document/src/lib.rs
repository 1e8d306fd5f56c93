// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// snaptext-document — document processing for SnapText.
//
// Provides image decoding with EXIF orientation normalization, on-device
// text recognition via the `ocrs` engine, capture temp-file management, and
// the two export paths (append-to-CSV, render-to-PDF).

pub mod capture;
pub mod export;
pub mod image;
pub mod ocr;

// Re-export the primary structs so callers can use `snaptext_document::CsvExporter` etc.
pub use export::csv::CsvExporter;
pub use export::pdf::PdfExporter;
pub use ocr::{RecognizerConfig, TextRecognizer};
