// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Core domain types for SnapText.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tag identifying one recognition attempt.
///
/// Issued by [`crate::session::CaptureSession::try_start_recognition`] and
/// echoed back when the result arrives. A completion carrying a stale tag is
/// discarded, which makes late results from an abandoned capture inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureId(pub Uuid);

impl CaptureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CaptureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CaptureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the image being recognized came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureSource {
    /// Freshly captured with the device camera.
    Camera,
    /// Picked from the gallery / file system.
    Gallery,
}

/// Image formats the picker accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageKind {
    Jpeg,
    Png,
    Tiff,
    Bmp,
    WebP,
}

impl ImageKind {
    /// MIME type string, used by the Android media picker intent.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Tiff => "image/tiff",
            Self::Bmp => "image/bmp",
            Self::WebP => "image/webp",
        }
    }

    /// Infer the kind from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "tif" | "tiff" => Some(Self::Tiff),
            "bmp" => Some(Self::Bmp),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Extensions offered in desktop file-picker filters.
    pub fn picker_extensions() -> &'static [&'static str] {
        &["jpg", "jpeg", "png", "tif", "tiff", "bmp", "webp"]
    }
}

/// The two export artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportKind {
    /// One appended row per export.
    Csv,
    /// Single-page document, overwritten per export.
    Pdf,
}

impl ExportKind {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Pdf => "application/pdf",
        }
    }

    /// Fixed artifact file name inside the documents directory.
    pub fn default_filename(&self) -> &'static str {
        match self {
            Self::Csv => "data.csv",
            Self::Pdf => "data.pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_kind_from_extension() {
        assert_eq!(ImageKind::from_extension("JPG"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_extension("tiff"), Some(ImageKind::Tiff));
        assert_eq!(ImageKind::from_extension("pdf"), None);
    }

    #[test]
    fn export_kind_filenames() {
        assert_eq!(ExportKind::Csv.default_filename(), "data.csv");
        assert_eq!(ExportKind::Pdf.default_filename(), "data.pdf");
    }
}
