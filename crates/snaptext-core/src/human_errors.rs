// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Human-readable error messages for the status line.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Nothing here is retried automatically — the user retries the triggering
// action manually.

use crate::error::SnapTextError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worth trying again as-is (blurry photo, busy recognizer).
    Transient,
    /// User must do something first (grant permission, enter text).
    ActionRequired,
    /// Cannot be fixed by retrying — damaged file, missing platform feature.
    Permanent,
}

/// A plain-English error with an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as the status line).
    pub message: String,
    /// What the user should try (shown as body text where there is room).
    pub suggestion: String,
    /// Severity level (drives icon/colour in the UI).
    pub severity: Severity,
}

/// Convert a [`SnapTextError`] into a [`HumanError`].
pub fn humanize_error(err: &SnapTextError) -> HumanError {
    match err {
        // -- Acquisition --
        SnapTextError::CameraPermissionDenied => HumanError {
            message: "Camera permission denied.".into(),
            suggestion: "Allow camera access for SnapText in system settings, then try again."
                .into(),
            severity: Severity::ActionRequired,
        },

        SnapTextError::CaptureFile(detail) => HumanError {
            message: "Couldn't create a file for the photo.".into(),
            suggestion: format!("Check that the device has free storage space. ({detail})"),
            severity: Severity::Transient,
        },

        SnapTextError::ImageError(_) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try a JPEG or PNG."
                .into(),
            severity: Severity::Permanent,
        },

        // -- Recognition --
        SnapTextError::OcrError(detail) => HumanError {
            message: format!("Failed to recognize text: {detail}"),
            suggestion:
                "Try taking the photo again with better lighting, making sure the text is in focus."
                    .into(),
            severity: Severity::Transient,
        },

        SnapTextError::RecognitionBusy => HumanError {
            message: "Still reading the previous photo.".into(),
            suggestion: "Wait for the current text to appear, then capture again.".into(),
            severity: Severity::Transient,
        },

        // -- Export --
        SnapTextError::EmptyText => HumanError {
            message: "Please enter Text".into(),
            suggestion: "Recognize a photo or type some text before exporting.".into(),
            severity: Severity::ActionRequired,
        },

        SnapTextError::CsvError(detail) => HumanError {
            message: "Error saving CSV file.".into(),
            suggestion: format!("Check free space and try again. ({detail})"),
            severity: Severity::Transient,
        },

        SnapTextError::PdfError(detail) => HumanError {
            message: "Error saving PDF file.".into(),
            suggestion: format!("Check free space and try again. ({detail})"),
            severity: Severity::Transient,
        },

        // -- Storage / persistence --
        SnapTextError::Io(e) => HumanError {
            message: "A file operation didn't work.".into(),
            suggestion: format!("Try again. ({e})"),
            severity: Severity::Transient,
        },

        SnapTextError::Serialization(_) => HumanError {
            message: "The app settings couldn't be read.".into(),
            suggestion: "Defaults are being used. Saving settings again will fix the file.".into(),
            severity: Severity::Permanent,
        },

        // -- Platform bridge --
        SnapTextError::Bridge(detail) => HumanError {
            message: "A device feature didn't respond.".into(),
            suggestion: format!("Try again. ({detail})"),
            severity: Severity::Transient,
        },

        SnapTextError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on this device.".into(),
            suggestion: "Use the gallery button to pick an existing image instead.".into(),
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_uses_the_canonical_message() {
        let human = humanize_error(&SnapTextError::EmptyText);
        assert_eq!(human.message, "Please enter Text");
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn ocr_failure_carries_the_engine_description() {
        let human = humanize_error(&SnapTextError::OcrError("model exploded".into()));
        assert!(human.message.contains("model exploded"));
        assert_eq!(human.severity, Severity::Transient);
    }

    #[test]
    fn permission_denial_requires_action() {
        let human = humanize_error(&SnapTextError::CameraPermissionDenied);
        assert_eq!(human.severity, Severity::ActionRequired);
    }
}
