// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Capture session — the single object owning all per-screen mutable state:
// the pending capture path, the editable text buffer, the recognition
// snapshot, and the in-flight recognition guard.

use std::path::{Path, PathBuf};

use crate::error::{Result, SnapTextError};
use crate::types::CaptureId;

/// Whether a recognition task is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    /// A recognition tagged with this id is in flight. Only a completion
    /// carrying the same id may mutate the buffer.
    Recognizing(CaptureId),
}

/// All mutable state behind the capture screen.
///
/// Exactly one session exists per screen. Every async callback goes through
/// an explicit handle to this object instead of ambient globals, which keeps
/// the single-slot invariants (one pending capture path, one in-flight
/// recognition) visible in the type rather than implicit in timing.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    phase: SessionPhase,
    /// Path of the most recently initiated camera capture, if any.
    /// Single slot: a new capture displaces the old path.
    pending_capture: Option<PathBuf>,
    /// The editable text surface. Seeded by recognition, freely edited by
    /// the user afterwards; exports read this.
    buffer: String,
    /// Verbatim text of the last successful recognition. The copy action
    /// reads this, not the buffer.
    snapshot: Option<String>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            pending_capture: None,
            buffer: String::new(),
            snapshot: None,
        }
    }

    // -- Pending capture slot -------------------------------------------------

    /// Record the path a new camera capture will write to.
    ///
    /// Returns the displaced previous path, if any, so the caller can delete
    /// the stale temp file.
    pub fn set_pending_capture(&mut self, path: PathBuf) -> Option<PathBuf> {
        self.pending_capture.replace(path)
    }

    /// Take the pending capture path out of the slot (consumed by the
    /// recognition step).
    pub fn take_pending_capture(&mut self) -> Option<PathBuf> {
        self.pending_capture.take()
    }

    pub fn pending_capture(&self) -> Option<&Path> {
        self.pending_capture.as_deref()
    }

    // -- Recognition lifecycle ------------------------------------------------

    pub fn is_recognizing(&self) -> bool {
        matches!(self.phase, SessionPhase::Recognizing(_))
    }

    /// Begin a recognition, or refuse if one is already outstanding.
    ///
    /// A second capture while the first recognition is pending is rejected
    /// rather than raced: the caller surfaces [`SnapTextError::RecognitionBusy`]
    /// and leaves all state untouched.
    pub fn try_start_recognition(&mut self) -> Result<CaptureId> {
        if self.is_recognizing() {
            return Err(SnapTextError::RecognitionBusy);
        }
        let id = CaptureId::new();
        self.phase = SessionPhase::Recognizing(id);
        Ok(id)
    }

    /// Apply a successful recognition result.
    ///
    /// The buffer and snapshot are overwritten only when `id` matches the
    /// in-flight tag; a stale completion returns `false` and mutates nothing.
    pub fn complete_recognition(&mut self, id: CaptureId, text: String) -> bool {
        if self.phase != SessionPhase::Recognizing(id) {
            return false;
        }
        self.buffer = text.clone();
        self.snapshot = Some(text);
        self.phase = SessionPhase::Idle;
        true
    }

    /// Record a failed recognition. The buffer keeps its pre-call value
    /// (stale or empty). Returns `false` for a stale tag.
    pub fn fail_recognition(&mut self, id: CaptureId) -> bool {
        if self.phase != SessionPhase::Recognizing(id) {
            return false;
        }
        self.phase = SessionPhase::Idle;
        true
    }

    // -- Text surface ---------------------------------------------------------

    /// Direct user edit of the text surface.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Text for the copy-to-clipboard action.
    ///
    /// Policy: copy reflects the *original* recognition result, not the
    /// live buffer. The copy affordance appears next to a recognition result
    /// and promises that result; user edits only affect exports.
    pub fn copy_text(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Current buffer value prepared for export: trimmed, and rejected with
    /// [`SnapTextError::EmptyText`] when nothing remains.
    pub fn export_text(&self) -> Result<String> {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            return Err(SnapTextError::EmptyText);
        }
        Ok(trimmed.to_string())
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_recognition_sets_buffer_exactly() {
        let mut session = CaptureSession::new();
        let id = session.try_start_recognition().unwrap();
        assert!(session.complete_recognition(id, "Hello\nWorld".into()));
        assert_eq!(session.buffer(), "Hello\nWorld");
        assert!(!session.is_recognizing());
    }

    #[test]
    fn failed_recognition_leaves_buffer_unchanged() {
        let mut session = CaptureSession::new();
        let first = session.try_start_recognition().unwrap();
        session.complete_recognition(first, "previous".into());

        let second = session.try_start_recognition().unwrap();
        assert!(session.fail_recognition(second));
        assert_eq!(session.buffer(), "previous");
        assert!(!session.is_recognizing());
    }

    #[test]
    fn second_recognition_is_rejected_while_one_is_pending() {
        let mut session = CaptureSession::new();
        let _id = session.try_start_recognition().unwrap();
        assert!(matches!(
            session.try_start_recognition(),
            Err(SnapTextError::RecognitionBusy)
        ));
        // The original in-flight recognition is still the active one.
        assert!(session.is_recognizing());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut session = CaptureSession::new();
        let stale = session.try_start_recognition().unwrap();
        assert!(session.fail_recognition(stale));

        let current = session.try_start_recognition().unwrap();
        assert!(!session.complete_recognition(stale, "late result".into()));
        assert_eq!(session.buffer(), "");
        assert!(session.is_recognizing());

        assert!(session.complete_recognition(current, "on time".into()));
        assert_eq!(session.buffer(), "on time");
    }

    #[test]
    fn copy_returns_snapshot_not_edited_buffer() {
        let mut session = CaptureSession::new();
        let id = session.try_start_recognition().unwrap();
        session.complete_recognition(id, "ABC123".into());

        session.set_buffer("XYZ");
        assert_eq!(session.buffer(), "XYZ");
        assert_eq!(session.copy_text(), Some("ABC123"));
    }

    #[test]
    fn copy_unavailable_before_first_recognition() {
        let session = CaptureSession::new();
        assert_eq!(session.copy_text(), None);
        assert!(!session.has_snapshot());
    }

    #[test]
    fn export_text_trims_and_rejects_blank() {
        let mut session = CaptureSession::new();
        session.set_buffer("  spaced out  ");
        assert_eq!(session.export_text().unwrap(), "spaced out");

        session.set_buffer("   ");
        assert!(matches!(
            session.export_text(),
            Err(SnapTextError::EmptyText)
        ));

        session.set_buffer("");
        assert!(matches!(
            session.export_text(),
            Err(SnapTextError::EmptyText)
        ));
    }

    #[test]
    fn new_capture_displaces_previous_path() {
        let mut session = CaptureSession::new();
        assert!(session.set_pending_capture("/tmp/a.jpg".into()).is_none());
        let displaced = session.set_pending_capture("/tmp/b.jpg".into());
        assert_eq!(displaced, Some(PathBuf::from("/tmp/a.jpg")));
        assert_eq!(
            session.take_pending_capture(),
            Some(PathBuf::from("/tmp/b.jpg"))
        );
        assert!(session.pending_capture().is_none());
    }
}
