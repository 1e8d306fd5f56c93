// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Global application state — reactive signal for the Dioxus UI.

use snaptext_core::session::CaptureSession;

/// Shared state accessible via `use_context`.
///
/// The capture session owns every piece of per-screen mutable state (text
/// buffer, snapshot, pending capture path, in-flight guard); the UI reads
/// and writes it through this wrapper only.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: CaptureSession,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: CaptureSession::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
