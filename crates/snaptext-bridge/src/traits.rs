// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Platform-agnostic trait definitions for native capabilities.
//
// The capture screen needs two things from the platform: a camera that can
// write a photo to a path it is given, and an image picker. Platforms that
// lack a capability return `SnapTextError::PlatformUnavailable`.

use std::path::{Path, PathBuf};

use snaptext_core::error::Result;

/// Unified bridge grouping the native capabilities the app uses.
pub trait PlatformBridge: NativeCamera + NativeImagePicker + Send + Sync {
    /// Human-readable platform name (e.g. "Android", "Desktop").
    fn platform_name(&self) -> &str;
}

/// Capture photos with the device camera.
pub trait NativeCamera {
    /// Ask for camera permission.
    ///
    /// `Ok(true)` means the permission is held and a capture may proceed.
    /// `Ok(false)` means it is not currently granted — on mobile a system
    /// prompt may have been dispatched, and the user retries the capture
    /// once they have answered it.
    fn request_camera_permission(&self) -> Result<bool>;

    /// Launch the system camera targeting `output`.
    ///
    /// `Ok(true)` means a photo was written to `output`; `Ok(false)` means
    /// the user cancelled.
    fn capture_image(&self, output: &Path) -> Result<bool>;
}

/// Pick an existing image from the gallery / file system.
pub trait NativeImagePicker {
    /// Show the platform image picker.
    ///
    /// Returns the path of the chosen image, or `None` if cancelled.
    fn pick_image(&self) -> Result<Option<PathBuf>>;
}
