// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Desktop bridge — `rfd` file dialogs stand in for the gallery picker.
//
// There is no desktop camera capture flow; the capture button surfaces
// `PlatformUnavailable` and the picker path covers image input.

use std::path::{Path, PathBuf};

use snaptext_core::error::{Result, SnapTextError};
use snaptext_core::types::ImageKind;

use crate::traits::*;

/// Bridge used on every non-Android platform.
pub struct DesktopBridge;

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl NativeCamera for DesktopBridge {
    fn request_camera_permission(&self) -> Result<bool> {
        // Desktops have no runtime permission model.
        Ok(true)
    }

    fn capture_image(&self, _output: &Path) -> Result<bool> {
        tracing::warn!("NativeCamera::capture_image called on desktop bridge");
        Err(SnapTextError::PlatformUnavailable)
    }
}

impl NativeImagePicker for DesktopBridge {
    fn pick_image(&self) -> Result<Option<PathBuf>> {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", ImageKind::picker_extensions())
            .pick_file();
        if let Some(ref path) = picked {
            tracing::info!(path = %path.display(), "image picked");
        }
        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_camera_is_unavailable() {
        let bridge = DesktopBridge;
        assert!(bridge.request_camera_permission().unwrap());
        assert!(matches!(
            bridge.capture_image(Path::new("/tmp/out.jpg")),
            Err(SnapTextError::PlatformUnavailable)
        ));
    }
}
