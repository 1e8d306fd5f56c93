// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// SnapText — native platform bridge abstractions.
//
// Defines the capability traits and the platform dispatch that lets the UI
// talk to the camera and image picker through one interface, whether the
// backend is a desktop file dialog or the Android SDK via JNI.

pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod desktop;

use traits::PlatformBridge;

/// The bridge implementation for the target operating system.
pub fn platform_bridge() -> Box<dyn PlatformBridge> {
    #[cfg(target_os = "android")]
    {
        // Android: invokes SDK methods on the ART runtime via `jni`.
        Box::new(android::AndroidBridge::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        // Desktop: file dialogs via `rfd`; no camera capture flow.
        Box::new(desktop::DesktopBridge)
    }
}
