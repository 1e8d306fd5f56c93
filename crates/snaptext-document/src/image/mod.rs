// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Image loading — decode capture/gallery images and normalize their EXIF
// orientation before recognition.

pub mod loader;

pub use loader::{load_from_bytes, load_from_path};
