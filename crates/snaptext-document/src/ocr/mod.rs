// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// On-device text recognition.

pub mod engine;

pub use engine::{RecognizerConfig, TextRecognizer, model_directory, models_available};
