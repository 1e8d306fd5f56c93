// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// SnapText — Core types, errors, and session state shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::SnapTextError;
pub use session::CaptureSession;
pub use types::*;
