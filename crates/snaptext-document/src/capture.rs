// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Capture temp files — the file-path targets handed to the native camera.
//
// Each capture gets a uniquely time-stamped file under the captures
// directory. The session tracks at most one path at a time; displaced and
// consumed files are removed through `remove_capture_file` so repeated
// captures do not grow storage unboundedly.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::Local;
use snaptext_core::error::{Result, SnapTextError};
use tracing::{debug, instrument, warn};

/// Create a fresh, empty capture target file inside `dir`.
///
/// The name is `IMG_<yyyyMMdd_HHmmss>.jpg`, with a numeric suffix when two
/// captures land in the same second. The file is created exclusively so the
/// returned path is guaranteed not to clobber an existing capture.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn create_capture_file(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|err| {
        SnapTextError::CaptureFile(format!("cannot create {}: {}", dir.display(), err))
    })?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();

    for n in 0u32..1000 {
        let name = if n == 0 {
            format!("IMG_{stamp}.jpg")
        } else {
            format!("IMG_{stamp}_{n}.jpg")
        };
        let candidate = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(_) => {
                debug!(path = %candidate.display(), "capture file created");
                return Ok(candidate);
            }
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(err) => {
                return Err(SnapTextError::CaptureFile(format!(
                    "cannot create {}: {}",
                    candidate.display(),
                    err
                )));
            }
        }
    }

    Err(SnapTextError::CaptureFile(format!(
        "no free capture file name under {}",
        dir.display()
    )))
}

/// Best-effort removal of a capture temp file (displaced by a new capture,
/// or consumed by recognition).
pub fn remove_capture_file(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(err) = std::fs::remove_file(path) {
        warn!(path = %path.display(), error = %err, "failed to remove capture file");
    } else {
        debug!(path = %path.display(), "capture file removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_timestamped_jpg_in_dir() {
        let dir = tempdir().unwrap();
        let path = create_capture_file(dir.path()).unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "jpg");
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("IMG_"));
    }

    #[test]
    fn same_second_captures_get_distinct_paths() {
        let dir = tempdir().unwrap();
        let first = create_capture_file(dir.path()).unwrap();
        let second = create_capture_file(dir.path()).unwrap();
        assert_ne!(first, second);
        assert!(first.exists() && second.exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("captures");
        let path = create_capture_file(&nested).unwrap();
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn remove_is_silent_for_missing_files() {
        // Only logs; must not panic or error.
        remove_capture_file("/nonexistent/IMG_00000000_000000.jpg");
    }
}
