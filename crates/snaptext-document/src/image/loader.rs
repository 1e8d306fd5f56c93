// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Decode an image from a capture file or picker selection.
//
// Camera output is frequently stored rotated, with the upright direction
// recorded in the EXIF `Orientation` tag. The recognizer consumes pixels as
// stored, so the loader bakes the orientation into the pixel data before
// anything downstream sees the image. Files without EXIF data (or with an
// unreadable block) pass through untouched.

use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

use exif::{In, Tag};
use image::DynamicImage;
use snaptext_core::error::{Result, SnapTextError};
use tracing::{debug, instrument, warn};

/// Decode the image at `path`, normalized to upright orientation.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_path(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let data = std::fs::read(path.as_ref()).map_err(|err| {
        SnapTextError::ImageError(format!(
            "failed to read {}: {}",
            path.as_ref().display(),
            err
        ))
    })?;
    load_from_bytes(&data)
}

/// Decode encoded image bytes (JPEG, PNG, TIFF, ...), normalized to upright
/// orientation.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn load_from_bytes(data: &[u8]) -> Result<DynamicImage> {
    let decoded = ::image::load_from_memory(data)
        .map_err(|err| SnapTextError::ImageError(format!("failed to decode image: {err}")))?;

    let orientation = read_orientation(&mut Cursor::new(data)).unwrap_or(1);
    let upright = apply_orientation(decoded, orientation);

    debug!(
        orientation,
        width = upright.width(),
        height = upright.height(),
        "image decoded"
    );
    Ok(upright)
}

/// Read the EXIF `Orientation` tag (1..=8), if present.
fn read_orientation<R: BufRead + Seek>(reader: &mut R) -> Option<u32> {
    let exif = exif::Reader::new().read_from_container(reader).ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    field.value.get_uint(0)
}

/// Transform the pixel data so the image displays upright.
///
/// Values follow the EXIF 2.3 orientation table; 1 is upright, anything
/// outside 1..=8 is treated as upright.
fn apply_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        1 => image,
        other => {
            warn!(orientation = other, "unrecognized EXIF orientation, keeping as-is");
            image
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png_bytes() {
        let data = png_bytes(8, 4);
        let img = load_from_bytes(&data).unwrap();
        assert_eq!((img.width(), img.height()), (8, 4));
    }

    #[test]
    fn png_without_exif_passes_through_upright() {
        // PNG carries no EXIF block, so the orientation lookup falls back to 1.
        let data = png_bytes(6, 3);
        let img = load_from_bytes(&data).unwrap();
        assert_eq!((img.width(), img.height()), (6, 3));
    }

    #[test]
    fn rotating_orientations_swap_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 5));
        for orientation in [5, 6, 7, 8] {
            let turned = apply_orientation(img.clone(), orientation);
            assert_eq!(
                (turned.width(), turned.height()),
                (5, 10),
                "orientation {orientation}"
            );
        }
    }

    #[test]
    fn flat_orientations_keep_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 5));
        for orientation in [1, 2, 3, 4, 0, 9] {
            let kept = apply_orientation(img.clone(), orientation);
            assert_eq!((kept.width(), kept.height()), (10, 5));
        }
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        let err = load_from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, SnapTextError::ImageError(_)));
    }
}
