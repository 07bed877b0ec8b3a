//! Exact pixel comparison of two screenshots.
//!
//! Both images are decoded to RGB8. Pixels that match are copied into the diff
//! image; pixels that differ in any channel are painted with the marker color.
//! Failures are returned as [`CompareError`] so one bad screenshot never aborts a batch.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Successful comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelDiff {
    /// True iff no pixel differed.
    pub identical: bool,
    pub differing_pixels: u64,
    /// Where the diff image was written.
    pub diff_image: PathBuf,
}

/// Result of comparing one screenshot pair.
pub type PixelDiffResult = Result<PixelDiff, CompareError>;

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("images have different dimensions: {}x{} vs {}x{}", original.0, original.1, target.0, target.1)]
    DimensionMismatch {
        original: (u32, u32),
        target: (u32, u32),
    },
    #[error("failed to save diff image {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Builds the diff image of two equally sized images and counts differing pixels.
pub fn diff_images(
    original: &RgbImage,
    target: &RgbImage,
    marker: [u8; 3],
) -> Result<(RgbImage, u64), CompareError> {
    if original.dimensions() != target.dimensions() {
        return Err(CompareError::DimensionMismatch {
            original: original.dimensions(),
            target: target.dimensions(),
        });
    }

    let marker = Rgb(marker);
    let mut differing = 0u64;
    let mut out = original.clone();
    // Row-major; `pixels_mut` and `pixels` walk the same order.
    for (dst, theirs) in out.pixels_mut().zip(target.pixels()) {
        if *dst != *theirs {
            *dst = marker;
            differing += 1;
        }
    }
    Ok((out, differing))
}

fn decode(path: &Path) -> Result<RgbImage, CompareError> {
    image::open(path)
        .map(|img| img.to_rgb8())
        .map_err(|source| CompareError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Compares two screenshot files and writes the diff image to `diff_path`
/// (format chosen from its extension). Nothing is written on error.
pub fn compare(original: &Path, target: &Path, diff_path: &Path, marker: [u8; 3]) -> PixelDiffResult {
    let result = decode(original)
        .and_then(|a| decode(target).map(|b| (a, b)))
        .and_then(|(a, b)| diff_images(&a, &b, marker))
        .and_then(|(diff, differing)| {
            diff.save(diff_path).map_err(|source| CompareError::Save {
                path: diff_path.to_path_buf(),
                source,
            })?;
            Ok(PixelDiff {
                identical: differing == 0,
                differing_pixels: differing,
                diff_image: diff_path.to_path_buf(),
            })
        });

    match &result {
        Ok(d) => tracing::debug!(
            original = %original.display(),
            target = %target.display(),
            differing = d.differing_pixels,
            "compared screenshots"
        ),
        Err(e) => tracing::warn!("error comparing images: {}", e),
    }
    result
}
