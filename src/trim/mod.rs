use std::path::Path;

use anyhow::Result;
use image::{GrayImage, Luma, RgbaImage};

use crate::error::Error;
use crate::resource::png;
use crate::trim::summary::TrimSummary;

pub mod summary;

/// Half-open pixel rectangle: `right` and `bottom` are exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    fn include(self, x: u32, y: u32) -> Self {
        Self {
            left: self.left.min(x),
            top: self.top.min(y),
            right: self.right.max(x + 1),
            bottom: self.bottom.max(y + 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TrimOutcome {
    Trimmed(TrimSummary),
    FullyTransparent,
}

pub fn alpha_channel(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y).0[3]])
    })
}

/// Smallest box containing every non-zero sample, or `None` if all samples are zero.
pub fn bounding_box(channel: &GrayImage) -> Option<BoundingBox> {
    channel
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel.0[0] > 0)
        .fold(None, |bounds, (x, y, _)| {
            Some(match bounds {
                Some(bounds) => bounds.include(x, y),
                None => BoundingBox {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                },
            })
        })
}

pub fn crop(image: &RgbaImage, bounds: BoundingBox) -> RgbaImage {
    image::imageops::crop_imm(
        image,
        bounds.left,
        bounds.top,
        bounds.width(),
        bounds.height(),
    )
    .to_image()
}

/// Crops the transparent border of the PNG at `input_path` and writes the result to `output_path`.
///
/// Nothing is written when every pixel is fully transparent.
pub fn trim(input_path: &Path, output_path: &Path) -> Result<TrimOutcome> {
    if !input_path.exists() {
        return Err(Error::not_found(input_path.to_path_buf()).into());
    }

    let image = png::load_rgba(input_path)?;

    let bounds = match bounding_box(&alpha_channel(&image)) {
        Some(bounds) => bounds,
        None => {
            log::warn!(
                "{} is fully transparent, no trimming possible",
                input_path.display()
            );
            return Ok(TrimOutcome::FullyTransparent);
        }
    };

    log::debug!("Bounding box of opaque pixels: {bounds:?}");

    let trimmed = crop(&image, bounds);
    png::save_rgba(output_path, &trimmed)?;

    Ok(TrimOutcome::Trimmed(TrimSummary {
        output_path: output_path.to_path_buf(),
        original_dimensions: image.dimensions(),
        trimmed_dimensions: trimmed.dimensions(),
        bounds,
    }))
}
