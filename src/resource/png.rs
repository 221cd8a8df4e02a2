use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageFormat, ImageReader};

use crate::error::Error;

/// Decodes the file at `path` as a PNG and converts it to 8-bit RGBA.
///
/// Images without an alpha channel come back fully opaque.
pub fn load_rgba(path: &Path) -> Result<image::RgbaImage> {
    let mut reader = ImageReader::open(path)
        .map_err(|error| Error::io(path.to_path_buf(), error.into()))?;
    reader.set_format(ImageFormat::Png);

    let decoded = reader
        .decode()
        .map_err(|error| Error::io(path.to_path_buf(), error))?;

    log::info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(decoded.into_rgba8())
}

/// Writes `image` to `path` as an RGBA PNG, creating parent directories as needed.
pub fn save_rgba(path: &Path, image: &image::RgbaImage) -> Result<()> {
    let to_error = |source: image::ImageError| Error::io(path.to_path_buf(), source);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|error| to_error(error.into()))?;
        }
    }

    let file = File::create(path).map_err(|error| to_error(error.into()))?;
    let mut writer = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Default, FilterType::Adaptive);
    image.write_with_encoder(encoder).map_err(to_error)?;

    // BufWriter swallows errors on drop
    writer.flush().map_err(|error| to_error(error.into()))?;

    log::info!(
        "Wrote {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(())
}
