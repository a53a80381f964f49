//! Decoding, resampling and packing renditions into an icon family.

use icns::{IconFamily, Image, PixelFormat};
use image::imageops::{self, FilterType};
use image::{ImageReader, RgbaImage};
use std::path::Path;

use crate::icon::error::ConvertError;
use crate::icon::sizes::IconSize;

/// Filter used for every rendition that needs resampling.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Decode an image file and normalize it to 8-bit RGBA.
///
/// The format is sniffed from the file contents, falling back to the
/// extension.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, ConvertError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| ConvertError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;

    let decoded = reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decoded.to_rgba8())
}

/// Resample `source` to the pixel dimensions of `size`.
///
/// Sources that already have the target dimensions are copied unchanged.
/// Aspect ratio is not preserved for non-square sources.
pub fn resample(source: &RgbaImage, size: IconSize) -> RgbaImage {
    let (width, height) = size.dimensions();
    if source.dimensions() == (width, height) {
        return source.clone();
    }
    imageops::resize(source, width, height, RESAMPLE_FILTER)
}

/// Build an icon family holding one rendition of `source` per entry in `sizes`.
pub fn build_family(source: &RgbaImage, sizes: &[IconSize]) -> Result<IconFamily, ConvertError> {
    let mut family = IconFamily::new();

    for &size in sizes {
        let icon_type = size
            .icon_type()
            .ok_or(ConvertError::UnsupportedSize(size))?;
        let rendition = resample(source, size);
        let (width, height) = rendition.dimensions();

        let image = Image::from_data(PixelFormat::RGBA, width, height, rendition.into_raw())
            .map_err(|source| ConvertError::Encode { size, source })?;

        family
            .add_icon_with_type(&image, icon_type)
            .map_err(|source| ConvertError::Encode { size, source })?;
    }

    Ok(family)
}
