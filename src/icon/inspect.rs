//! Reading icon containers back for verification.

use icns::{IconFamily, IconType, Image, PixelFormat};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::icon::sizes::IconSize;

/// Open and parse an `.icns` file.
pub fn read_family(path: &Path) -> io::Result<IconFamily> {
    let file = File::open(path)?;
    IconFamily::read(BufReader::new(file))
}

/// List the rendition types stored in an `.icns` file.
pub fn rendition_types(path: &Path) -> io::Result<Vec<IconType>> {
    Ok(read_family(path)?.available_icons())
}

/// Decode the rendition for `size` as RGBA pixels.
pub fn decode_rendition(path: &Path, size: IconSize) -> io::Result<Image> {
    let icon_type = size.icon_type().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no icns element type for {} rendition", size),
        )
    })?;
    let family = read_family(path)?;
    let image = family.get_icon_with_type(icon_type)?;
    Ok(image.convert_to(PixelFormat::RGBA))
}
