use crate::icon::sizes::IconSize;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while converting an image into an icon container.
#[derive(Debug)]
pub enum ConvertError {
    /// Input file does not exist
    InputNotFound(PathBuf),
    /// Input file could not be opened or its format sniffed
    InputRead { path: PathBuf, source: io::Error },
    /// Input file is not a decodable image
    Decode { path: PathBuf, source: image::ImageError },
    /// Rendition size has no ICNS element type
    UnsupportedSize(IconSize),
    /// ICNS encoder rejected a rendition
    Encode { size: IconSize, source: io::Error },
    /// Output file could not be created or written
    OutputWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InputNotFound(path) => {
                write!(f, "input file {} does not exist", path.display())
            }
            ConvertError::InputRead { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ConvertError::Decode { path, source } => {
                write!(f, "failed to decode {}: {}", path.display(), source)
            }
            ConvertError::UnsupportedSize(size) => {
                write!(f, "no icns element type for {} rendition", size)
            }
            ConvertError::Encode { size, source } => {
                write!(f, "failed to encode {} rendition: {}", size, source)
            }
            ConvertError::OutputWrite { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InputRead { source, .. } => Some(source),
            ConvertError::Decode { source, .. } => Some(source),
            ConvertError::Encode { source, .. } => Some(source),
            ConvertError::OutputWrite { source, .. } => Some(source),
            ConvertError::InputNotFound(_) | ConvertError::UnsupportedSize(_) => None,
        }
    }
}
