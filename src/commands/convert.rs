use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::icon::render::{build_family, load_rgba};
use crate::icon::{ConvertError, ICON_SIZES};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub source_width: u32,
    pub source_height: u32,
    pub renditions: usize,
}

impl ConvertSummary {
    pub fn is_square(&self) -> bool {
        self.source_width == self.source_height
    }
}

/// Convert `input` into an `.icns` at `output` holding every entry of
/// `ICON_SIZES`.
///
/// Nothing is written unless the input exists and decodes. An existing
/// output is overwritten.
pub fn run(input: &Path, output: &Path) -> Result<ConvertSummary, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    let source = load_rgba(input)?;
    let family = build_family(&source, &ICON_SIZES)?;

    let write_err = |source: io::Error| ConvertError::OutputWrite {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    family.write(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(ConvertSummary {
        source_width: source.width(),
        source_height: source.height(),
        renditions: family.elements.len(),
    })
}
