//! Command-line parsing.
//!
//! Exactly two positional arguments are accepted and nothing else decides
//! the outcome: there are no flags, and arguments starting with `-` are taken
//! as paths.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: png2icns <input.png> <output.icns>";

#[derive(Parser, Debug)]
#[command(name = "png2icns")]
#[command(about = "Convert a PNG into a multi-resolution macOS .icns icon")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Source image (PNG, or any other format the decoder recognizes)
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,
    /// Path to write the .icns file to (overwritten if it exists)
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,
}

/// What the binary should do with its arguments.
#[derive(Debug)]
pub enum Invocation {
    Convert(Cli),
    /// Wrong argument count
    Usage,
}

pub fn parse<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Convert(cli),
        Err(_) => Invocation::Usage,
    }
}
