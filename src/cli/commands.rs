//! CLI definition using clap
//!
//! `mk2env [OPTIONS] <MAKE_CONFIG_FILE>`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{value_parser, Parser};

use crate::error::ConvertError;

/// Fallback program name for the usage line
const DEFAULT_PROGRAM: &str = "mk2env";

/// Convert Make configuration to shell variable assignments.
///
/// Reads `NAME := value` lines from a Make file and prints `NAME=value`
/// lines with `$(VAR)` references rewritten to `${VAR}`.
#[derive(Parser, Debug)]
#[command(name = "mk2env")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Make configuration file to convert (e.g. config.mk)
    #[arg(
        value_name = "MAKE_CONFIG_FILE",
        value_parser = value_parser!(OsString),
        allow_hyphen_values = true
    )]
    pub file: OsString,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Path of the Make configuration file, taken verbatim
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.file)
    }
}

/// Basename of `argv[0]`, used in the usage line
pub fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|a| Path::new(a).file_name())
        .map(|n| n.to_string_lossy().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

/// Parse command-line arguments
///
/// `--help` and `--version` come back as [`ConvertError::Info`] for the
/// caller to print. Every other parse failure (missing file, extra
/// arguments, unknown flags) becomes [`ConvertError::Usage`].
pub fn parse_args<I, T>(args: I) -> Result<Cli, ConvertError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());

    Cli::try_parse_from(&args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ConvertError::Info(e),
        _ => ConvertError::Usage { program },
    })
}
