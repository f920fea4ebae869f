//! Error types for mk2env
//!
//! Two failures are fatal by contract: a bad command line and an input file
//! that cannot be read. The remaining variants cover configuration and
//! output plumbing.

use std::io;

use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Wrong number of arguments (or any other command-line parse failure)
    #[error("Usage: {program} <make_config_file>")]
    Usage { program: String },

    /// The Make configuration file could not be opened or read
    #[error("Could not find {path}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// `--help` or `--version` was requested; carries the text to print
    #[error("{0}")]
    Info(clap::Error),
}

impl ConvertError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::Info(_) => 0,
            _ => 1,
        }
    }

    /// Whether the message is printed bare instead of behind an `Error:` label
    pub fn is_usage(&self) -> bool {
        matches!(self, ConvertError::Usage { .. })
    }

    /// Suggest a fix for the error, if one is known
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConvertError::Usage { .. } => {
                Some("Pass exactly one path, e.g. config.mk".to_string())
            }
            ConvertError::FileAccess { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => {
                    Some("Check the path; it is resolved from the current directory.".to_string())
                }
                io::ErrorKind::PermissionDenied => {
                    Some("Permission denied. Check the file permissions.".to_string())
                }
                _ => None,
            },
            ConvertError::Config(_) => {
                Some("Check your mk2env configuration file or MK2ENV_* variables".to_string())
            }
            ConvertError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                Some("Output closed early by the reading process.".to_string())
            }
            ConvertError::Io(_) | ConvertError::Info(_) => None,
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
