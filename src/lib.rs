//! mk2env - Make configuration to shell assignments
//!
//! Converts the simply-expanded assignments of a Make configuration file
//! into lines a shell (or a GitHub Actions env file) can consume:
//!
//! ```text
//! FOO := bar            FOO=bar
//! BAZ := $(FOO)/baz     BAZ=${FOO}/baz
//! ```
//!
//! ## Features
//!
//! - `NAME := value` lines are rewritten, everything else is dropped
//! - `$(VAR)` references become `${VAR}` without being resolved
//! - A generated-file banner, configurable through XDG-layered config

pub mod cli;
pub mod config;
pub mod error;
pub mod translate;

pub use cli::Cli;
pub use config::Config;
pub use error::{ConvertError, ConvertResult};
pub use translate::{parse_assignment, rewrite_expansions, translate_file, translate_str};
pub use translate::{Assignment, Header, Translation};
