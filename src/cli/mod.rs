//! CLI module for mk2env
//!
//! Parses the command line and maps parse failures onto the usage error.

pub mod commands;

pub use commands::{parse_args, program_name, Cli};
