//! Configuration module for mk2env
//!
//! Provides XDG-compliant layered configuration loading for the
//! generated-file banner.

pub mod loader;
pub mod model;

pub use loader::{config_paths, load_config, load_config_from};
pub use model::*;
