//! Configuration loader with XDG-compliant path resolution
//!
//! Loads configuration from multiple locations with layered priority:
//! 1. `/etc/mk2env/config.toml` (lowest priority)
//! 2. `~/.config/mk2env/config.toml`
//! 3. `~/.mk2env.toml`
//! 4. `./.mk2env.toml` (highest priority)

use std::path::PathBuf;

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use super::model::Config;

/// Application name used for XDG directories
const APP_NAME: &str = "mk2env";

/// Prefix for environment variable overrides
const ENV_PREFIX: &str = "MK2ENV_";

/// Get XDG config search paths in priority order (lowest to highest)
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("/etc/{}/config.toml", APP_NAME)));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{}.toml", APP_NAME)));
    }

    paths.push(PathBuf::from(format!(".{}.toml", APP_NAME)));

    paths
}

/// Load configuration with XDG layering
///
/// Later files override earlier ones, an explicit `override_path` overrides
/// all of them, and `MK2ENV_` environment variables override everything.
/// A missing override file is logged and skipped.
pub fn load_config(override_path: Option<&str>) -> Result<Config> {
    load_config_from(&config_paths(), override_path)
}

/// Load configuration from an explicit list of layer files
///
/// `paths` are merged lowest priority first; files that do not exist are
/// skipped.
pub fn load_config_from(paths: &[PathBuf], override_path: Option<&str>) -> Result<Config> {
    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    for path in paths {
        if path.exists() {
            tracing::debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }
    }

    if let Some(path) = override_path {
        let path = PathBuf::from(path);
        if path.exists() {
            tracing::debug!("Loading override config from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        } else {
            tracing::warn!("Override config not found: {}", path.display());
        }
    }

    // MK2ENV_HEADER__SOURCE=settings.mk maps to header.source
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment.extract().context("Failed to load configuration")
}
