//! Configuration model for mk2env
//!
//! Defines the structure for XDG-compliant layered configuration.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Generated-file banner settings
    #[serde(default)]
    pub header: HeaderConfig,
}

/// Generated-file banner settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeaderConfig {
    /// Emit the banner and the blank line after it
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Make file named in the banner
    #[serde(default = "default_source")]
    pub source: String,

    /// Make target named in the banner
    #[serde(default = "default_target")]
    pub target: String,
}

fn default_enabled() -> bool {
    true
}

fn default_source() -> String {
    "config.mk".to_string()
}

fn default_target() -> String {
    ".github/workflows/config.env".to_string()
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            source: default_source(),
            target: default_target(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.header.enabled);
        assert_eq!(config.header.source, "config.mk");
        assert_eq!(config.header.target, ".github/workflows/config.env");
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.header.enabled);
        assert_eq!(config.header.source, "config.mk");
    }

    #[test]
    fn test_deserialize_partial_header() {
        let toml = r#"
            [header]
            source = "settings.mk"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.header.source, "settings.mk");
        assert_eq!(config.header.target, ".github/workflows/config.env");
        assert!(config.header.enabled);
    }

    #[test]
    fn test_deserialize_full_header() {
        let toml = r#"
            [header]
            enabled = false
            source = "build.mk"
            target = "build.env"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.header.enabled);
        assert_eq!(config.header.source, "build.mk");
        assert_eq!(config.header.target, "build.env");
    }
}
