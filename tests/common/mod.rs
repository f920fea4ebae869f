//! Common test utilities for mk2env tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Header emitted with the default configuration
pub const DEFAULT_HEADER: &str = "# Generated from config.mk - DO NOT EDIT DIRECTLY\n\
     # Edit config.mk instead and run 'make .github/workflows/config.env'\n\n";

/// Sample Make configuration mixing assignments with lines that must be dropped
pub const SAMPLE_CONFIG_MK: &str = r#"# Master build configuration
# Shared by the Makefile and CI

RUST_VERSION := 1.83.0
TOOLCHAIN := $(RUST_VERSION)-x86_64-unknown-linux-gnu

# Install locations
PREFIX := /usr/local
BIN_DIR := $(PREFIX)/bin
LEGACY = ignored
CFLAGS += -O2
DEBUG ?= 0
lowercase := ignored

all: build
	@echo "$(TOOLCHAIN)"
"#;

/// Creates a temporary directory with a config.mk
pub fn create_config_project(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = dir.path().join("config.mk");
    std::fs::write(&config_path, content).expect("Failed to write config.mk");
    (dir, config_path)
}

/// Command for the mk2env binary, isolated from user config and log settings
pub fn mk2env_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mk2env").expect("Failed to find mk2env binary");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("MK2ENV_HEADER__ENABLED")
        .env_remove("MK2ENV_HEADER__SOURCE")
        .env_remove("MK2ENV_HEADER__TARGET");
    cmd
}
