//! Configuration: `~/.config/xvv/config.toml`, or a file passed with `--config`.

use crate::xva::{ValidateOptions, DEFAULT_READ_BUFFER_BYTES};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/xvv/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XvvConfig {
    /// Default verbosity when `-v` is not given (0 = failures only).
    #[serde(default)]
    pub verbosity: u8,
    /// Size of the buffer block content is streamed through while hashing.
    #[serde(default = "default_read_buffer_bytes")]
    pub read_buffer_bytes: usize,
    /// Optional log file; logs go to stderr when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_read_buffer_bytes() -> usize {
    DEFAULT_READ_BUFFER_BYTES
}

impl Default for XvvConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES,
            log_file: None,
        }
    }
}

impl XvvConfig {
    /// Validation options from this config, with an optional verbosity override.
    pub fn validate_options(&self, verbosity: Option<u8>) -> ValidateOptions {
        ValidateOptions {
            verbosity: verbosity.unwrap_or(self.verbosity),
            read_buffer_bytes: self.read_buffer_bytes,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("xvv")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from `path`, or from the XDG config path when `None`.
///
/// A missing file yields defaults; nothing is written to disk.
pub fn load(path: Option<&Path>) -> Result<XvvConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if !path.exists() {
        return Ok(XvvConfig::default());
    }
    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: XvvConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
