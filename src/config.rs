//! Host configuration.
//!
//! The manifest builder itself takes only a directory. This module covers the
//! few knobs a host may want to set once instead of passing flags every time,
//! read from an optional `pagenav.toml`:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! pages_dir = "pages"   # Directory scanned for page files
//! extension = "py"      # Page file extension, without the dot
//! ```
//!
//! User values are merged over stock defaults, so a config file only needs the
//! keys it changes. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "pagenav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings loaded from `pagenav.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Directory scanned for page files.
    pub pages_dir: String,
    /// Page file extension without the leading dot.
    pub extension: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            pages_dir: "pages".to_string(),
            extension: "py".to_string(),
        }
    }
}

impl NavConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pages_dir.is_empty() {
            return Err(ConfigError::Validation(
                "pages_dir must not be empty".into(),
            ));
        }
        if self.extension.is_empty() {
            return Err(ConfigError::Validation(
                "extension must not be empty".into(),
            ));
        }
        if self.extension.contains(['.', '/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "extension must be a bare suffix like \"py\", got {:?}",
                self.extension
            )));
        }
        Ok(())
    }
}

/// Stock defaults as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(NavConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value. `Ok(None)` if it doesn't exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.try_exists()? {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<NavConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load a specific config file, falling back to defaults when absent.
pub fn load_config_file(path: &Path) -> Result<NavConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(path)?)
}

/// A fully-commented stock `pagenav.toml`, printed by `pagenav gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# pagenav configuration
# =====================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory scanned for page files. Only files directly inside it are
# considered; subdirectories are ignored. A missing directory yields an
# empty navigation, not an error. Overridden by --dir.
pages_dir = "pages"

# Page file extension, without the dot. Matching is case-sensitive.
# Files are named {order}_{icon}_{topic}[_{title}].{extension}, e.g.
#   100_🐍_Python_Data_Types.py
extension = "py"
"##
}
