//! Configuration file support for serial-grabber.
//!
//! Provides YAML-based configuration through `serial-grabber.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use serial_grabber::application::dto::OutputFormat;
use serial_grabber::shared::security::validate_regular_file;
use serial_grabber::shared::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "serial-grabber.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<String>,
    pub group_anchor: Option<String>,
    pub scan_archives: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Report format named in the file, if any
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| format.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Location of the auto-discovered config file inside a logs folder.
pub fn default_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = default_config_path(dir);

    if !config_path.exists() {
        return Ok(None);
    }

    validate_regular_file(&config_path, "config file")?;
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.output_format() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: Use one of: csv, json, markdown.",
            e
        );
    }

    if let Some(ref anchor) = config.group_anchor {
        if anchor.trim().is_empty() {
            bail!(
                "Invalid config: group_anchor must not be empty.\n\n\
                 💡 Hint: Set it to the folder whose subfolders name your groups (e.g., \"Sites\"), or remove the field."
            );
        }
    }

    if let Some(ref output) = config.output {
        if output.trim().is_empty() {
            bail!("Invalid config: output must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        println!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
