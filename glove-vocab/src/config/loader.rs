// src/config/loader.rs
use crate::config::Settings;
use crate::errors::VocabError;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Loads settings from a TOML file. Keys left out of the file keep their defaults.
///
/// # Arguments
///
/// * `path` - The TOML file to read
///
/// # Returns
///
/// * `Ok(Settings)` containing the validated settings
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown keys
/// * A value is out of range
#[inline]
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let settings: Settings = toml::from_str(&content).map_err(|e| {
        VocabError::Configuration(format!("{}: {e}", path.display()))
    })?;
    settings.validate()?;

    Ok(settings)
}
