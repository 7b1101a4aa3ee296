//! Host settings
//!
//! Read-only defaults are baked in; a JSON settings file may override any of
//! them. Loading is versioned and safe against corrupt files.

use calc_core::{EngineConfig, NumberFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize settings: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported settings version: {0}")]
    UnsupportedVersion(u32),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Display and engine settings for the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Version of the settings format (for future migrations)
    pub version: u32,
    /// Separator inserted between groups of three integer digits
    pub thousands_separator: String,
    /// Fractional digits kept when re-encoding computed values
    pub precision: usize,
    /// Optional cap on digits per entry
    pub max_digits: Option<usize>,
    /// Whether the history line is rendered
    pub show_history: bool,
}

impl HostSettings {
    /// Current version of the settings format
    pub const CURRENT_VERSION: u32 = 1;

    /// Engine configuration derived from these settings
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            format: NumberFormat::new(self.precision),
            max_digits: self.max_digits,
        }
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            thousands_separator: String::from(","),
            precision: NumberFormat::DEFAULT_PRECISION,
            max_digits: None,
            show_history: true,
        }
    }
}

/// Serializes settings to JSON bytes
pub fn serialize_settings(settings: &HostSettings) -> SettingsResult<Vec<u8>> {
    serde_json::to_vec_pretty(settings).map_err(|e| SettingsError::SerializationFailed(e.to_string()))
}

/// Deserializes settings from JSON bytes; missing fields take their defaults
pub fn deserialize_settings(bytes: &[u8]) -> SettingsResult<HostSettings> {
    let settings: HostSettings = serde_json::from_slice(bytes)
        .map_err(|e| SettingsError::DeserializationFailed(e.to_string()))?;

    if settings.version != HostSettings::CURRENT_VERSION {
        return Err(SettingsError::UnsupportedVersion(settings.version));
    }

    Ok(settings)
}

/// Attempts to load settings from bytes, falling back to defaults on error
pub fn load_settings_safe(bytes: &[u8]) -> HostSettings {
    deserialize_settings(bytes).unwrap_or_default()
}

/// Loads settings from a JSON file
pub fn load_settings_file(path: &Path) -> SettingsResult<HostSettings> {
    let bytes = fs::read(path)?;
    deserialize_settings(&bytes)
}
