//! Application configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::geolocation::ip_lookup::DEFAULT_ENDPOINT;

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreference::Dark => write!(f, "Dark"),
            ThemePreference::Light => write!(f, "Light"),
        }
    }
}

/// Where the current position comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeolocationSource {
    /// IP geolocation web service
    #[default]
    Ip,
    /// Coordinates from this file
    Fixed,
    /// No geolocation at all
    Disabled,
}

/// Tile imagery shown under the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileProvider {
    /// Stadia Maps outdoors style (default)
    #[default]
    StadiaOutdoors,
    /// OpenStreetMap standard style
    OpenStreetMap,
    /// No tiles, markers on a blank background
    None,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data directory path, also holding the tile cache
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Map settings
    pub map: MapSettings,
    /// Geolocation settings
    pub geolocation: GeolocationSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            map: MapSettings::default(),
            geolocation: GeolocationSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

/// Map view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Zoom level of the initial view
    pub zoom: u8,
    /// Highest zoom level the view may reach
    pub max_zoom: u8,
    /// Tile imagery
    pub tiles: TileProvider,
    /// Stadia Maps API key, needed outside localhost development
    pub api_key: Option<String>,
    /// Keep downloaded tiles in the data directory
    pub cache_tiles: bool,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom: 13,
            max_zoom: 20,
            tiles: TileProvider::StadiaOutdoors,
            api_key: None,
            cache_tiles: true,
        }
    }
}

/// Geolocation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationSettings {
    /// Provider to ask for the current position
    pub source: GeolocationSource,
    /// IP lookup endpoint
    pub endpoint: String,
    /// Latitude reported by the fixed provider
    pub fixed_latitude: f64,
    /// Longitude reported by the fixed provider
    pub fixed_longitude: f64,
}

impl Default for GeolocationSettings {
    fn default() -> Self {
        Self {
            source: GeolocationSource::Ip,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fixed_latitude: 38.7223,
            fixed_longitude: -9.1393,
        }
    }
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Theme preference
    pub theme: ThemePreference,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Dark,
            font_scale: 1.0,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "mapty", "Mapty")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
///
/// A default config file is written on first run so it can be edited.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_or_create_config(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load configuration from `path`, writing the defaults there if it is missing.
pub fn load_or_create_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if path.exists() {
        return load_config_from(path);
    }

    let config = AppConfig::default();
    save_config_to(&config, path)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(config)
}

/// Load configuration from `path`, falling back to defaults if it is missing.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
