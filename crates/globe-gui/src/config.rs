//! Host configuration.
//!
//! Read once at startup from `config.toml` in the platform config directory.
//! The console never writes it back.
//!
//! ```toml
//! breakpoint = 768.0
//! initial_view = "SYSTEM"
//! initial_zoom = 35
//! initial_body = "mars"
//! catalog_path = "/opt/globe/catalog.json"
//! ```

use std::path::{Path, PathBuf};

use globe_model::{Catalog, ViewMode, ZoomLevel};
use serde::{Deserialize, Serialize};

use crate::error::{GuiError, Result};

/// Viewport width below which panels fall back to their mobile layout.
pub const DEFAULT_BREAKPOINT: f32 = 768.0;

/// Startup configuration for the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Responsive breakpoint in logical pixels.
    pub breakpoint: f32,

    /// View mode at startup.
    pub initial_view: ViewMode,

    /// Zoom at startup.
    pub initial_zoom: ZoomLevel,

    /// Body selected at startup.
    pub initial_body: String,

    /// Optional JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,

    /// Initial window size.
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            initial_view: ViewMode::default(),
            initial_zoom: ZoomLevel::default(),
            initial_body: "earth".to_string(),
            catalog_path: None,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl HostConfig {
    /// Load the config from the default path.
    ///
    /// A missing file yields defaults silently; an unreadable or malformed
    /// one yields defaults with a warning.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(Some(config)) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, suggestion = err.suggestion(), "Using default config");
                Self::default()
            }
        }
    }

    /// Load the config from a specific path.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(GuiError::config_read(path, err)),
        };
        Self::from_toml_str(&content)
            .map(Some)
            .map_err(|err| GuiError::config_parse(path, err))
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "GlobeConsole", "globe-console")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Resolve the catalog to show.
    ///
    /// Uses the built-in catalog unless `catalog_path` is set; a catalog that
    /// cannot be read or parsed is logged and replaced by the built-in one.
    pub fn catalog(&self) -> Catalog {
        let Some(path) = &self.catalog_path else {
            return Catalog::builtin();
        };
        match load_catalog(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    cities = catalog.globe.cities().len(),
                    bodies = catalog.bodies.len(),
                    "Loaded catalog"
                );
                catalog
            }
            Err(err) => {
                tracing::warn!(error = %err, suggestion = err.suggestion(), "Using built-in catalog");
                Catalog::builtin()
            }
        }
    }
}

/// Read and parse a JSON catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path).map_err(|err| GuiError::catalog_read(path, err))?;
    Catalog::from_json_str(&json).map_err(|err| GuiError::catalog(path, err))
}
