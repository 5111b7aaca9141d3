//! GUI-specific error types.
//!
//! None of these errors stop the console: the host logs them and falls back
//! to defaults. Each carries a suggestion for the log line.

use std::path::Path;

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // CONFIGURATION
    // =========================================================================
    /// The config file exists but could not be read.
    #[error("Failed to read config {path}: {reason}")]
    ConfigRead {
        /// Path of the config file.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// The config file exists but is not valid TOML for [`HostConfig`](crate::config::HostConfig).
    #[error("Failed to parse config {path}: {reason}")]
    ConfigParse {
        /// Path of the config file.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // CATALOG
    // =========================================================================
    /// The configured catalog file could not be read.
    #[error("Failed to read catalog {path}: {reason}")]
    CatalogRead {
        /// Path of the catalog file.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// The catalog file was read but its contents are invalid.
    #[error("Invalid catalog {path}: {reason}")]
    Catalog {
        /// Path of the catalog file.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::ConfigRead { .. } => {
                "Check the permissions of the config file; defaults are used until then."
            }
            Self::ConfigParse { .. } => {
                "Fix or remove the config file; defaults are used until then."
            }
            Self::CatalogRead { .. } => {
                "Check that catalog_path points to a readable file; the built-in catalog is used."
            }
            Self::Catalog { .. } => {
                "The catalog must be JSON with optional \"cities\" and \"bodies\" arrays."
            }
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a config read error.
    pub fn config_read(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::ConfigRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::ConfigParse {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create a catalog read error.
    pub fn catalog_read(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::CatalogRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create an invalid catalog error.
    pub fn catalog(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Catalog {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type for GUI operations.
pub type Result<T> = std::result::Result<T, GuiError>;
