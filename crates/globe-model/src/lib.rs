//! Data model types for the Globe Console panels.
//!
//! This crate holds everything the panels need that is not GUI code:
//! - **Locations**: [`City`] and the [`GlobeData`] aggregate
//! - **Bodies**: [`CelestialBodyConfig`] plus the fixed passive/target id sets
//! - **View state**: [`ViewMode`] and [`ZoomLevel`]
//! - **Search**: case-insensitive substring matching shared by every list
//! - **Catalog**: built-in data and JSON loading
//!
//! # Module Organization
//!
//! - [`city`]: locations and location filtering
//! - [`body`]: celestial bodies, denylist/allowlist, display names
//! - [`search`]: [`SearchQuery`]
//! - [`view`]: view mode and zoom level
//! - [`catalog`]: [`Catalog`] construction
//! - [`error`]: [`ModelError`]
//!
//! Filtering never mutates its input. Every filter returns borrowed
//! references in the order of the source slice.

pub mod body;
pub mod catalog;
pub mod city;
pub mod error;
pub mod search;
pub mod view;

pub use body::{
    CelestialBodyConfig, PASSIVE_BODY_IDS, TARGET_LINK_IDS, display_name, filter_system_bodies,
    target_bodies,
};
pub use catalog::Catalog;
pub use city::{City, GlobeData, filter_cities};
pub use error::{ModelError, Result};
pub use search::SearchQuery;
pub use view::{ViewMode, ZoomLevel};
