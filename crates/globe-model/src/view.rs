//! Camera view mode and zoom level.
//!
//! Both values are owned by the host; the navigation rail only displays them
//! and requests changes.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Camera framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViewMode {
    /// Close orbit around the current body.
    #[default]
    Orbit,
    /// Whole-system map.
    System,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Orbit, ViewMode::System];

    /// The mode literal ("ORBIT" / "SYSTEM").
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Orbit => "ORBIT",
            ViewMode::System => "SYSTEM",
        }
    }

    /// Tooltip text for the mode toggle.
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Orbit => "ORBIT VIEW",
            ViewMode::System => "SYSTEM MAP",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORBIT" => Ok(ViewMode::Orbit),
            "SYSTEM" => Ok(ViewMode::System),
            other => Err(ModelError::InvalidViewMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Zoom percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Range accepted by the zoom slider.
    pub const RANGE: RangeInclusive<u8> = Self::MIN..=Self::MAX;

    /// Validate a raw zoom value.
    pub fn new(value: u8) -> Result<Self, ModelError> {
        if Self::RANGE.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::InvalidZoom {
                value: value.to_string(),
            })
        }
    }

    /// Convert a value produced by the zoom slider.
    ///
    /// The slider is bounded to [`ZoomLevel::RANGE`]; anything above is
    /// pinned to the maximum.
    pub fn from_slider(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Label shown next to the slider, e.g. `42%`.
    pub fn label(self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<u8> for ZoomLevel {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ZoomLevel> for u8 {
    fn from(zoom: ZoomLevel) -> Self {
        zoom.0
    }
}

impl FromStr for ZoomLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidZoom {
            value: s.to_string(),
        };
        let value: u8 = s.trim().parse().map_err(|_| invalid())?;
        Self::new(value).map_err(|_| invalid())
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_literals() {
        assert_eq!(ViewMode::Orbit.to_string(), "ORBIT");
        assert_eq!("SYSTEM".parse::<ViewMode>().unwrap(), ViewMode::System);
        assert!("orbit".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_view_mode_serde() {
        let json = serde_json::to_string(&ViewMode::System).unwrap();
        assert_eq!(json, "\"SYSTEM\"");
    }

    #[test]
    fn test_zoom_parse_and_label() {
        let zoom: ZoomLevel = "42".parse().unwrap();
        assert_eq!(zoom.get(), 42);
        assert_eq!(zoom.label(), "42%");
        assert_eq!(zoom.to_string(), "42%");
    }

    #[test]
    fn test_zoom_rejects_out_of_range() {
        assert!("101".parse::<ZoomLevel>().is_err());
        assert!("-1".parse::<ZoomLevel>().is_err());
        assert!("4.2".parse::<ZoomLevel>().is_err());
        assert!(ZoomLevel::new(255).is_err());
        assert_eq!(ZoomLevel::new(100).unwrap().get(), 100);
        assert_eq!(ZoomLevel::new(0).unwrap().get(), 0);
    }

    #[test]
    fn test_zoom_from_slider() {
        assert_eq!(ZoomLevel::from_slider(42).get(), 42);
        assert_eq!(ZoomLevel::from_slider(200).get(), 100);
    }

    #[test]
    fn test_zoom_serde_validates() {
        assert!(serde_json::from_str::<ZoomLevel>("77").is_ok());
        assert!(serde_json::from_str::<ZoomLevel>("150").is_err());
    }
}
