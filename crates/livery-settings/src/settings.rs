//! The appearance-settings snapshot and its defaults.
//!
//! Defaults double as the "is this customized" baseline: style fragments are
//! only emitted for fields that differ from the values below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accent color sentinel. Matching this value means "no override".
pub const DEFAULT_ACCENT_COLOR: &str = "#7367f0";

/// Default navigation-rail width in pixels, as a numeric string.
pub const DEFAULT_SERVICE_RIBBON_WIDTH: &str = "68";

/// Default icon size in pixels, as a numeric string.
pub const DEFAULT_ICON_SIZE: &str = "20";

/// Error loading settings from YAML content or a file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// The current read-only values of the user-configurable visual options.
///
/// Width and icon size are carried as numeric strings, exactly as the
/// settings layer delivers them. Coercion to numbers happens at style
/// generation time; unparsable input degrades to `NaN` in the generated
/// CSS rather than failing (see `livery-style`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// CSS color applied to accent-mapped controls. The default value is a
    /// sentinel meaning "no override".
    pub accent_color: String,
    /// Pixel width of the primary navigation rail, as a numeric string.
    pub service_ribbon_width: String,
    /// Pixel icon size, as a numeric string. Combined with the fixed icon
    /// size bias to compute the effective offset.
    pub icon_size: String,
    /// Whether the draggable title-bar region is shown.
    pub show_drag_area: bool,
    /// Whether the navigation rail renders vertically.
    pub use_vertical_style: bool,
    /// User dark-mode toggle.
    pub dark_mode: bool,
    /// When set together with `dark_mode`, dark-theme activation follows the
    /// OS preference instead of being forced.
    pub adaptable_dark_mode: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            service_ribbon_width: DEFAULT_SERVICE_RIBBON_WIDTH.to_string(),
            icon_size: DEFAULT_ICON_SIZE.to_string(),
            show_drag_area: false,
            use_vertical_style: false,
            dark_mode: false,
            adaptable_dark_mode: false,
        }
    }
}

impl AppearanceSettings {
    /// Parses settings from YAML content.
    ///
    /// Absent fields keep their defaults, so a settings file only needs to
    /// name what the user customized.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if parsing fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// True when the accent color differs from the sentinel default.
    pub fn accent_customized(&self) -> bool {
        self.accent_color != DEFAULT_ACCENT_COLOR
    }

    /// True when the rail width or the icon size differs from its default.
    pub fn ribbon_customized(&self) -> bool {
        self.service_ribbon_width != DEFAULT_SERVICE_RIBBON_WIDTH
            || self.icon_size != DEFAULT_ICON_SIZE
    }
}
