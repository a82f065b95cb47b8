//! # Livery Settings - Appearance Snapshot & Change Notification
//!
//! `livery-settings` holds the read-only appearance-settings snapshot and the
//! change-notification registry the rest of Livery reacts to.
//!
//! ## Core Concepts
//!
//! - [`AppearanceSettings`]: the current values of the user-configurable
//!   visual options (accent color, navigation-rail width, icon size, drag
//!   area, layout orientation, dark-mode flags).
//! - [`SettingsStore`]: owns the mutable snapshot and notifies per-field
//!   observers when a typed setter actually changes a value.
//! - [`SettingField`]: the observable field paths.
//!
//! ## Quick Start
//!
//! ```rust
//! use livery_settings::{AppearanceSettings, SettingField, SettingsStore};
//!
//! let store = SettingsStore::new(AppearanceSettings::default());
//!
//! store.observe(SettingField::AccentColor, true, |settings| {
//!     println!("accent is now {}", settings.accent_color);
//! });
//!
//! store.set_accent_color("#ff6b35");
//! ```
//!
//! ## YAML-Based Settings
//!
//! Settings files omit anything left at its default:
//!
//! ```rust
//! use livery_settings::AppearanceSettings;
//!
//! let settings = AppearanceSettings::from_yaml(r##"
//! accent_color: "#2ecc71"
//! use_vertical_style: true
//! "##).unwrap();
//! assert!(settings.use_vertical_style);
//! ```

mod settings;
mod store;

pub use settings::{
    AppearanceSettings, SettingsError, DEFAULT_ACCENT_COLOR, DEFAULT_ICON_SIZE,
    DEFAULT_SERVICE_RIBBON_WIDTH,
};
pub use store::{SettingField, SettingsStore};
