//! # Livery - Reactive Appearance Engine
//!
//! Livery observes an application-settings snapshot and keeps a live
//! document's appearance consistent with it. Two independent components
//! react to the same settings store:
//!
//! - [`Appearance`]: regenerates a CSS stylesheet from the snapshot
//!   (via [`livery_style`]) and installs it into the managed style element,
//!   managing the auxiliary vertical-layout link alongside.
//! - [`ThemeModeResolver`]: derives the dark-theme signal from the user's
//!   dark-mode settings plus the OS dark-colors preference, and toggles the
//!   dark class on the document root when the derived value changes.
//!
//! Everything is single-threaded and event-driven: reactions run
//! synchronously on settings-change notifications, each performing a full
//! recomputation, so repeated or reordered notifications converge to the
//! same document state.
//!
//! ## Quick Start
//!
//! ```rust
//! use livery::{Appearance, Document, ThemeModeResolver};
//! use livery::{AppearanceSettings, SettingsStore};
//!
//! let store = SettingsStore::new(AppearanceSettings::default());
//! let document = Document::new();
//!
//! let _appearance = Appearance::init(&store, &document).unwrap();
//! let _theme = ThemeModeResolver::init(&store, &document);
//!
//! store.set_accent_color("#ff6b35");
//! assert!(document
//!     .style_text(livery::STYLE_ELEMENT_ID)
//!     .unwrap()
//!     .contains("#ff6b35"));
//! ```

pub mod appearance;
pub mod document;
pub mod theme_mode;

pub use appearance::{
    Appearance, AppearanceError, STYLE_ELEMENT_ID, VERTICAL_STYLE_HREF, VERTICAL_STYLE_LINK_ID,
};
pub use document::{Document, DomError, StyleHandle};
pub use theme_mode::{
    detect_dark_colors, is_dark_theme_active, select_theme_variant, set_dark_colors_detector,
    supports_os_theme_notifications, OsThemeChannel, SettingsBroadcaster, ThemeModeResolver,
    ThemeVariant, DARK_THEME_CLASS,
};

// Re-export the collaborating crates' surface so applications can depend on
// `livery` alone.
pub use livery_settings::{
    AppearanceSettings, SettingField, SettingsError, SettingsStore, DEFAULT_ACCENT_COLOR,
    DEFAULT_ICON_SIZE, DEFAULT_SERVICE_RIBBON_WIDTH,
};
pub use livery_style::{StyleError, StyleSynthesizer, ThemeMapEntry, ACCENT_THEME_MAP, ICON_SIZE_BIAS};
