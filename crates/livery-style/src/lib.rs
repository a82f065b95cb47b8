//! # Livery Style - Deterministic CSS Synthesis
//!
//! `livery-style` turns an appearance-settings snapshot into a CSS text blob.
//! Generation is a pure function of the snapshot plus fixed constants: the
//! same input always produces byte-identical output, and nothing here touches
//! the document.
//!
//! ## Composition Rule
//!
//! The stylesheet is a concatenation of self-contained fragments, each
//! appended only when its triggering setting differs from the default, in a
//! fixed order:
//!
//! 1. Accent fragment (accent color differs from the sentinel default)
//! 2. Ribbon/icon-size fragment (rail width or icon size customized)
//! 3. Drag-area fragment (`show_drag_area` is true)
//! 4. Vertical-layout fragment (`use_vertical_style` is true)
//!
//! Fragments never merge or suppress one another; conflicts resolve by CSS
//! last-write-wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use livery_settings::AppearanceSettings;
//! use livery_style::StyleSynthesizer;
//!
//! let synthesizer = StyleSynthesizer::new().unwrap();
//!
//! // All defaults: nothing to override.
//! let style = synthesizer.generate_style(&AppearanceSettings::default()).unwrap();
//! assert_eq!(style, "");
//!
//! let custom = AppearanceSettings {
//!     accent_color: "#ff6b35".into(),
//!     ..Default::default()
//! };
//! let style = synthesizer.generate_style(&custom).unwrap();
//! assert!(style.contains("#ff6b35"));
//! ```
//!
//! ## Malformed Numeric Settings
//!
//! Width and icon size arrive as numeric strings. Unparsable input degrades
//! to the inert CSS token `NaN` instead of failing; the affected rules are
//! ignored by the consumer while the rest of the stylesheet stays intact.

mod error;
mod fragments;
mod synthesizer;
mod theme_map;

pub use error::StyleError;
pub use fragments::ICON_SIZE_BIAS;
pub use synthesizer::StyleSynthesizer;
pub use theme_map::{ThemeMapEntry, ACCENT_THEME_MAP};
