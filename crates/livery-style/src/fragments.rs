//! Fragment templates and their render contexts.
//!
//! Each fragment is a fixed minijinja template rendered with a small
//! `Serialize` context. All arithmetic happens here, in Rust; the templates
//! only substitute pre-formatted values. Every template starts with a
//! newline so concatenated fragments stay visually separated.

use serde::Serialize;

use livery_settings::AppearanceSettings;

/// Offset subtracted from the configured icon size before any icon
/// arithmetic. The raw setting describes the touch target; the effective
/// value sizes the glyph itself.
pub const ICON_SIZE_BIAS: f64 = 4.0;

/// Fixed 22px the root container shrinks by when the drag area reveals the
/// title bar.
const DRAG_AREA_HEIGHT_OFFSET: &str = "22";

/// Accent rules: one block per theme-map entry, plus the fixed button
/// background/border override with the accent color substituted.
pub const ACCENT_TEMPLATE: &str = "
{% for entry in entries %}{{ entry.selectors }} {
  {{ entry.property }}: {{ color }};
}
{% endfor %}.app-form__button {
  background: inherit !important;
  border: 2px solid {{ color }} !important;
}
";

/// Rail and tab dimensions. Horizontal mode additionally pins the rail
/// container width; vertical mode leaves it to the vertical stylesheet.
pub const RIBBON_TEMPLATE: &str = "
{% if not vertical %}.sidebar {
  width: {{ rail_width }}px !important;
}
{% endif %}.tab-item {
  width: {{ tab_width }}px !important;
  height: {{ tab_height }}px !important;
}
.tab-item .tab-item__icon {
  width: {{ icon_width }}px !important;
}
.sidebar__button {
  font-size: {{ button_font_size }}px !important;
}
";

/// Drag-area rules: zero the rail's top padding, anchor the draggable
/// region, and shrink the root container to compensate for the title bar.
pub const DRAG_AREA_TEMPLATE: &str = "
.sidebar {
  padding-top: 0px !important;
}
.window-draggable {
  position: initial;
  background-color: {{ accent_color }};
}
#root {
  height: calc(100% - {{ height_offset }}px);
}
";

/// Vertical-layout rules: reposition the per-service icon stack and pin the
/// darwin rail heights.
pub const VERTICAL_TEMPLATE: &str = "
.app-service {
  top: {{ stack_top }}px !important;
}
.darwin .sidebar {
  height: {{ rail_height }}px !important;
}
.darwin .sidebar .sidebar__button--workspaces.is-active {
  height: {{ active_button_height }}px !important;
}
";

/// Coerces a numeric-string setting to a number.
///
/// Unparsable input maps to `NaN`, which then formats as the inert CSS token
/// `NaN` rather than rejecting the whole stylesheet. This deliberately
/// preserves the silent-degradation posture of the settings layer.
pub(crate) fn numeric(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a computed dimension for CSS output.
///
/// Whole values print without a fractional part (`48`, not `48.0`);
/// everything else uses the shortest round-trip representation.
pub(crate) fn css_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AccentContext {
    pub color: String,
    pub entries: &'static [crate::theme_map::ThemeMapEntry],
}

impl AccentContext {
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
            entries: crate::theme_map::ACCENT_THEME_MAP,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RibbonContext {
    pub vertical: bool,
    pub rail_width: String,
    pub tab_width: String,
    pub tab_height: String,
    pub icon_width: String,
    pub button_font_size: String,
}

impl RibbonContext {
    pub fn from_settings(settings: &AppearanceSettings) -> Self {
        let width = numeric(&settings.service_ribbon_width);
        let icon_size = numeric(&settings.icon_size) - ICON_SIZE_BIAS;

        Self {
            vertical: settings.use_vertical_style,
            rail_width: css_number(width - 1.0),
            tab_width: css_number(width - 2.0),
            tab_height: css_number(width - 5.0 + icon_size),
            icon_width: css_number(width / 2.0 + icon_size),
            button_font_size: css_number(width / 3.0),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct DragAreaContext {
    pub accent_color: String,
    pub height_offset: &'static str,
}

impl DragAreaContext {
    pub fn from_settings(settings: &AppearanceSettings) -> Self {
        Self {
            accent_color: settings.accent_color.clone(),
            height_offset: DRAG_AREA_HEIGHT_OFFSET,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct VerticalContext {
    pub stack_top: String,
    pub rail_height: String,
    pub active_button_height: String,
}

impl VerticalContext {
    pub fn from_settings(settings: &AppearanceSettings) -> Self {
        let width = numeric(&settings.service_ribbon_width);
        Self {
            stack_top: css_number(width),
            rail_height: css_number(width + 19.0),
            active_button_height: css_number(width - 20.0),
        }
    }
}
