//! The fixed accent theme map.
//!
//! Maps each accent-affected CSS property to the selectors it applies to.
//! The accent fragment walks this table in order and emits one rule block
//! per entry with the accent color substituted; table order is part of the
//! deterministic-output contract.

use serde::Serialize;

/// One entry of the accent theme map.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeMapEntry {
    /// CSS property receiving the accent color.
    pub property: &'static str,
    /// Comma-separated selector list the rule applies to.
    pub selectors: &'static str,
}

/// Semantic appearance properties that follow the accent color.
pub const ACCENT_THEME_MAP: &[ThemeMapEntry] = &[
    ThemeMapEntry {
        property: "color",
        selectors: "a.link, button.link",
    },
    ThemeMapEntry {
        property: "border-color",
        selectors: ".settings .settings__tab.is-active, .workspaces__tab.is-active",
    },
    ThemeMapEntry {
        property: "background",
        selectors: ".app-form__toggle.is-active .app-form__toggle-button, .tab-item.is-active .tab-item__indicator",
    },
    ThemeMapEntry {
        property: "background-color",
        selectors: ".progress-bar__fill, .badge--primary",
    },
    ThemeMapEntry {
        property: "fill",
        selectors: ".sidebar__button.is-active svg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_map_is_not_empty() {
        assert!(!ACCENT_THEME_MAP.is_empty());
    }

    #[test]
    fn test_theme_map_entries_are_well_formed() {
        for entry in ACCENT_THEME_MAP {
            assert!(!entry.property.is_empty());
            assert!(!entry.selectors.is_empty());
            assert!(
                !entry.selectors.ends_with(','),
                "dangling comma in selectors for {}",
                entry.property
            );
        }
    }

    #[test]
    fn test_theme_map_properties_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in ACCENT_THEME_MAP {
            assert!(seen.insert(entry.property), "duplicate {}", entry.property);
        }
    }
}
