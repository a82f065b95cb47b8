//! End-to-end flow: one settings store driving both the stylesheet pipeline
//! and the theme-mode resolver against the same document.

use std::rc::Rc;

use serial_test::serial;

use livery::{
    set_dark_colors_detector, Appearance, AppearanceSettings, Document, SettingsStore,
    ThemeModeResolver, DARK_THEME_CLASS, STYLE_ELEMENT_ID, VERTICAL_STYLE_LINK_ID,
};

fn setup() -> (Rc<SettingsStore>, Document, Appearance) {
    let store = SettingsStore::new(AppearanceSettings::default());
    let document = Document::new();
    let appearance = Appearance::init(&store, &document).unwrap();
    (store, document, appearance)
}

#[test]
fn defaults_produce_an_installed_but_empty_stylesheet() {
    let (_store, document, _appearance) = setup();
    // The element exists from initialization; its content is empty because
    // nothing is customized.
    assert_eq!(document.style_text(STYLE_ELEMENT_ID), Some(String::new()));
    assert!(!document.has_link(VERTICAL_STYLE_LINK_ID));
}

#[test]
fn field_changes_accumulate_into_one_full_stylesheet() {
    let (store, document, _appearance) = setup();

    store.set_accent_color("#ff6b35");
    store.set_service_ribbon_width("50");
    store.set_show_drag_area(true);

    let text = document.style_text(STYLE_ELEMENT_ID).unwrap();
    assert!(text.contains("border: 2px solid #ff6b35 !important"));
    assert!(text.contains("width: 48px !important"));
    assert!(text.contains("background-color: #ff6b35")); // drag area follows accent
    assert!(text.contains("height: calc(100% - 22px)"));
}

#[test]
fn vertical_toggle_drives_link_and_rules_together() {
    let (store, document, _appearance) = setup();
    store.set_service_ribbon_width("50");

    store.set_use_vertical_style(true);
    let text = document.style_text(STYLE_ELEMENT_ID).unwrap();
    assert!(document.has_link(VERTICAL_STYLE_LINK_ID));
    assert_eq!(document.link_count(VERTICAL_STYLE_LINK_ID), 1);
    assert!(text.contains("top: 50px !important"));
    assert!(!text.contains("width: 49px")); // no horizontal rail pin

    store.set_use_vertical_style(false);
    let text = document.style_text(STYLE_ELEMENT_ID).unwrap();
    assert!(!document.has_link(VERTICAL_STYLE_LINK_ID));
    assert!(!text.contains(".app-service"));
    assert!(text.contains("width: 49px !important"));
}

#[test]
fn settings_loaded_from_yaml_flow_through() {
    let settings = AppearanceSettings::from_yaml(
        r##"
        accent_color: "#2ecc71"
        use_vertical_style: true
        "##,
    )
    .unwrap();
    let store = SettingsStore::new(settings);
    let document = Document::new();
    let _appearance = Appearance::init(&store, &document).unwrap();

    // Accent reaction fires immediately on init, seeding the stylesheet
    // from the loaded snapshot.
    let text = document.style_text(STYLE_ELEMENT_ID).unwrap();
    assert!(text.contains("#2ecc71"));
    assert!(document.has_link(VERTICAL_STYLE_LINK_ID));
}

#[test]
#[serial]
fn both_components_share_one_store_and_document() {
    set_dark_colors_detector(|| false);

    let store = SettingsStore::new(AppearanceSettings::default());
    let document = Document::new();
    let _appearance = Appearance::init(&store, &document).unwrap();
    let resolver = ThemeModeResolver::init(&store, &document);

    store.set_dark_mode(true);
    store.set_accent_color("#ff6b35");

    assert!(document.has_root_class(DARK_THEME_CLASS));
    assert!(document
        .style_text(STYLE_ELEMENT_ID)
        .unwrap()
        .contains("#ff6b35"));
    assert!(resolver.is_dark_theme_active());
}

#[test]
#[serial]
fn dark_class_truth_table_through_the_store() {
    for os_dark in [false, true] {
        set_dark_colors_detector(if os_dark { || true } else { || false });
        for dark_mode in [false, true] {
            for adaptable in [false, true] {
                let store = SettingsStore::new(AppearanceSettings {
                    dark_mode,
                    adaptable_dark_mode: adaptable,
                    ..Default::default()
                });
                let document = Document::new();
                let _resolver = ThemeModeResolver::init(&store, &document);

                let expected = (dark_mode && adaptable && os_dark) || (dark_mode && !adaptable);
                assert_eq!(
                    document.has_root_class(DARK_THEME_CLASS),
                    expected,
                    "dark_mode={dark_mode} adaptable={adaptable} os_dark={os_dark}"
                );
            }
        }
    }
}
