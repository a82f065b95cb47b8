//! Field-keyed change notification over the settings snapshot.
//!
//! The store replaces a general reactivity library with an explicit observer
//! registry: callbacks are registered per observed field, optionally invoked
//! immediately on subscription, and invoked again whenever a typed setter
//! actually changes that field's value. Setters that write an equal value do
//! not notify.
//!
//! All of this runs on one thread; observers are plain `Rc` callbacks and the
//! snapshot is handed to them by reference. Each observer is expected to do a
//! full recomputation from the snapshot, so replayed or coalesced
//! notifications converge to the same state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use crate::settings::AppearanceSettings;

/// An observable field path of [`AppearanceSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    AccentColor,
    ServiceRibbonWidth,
    IconSize,
    ShowDragArea,
    UseVerticalStyle,
    DarkMode,
    AdaptableDarkMode,
}

impl SettingField {
    /// Stable name of the field, matching the snapshot's YAML keys.
    pub fn name(&self) -> &'static str {
        match self {
            SettingField::AccentColor => "accent_color",
            SettingField::ServiceRibbonWidth => "service_ribbon_width",
            SettingField::IconSize => "icon_size",
            SettingField::ShowDragArea => "show_drag_area",
            SettingField::UseVerticalStyle => "use_vertical_style",
            SettingField::DarkMode => "dark_mode",
            SettingField::AdaptableDarkMode => "adaptable_dark_mode",
        }
    }
}

type Observer = Rc<dyn Fn(&AppearanceSettings)>;

/// Owns the mutable settings snapshot and the per-field observer registry.
///
/// # Example
///
/// ```rust
/// use livery_settings::{AppearanceSettings, SettingField, SettingsStore};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let store = SettingsStore::new(AppearanceSettings::default());
/// let seen = Rc::new(Cell::new(0));
///
/// let counter = seen.clone();
/// store.observe(SettingField::IconSize, false, move |_| {
///     counter.set(counter.get() + 1);
/// });
///
/// store.set_icon_size("32");
/// store.set_icon_size("32"); // unchanged, no notification
/// assert_eq!(seen.get(), 1);
/// ```
pub struct SettingsStore {
    current: RefCell<AppearanceSettings>,
    observers: RefCell<HashMap<SettingField, Vec<Observer>>>,
}

impl SettingsStore {
    /// Creates a store seeded with the given snapshot.
    pub fn new(initial: AppearanceSettings) -> Rc<Self> {
        Rc::new(Self {
            current: RefCell::new(initial),
            observers: RefCell::new(HashMap::new()),
        })
    }

    /// Returns a copy of the current snapshot.
    pub fn snapshot(&self) -> AppearanceSettings {
        self.current.borrow().clone()
    }

    /// Registers an observer for one field.
    ///
    /// With `fire_immediately` the observer is invoked once with the current
    /// snapshot before being registered, mirroring subscribe-and-run
    /// semantics. Observers registered for the same field run in
    /// registration order.
    pub fn observe<F>(&self, field: SettingField, fire_immediately: bool, observer: F)
    where
        F: Fn(&AppearanceSettings) + 'static,
    {
        let observer: Observer = Rc::new(observer);
        if fire_immediately {
            let snapshot = self.snapshot();
            observer(&snapshot);
        }
        self.observers
            .borrow_mut()
            .entry(field)
            .or_default()
            .push(observer);
    }

    pub fn set_accent_color(&self, value: impl Into<String>) {
        let value = value.into();
        {
            let mut current = self.current.borrow_mut();
            if current.accent_color == value {
                return;
            }
            current.accent_color = value;
        }
        self.notify(SettingField::AccentColor);
    }

    pub fn set_service_ribbon_width(&self, value: impl Into<String>) {
        let value = value.into();
        {
            let mut current = self.current.borrow_mut();
            if current.service_ribbon_width == value {
                return;
            }
            current.service_ribbon_width = value;
        }
        self.notify(SettingField::ServiceRibbonWidth);
    }

    pub fn set_icon_size(&self, value: impl Into<String>) {
        let value = value.into();
        {
            let mut current = self.current.borrow_mut();
            if current.icon_size == value {
                return;
            }
            current.icon_size = value;
        }
        self.notify(SettingField::IconSize);
    }

    pub fn set_show_drag_area(&self, value: bool) {
        {
            let mut current = self.current.borrow_mut();
            if current.show_drag_area == value {
                return;
            }
            current.show_drag_area = value;
        }
        self.notify(SettingField::ShowDragArea);
    }

    pub fn set_use_vertical_style(&self, value: bool) {
        {
            let mut current = self.current.borrow_mut();
            if current.use_vertical_style == value {
                return;
            }
            current.use_vertical_style = value;
        }
        self.notify(SettingField::UseVerticalStyle);
    }

    pub fn set_dark_mode(&self, value: bool) {
        {
            let mut current = self.current.borrow_mut();
            if current.dark_mode == value {
                return;
            }
            current.dark_mode = value;
        }
        self.notify(SettingField::DarkMode);
    }

    pub fn set_adaptable_dark_mode(&self, value: bool) {
        {
            let mut current = self.current.borrow_mut();
            if current.adaptable_dark_mode == value {
                return;
            }
            current.adaptable_dark_mode = value;
        }
        self.notify(SettingField::AdaptableDarkMode);
    }

    /// Runs every observer registered for `field` against a fresh snapshot.
    ///
    /// The observer list is cloned out before invocation so callbacks may
    /// re-enter the store (read the snapshot, register further observers)
    /// without hitting a borrow conflict.
    fn notify(&self, field: SettingField) {
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .get(&field)
            .cloned()
            .unwrap_or_default();
        if observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        trace!(
            field = field.name(),
            observers = observers.len(),
            "notifying settings observers"
        );
        for observer in &observers {
            observer(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_store() -> (Rc<SettingsStore>, Rc<Cell<usize>>) {
        let store = SettingsStore::new(AppearanceSettings::default());
        let count = Rc::new(Cell::new(0));
        (store, count)
    }

    #[test]
    fn test_snapshot_returns_current_values() {
        let store = SettingsStore::new(AppearanceSettings::default());
        store.set_accent_color("#abcdef");
        assert_eq!(store.snapshot().accent_color, "#abcdef");
    }

    #[test]
    fn test_observe_fire_immediately() {
        let (store, count) = counting_store();
        let counter = count.clone();
        store.observe(SettingField::AccentColor, true, move |_| {
            counter.set(counter.get() + 1);
        });
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_observe_without_fire_immediately() {
        let (store, count) = counting_store();
        let counter = count.clone();
        store.observe(SettingField::AccentColor, false, move |_| {
            counter.set(counter.get() + 1);
        });
        assert_eq!(count.get(), 0);

        store.set_accent_color("#ff0000");
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_unchanged_value_does_not_notify() {
        let (store, count) = counting_store();
        let counter = count.clone();
        store.observe(SettingField::ShowDragArea, false, move |_| {
            counter.set(counter.get() + 1);
        });

        store.set_show_drag_area(false); // already false
        assert_eq!(count.get(), 0);

        store.set_show_drag_area(true);
        store.set_show_drag_area(true); // already true
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_observer_sees_updated_snapshot() {
        let store = SettingsStore::new(AppearanceSettings::default());
        let seen = Rc::new(RefCell::new(String::new()));
        let seen_clone = seen.clone();
        store.observe(SettingField::ServiceRibbonWidth, false, move |settings| {
            *seen_clone.borrow_mut() = settings.service_ribbon_width.clone();
        });

        store.set_service_ribbon_width("50");
        assert_eq!(*seen.borrow(), "50");
    }

    #[test]
    fn test_observers_keyed_by_field() {
        let (store, count) = counting_store();
        let counter = count.clone();
        store.observe(SettingField::IconSize, false, move |_| {
            counter.set(counter.get() + 1);
        });

        store.set_use_vertical_style(true);
        store.set_dark_mode(true);
        assert_eq!(count.get(), 0, "unrelated fields must not notify");

        store.set_icon_size("36");
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_multiple_observers_run_in_registration_order() {
        let store = SettingsStore::new(AppearanceSettings::default());
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = order.clone();
            store.observe(SettingField::DarkMode, false, move |_| {
                order.borrow_mut().push(tag);
            });
        }

        store.set_dark_mode(true);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_observer_may_reenter_store() {
        let store = SettingsStore::new(AppearanceSettings::default());
        let seen_width = Rc::new(RefCell::new(String::new()));

        let inner_store = store.clone();
        let seen = seen_width.clone();
        store.observe(SettingField::UseVerticalStyle, false, move |_| {
            // Reading back through the store while being notified must work.
            *seen.borrow_mut() = inner_store.snapshot().service_ribbon_width.clone();
        });

        store.set_use_vertical_style(true);
        assert_eq!(*seen_width.borrow(), "68");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(SettingField::AccentColor.name(), "accent_color");
        assert_eq!(SettingField::AdaptableDarkMode.name(), "adaptable_dark_mode");
    }
}
