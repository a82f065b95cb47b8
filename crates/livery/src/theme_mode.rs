//! Dark-theme resolution and the root-class side effect.
//!
//! The resolver derives a single boolean, "dark theme active", from the two
//! user settings (`dark_mode`, `adaptable_dark_mode`) and the OS-reported
//! dark-colors preference:
//!
//! ```text
//! active_adaptable = dark_mode && adaptable_dark_mode && should_use_dark_colors
//! forced_dark      = dark_mode && !adaptable_dark_mode
//! active           = active_adaptable || forced_dark
//! ```
//!
//! Whenever the derived value changes, the dark class on the document root
//! is toggled; on the very first computation it is applied unconditionally.
//! No other code toggles that class.
//!
//! The OS preference is read through a process-wide detector that can be
//! overridden for testing:
//!
//! ```rust,ignore
//! livery::theme_mode::set_dark_colors_detector(|| true);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::debug;

use livery_settings::{SettingField, SettingsStore};

use crate::document::Document;

/// Class toggled on the document root while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "theme__dark";

type DarkColorsDetector = fn() -> bool;

static DARK_COLORS_DETECTOR: Lazy<Mutex<DarkColorsDetector>> =
    Lazy::new(|| Mutex::new(os_dark_colors));

/// Overrides how the OS dark-colors preference is read.
///
/// Useful for testing or to force a specific mode. Tests that use this
/// should restore their changes.
pub fn set_dark_colors_detector(detector: DarkColorsDetector) {
    let mut guard = DARK_COLORS_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Reads the OS dark-colors preference through the current detector.
pub fn detect_dark_colors() -> bool {
    let detector = DARK_COLORS_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_dark_colors() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

/// Whether this platform delivers OS theme-change notifications.
///
/// Only macOS has the notification channel; elsewhere no subscription is
/// attempted and the preference is only read at initialization.
pub fn supports_os_theme_notifications() -> bool {
    cfg!(target_os = "macos")
}

/// The derived dark-theme signal.
pub fn is_dark_theme_active(
    dark_mode: bool,
    adaptable_dark_mode: bool,
    should_use_dark_colors: bool,
) -> bool {
    let active_adaptable = dark_mode && adaptable_dark_mode && should_use_dark_colors;
    let forced_dark = dark_mode && !adaptable_dark_mode;
    active_adaptable || forced_dark
}

/// The two theme variants an application view can render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Default,
    Dark,
}

/// Chooses the theme variant for rendering.
///
/// The raw dark-mode setting counts as an override: a view asks for the dark
/// variant when the derived signal is active *or* the user has the dark-mode
/// toggle set, even while adaptable mode keeps the root class off.
pub fn select_theme_variant(dark_theme_active: bool, dark_mode: bool) -> ThemeVariant {
    if dark_theme_active || dark_mode {
        ThemeVariant::Dark
    } else {
        ThemeVariant::Default
    }
}

/// Receiver for the cross-process settings share emitted when the OS signal
/// changes. The resolver only emits; delivery is the collaborator's concern.
pub trait SettingsBroadcaster {
    fn share_dark_colors(&self, should_use_dark_colors: bool);
}

/// An OS theme-change notification channel the resolver can register with.
pub trait OsThemeChannel {
    fn subscribe(&self, callback: Box<dyn Fn()>);
}

/// Derives the dark-theme signal and owns the root-class side effect.
///
/// Created once at initialization; lives for the process's UI lifetime.
pub struct ThemeModeResolver {
    inner: Rc<ResolverInner>,
}

struct ResolverInner {
    document: Document,
    store: Rc<SettingsStore>,
    should_use_dark_colors: Cell<bool>,
    applied: Cell<Option<bool>>,
    broadcaster: RefCell<Option<Rc<dyn SettingsBroadcaster>>>,
}

impl ThemeModeResolver {
    /// Reads the OS preference, applies the initial root-class state, and
    /// wires reactions on the two dark-mode settings.
    ///
    /// The first reaction fires immediately, so the class reflects the
    /// current derived value right after this returns, whatever that value
    /// is; later reactions only touch the DOM when the value changes.
    pub fn init(store: &Rc<SettingsStore>, document: &Document) -> Self {
        let inner = Rc::new(ResolverInner {
            document: document.clone(),
            store: Rc::clone(store),
            should_use_dark_colors: Cell::new(detect_dark_colors()),
            applied: Cell::new(None),
            broadcaster: RefCell::new(None),
        });

        let fields = [SettingField::DarkMode, SettingField::AdaptableDarkMode];
        for (index, field) in fields.into_iter().enumerate() {
            let inner = Rc::clone(&inner);
            store.observe(field, index == 0, move |settings| {
                inner.recompute(settings.dark_mode, settings.adaptable_dark_mode);
            });
        }

        Self { inner }
    }

    /// Sets the receiver for cross-process dark-colors shares.
    pub fn set_broadcaster(&self, broadcaster: Rc<dyn SettingsBroadcaster>) {
        *self.inner.broadcaster.borrow_mut() = Some(broadcaster);
    }

    /// Registers with the OS theme-change channel on platforms that have
    /// one. Returns false (registering nothing) elsewhere.
    pub fn subscribe_os_signal(&self, channel: &dyn OsThemeChannel) -> bool {
        if !supports_os_theme_notifications() {
            return false;
        }
        let resolver = Self {
            inner: Rc::clone(&self.inner),
        };
        channel.subscribe(Box::new(move || resolver.handle_os_theme_notification()));
        true
    }

    /// Reacts to one OS theme-change notification: re-reads the preference,
    /// recomputes the derived signal, and emits the cross-process share.
    pub fn handle_os_theme_notification(&self) {
        let value = detect_dark_colors();
        self.inner.should_use_dark_colors.set(value);
        debug!(should_use_dark_colors = value, "OS theme notification");

        let snapshot = self.inner.store.snapshot();
        self.inner
            .recompute(snapshot.dark_mode, snapshot.adaptable_dark_mode);

        if let Some(broadcaster) = self.inner.broadcaster.borrow().as_ref() {
            broadcaster.share_dark_colors(value);
        }
    }

    /// The derived signal for the current snapshot and OS preference.
    pub fn is_dark_theme_active(&self) -> bool {
        let snapshot = self.inner.store.snapshot();
        is_dark_theme_active(
            snapshot.dark_mode,
            snapshot.adaptable_dark_mode,
            self.inner.should_use_dark_colors.get(),
        )
    }

    /// The theme variant views should render with right now.
    pub fn theme_variant(&self) -> ThemeVariant {
        let snapshot = self.inner.store.snapshot();
        select_theme_variant(self.is_dark_theme_active(), snapshot.dark_mode)
    }

    /// Last OS preference the resolver has seen.
    pub fn should_use_dark_colors(&self) -> bool {
        self.inner.should_use_dark_colors.get()
    }
}

impl ResolverInner {
    fn recompute(&self, dark_mode: bool, adaptable_dark_mode: bool) {
        let active = is_dark_theme_active(
            dark_mode,
            adaptable_dark_mode,
            self.should_use_dark_colors.get(),
        );
        self.apply(active);
    }

    /// Applies the root-class side effect. Returns true when the DOM was
    /// touched: always on the first computation, afterwards only when the
    /// derived value changed.
    fn apply(&self, active: bool) -> bool {
        if self.applied.get() == Some(active) {
            return false;
        }
        self.document.set_root_class(DARK_THEME_CLASS, active);
        self.applied.set(Some(active));
        debug!(active, "dark theme class updated");
        true
    }
}
