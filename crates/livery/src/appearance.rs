//! Reactive appearance wiring: settings changes in, stylesheet updates out.
//!
//! [`Appearance::init`] creates the managed style element once, then
//! registers one observer per appearance field. Every reaction performs a
//! full regeneration from the current snapshot and replaces the element's
//! whole text; nothing is patched incrementally, so reactions are
//! order-independent and safe to replay.
//!
//! The auxiliary vertical-layout link is part of the same reaction: it
//! exists exactly while `use_vertical_style` is true, created lazily on
//! first need and detached when the mode turns off.

use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, warn};

use livery_settings::{AppearanceSettings, SettingField, SettingsStore};
use livery_style::{StyleError, StyleSynthesizer};

use crate::document::{Document, DomError, StyleHandle};

/// Id of the managed stylesheet element.
pub const STYLE_ELEMENT_ID: &str = "custom-appearance-style";

/// Id of the auxiliary vertical-layout stylesheet link.
pub const VERTICAL_STYLE_LINK_ID: &str = "vertical-style";

/// Static resource the vertical-layout link points at.
pub const VERTICAL_STYLE_HREF: &str = "./styles/vertical.css";

/// Error raised during appearance initialization.
#[derive(Debug, Error)]
pub enum AppearanceError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Style(#[from] StyleError),
}

/// The appearance controller. Owns the managed style element and the
/// synthesizer, and keeps both consistent with the settings store.
pub struct Appearance {
    inner: Rc<AppearanceInner>,
}

struct AppearanceInner {
    document: Document,
    style: StyleHandle,
    synthesizer: StyleSynthesizer,
}

impl Appearance {
    /// Creates the managed style element and wires the per-field reactions.
    ///
    /// The accent-color reaction fires immediately on registration, which
    /// seeds the element with the style for the current snapshot; the other
    /// reactions only fire on subsequent changes. Must be called exactly
    /// once per document.
    ///
    /// # Errors
    ///
    /// Fails if the managed element already exists (double initialization)
    /// or the fragment templates fail to compile.
    pub fn init(store: &Rc<SettingsStore>, document: &Document) -> Result<Self, AppearanceError> {
        let style = document.create_style_element(STYLE_ELEMENT_ID)?;
        let inner = Rc::new(AppearanceInner {
            document: document.clone(),
            style,
            synthesizer: StyleSynthesizer::new()?,
        });

        const REACTIONS: [(SettingField, bool); 5] = [
            (SettingField::AccentColor, true),
            (SettingField::ServiceRibbonWidth, false),
            (SettingField::IconSize, false),
            (SettingField::ShowDragArea, false),
            (SettingField::UseVerticalStyle, false),
        ];
        for (field, fire_immediately) in REACTIONS {
            let inner = Rc::clone(&inner);
            store.observe(field, fire_immediately, move |settings| {
                inner.update_style(settings);
            });
        }

        Ok(Self { inner })
    }

    /// Regenerates and installs the stylesheet for the given snapshot.
    ///
    /// Reactions call this automatically; it is exposed for callers that
    /// need to force a refresh.
    pub fn update_style(&self, settings: &AppearanceSettings) {
        self.inner.update_style(settings);
    }

    /// Read access to the managed element, mainly for diagnostics.
    pub fn style_text(&self) -> String {
        self.inner.style.text()
    }
}

impl AppearanceInner {
    fn update_style(&self, settings: &AppearanceSettings) {
        self.sync_vertical_link(settings.use_vertical_style);
        match self.synthesizer.generate_style(settings) {
            Ok(style) => {
                debug!(bytes = style.len(), "installing regenerated stylesheet");
                self.style.set_text(style);
            }
            // Presentation-only subsystem: keep the previous stylesheet
            // rather than propagate a failure into the UI loop.
            Err(err) => warn!(%err, "style generation failed; keeping previous stylesheet"),
        }
    }

    fn sync_vertical_link(&self, vertical: bool) {
        if vertical {
            self.document
                .ensure_link(VERTICAL_STYLE_LINK_ID, VERTICAL_STYLE_HREF);
        } else {
            self.document.remove_link(VERTICAL_STYLE_LINK_ID);
        }
    }
}
