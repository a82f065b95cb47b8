//! The style synthesizer: settings snapshot in, CSS text out.

use minijinja::{Environment, Value};
use serde::Serialize;

use livery_settings::AppearanceSettings;

use crate::error::StyleError;
use crate::fragments::{
    AccentContext, DragAreaContext, RibbonContext, VerticalContext, ACCENT_TEMPLATE,
    DRAG_AREA_TEMPLATE, RIBBON_TEMPLATE, VERTICAL_TEMPLATE,
};

/// Pre-compiles the fragment templates for repeated rendering.
///
/// Generation is deterministic and side-effect free: the output depends only
/// on the settings snapshot, the fixed theme map, and the icon-size bias.
/// Regenerating with identical settings yields byte-identical output.
///
/// # Example
///
/// ```rust
/// use livery_settings::AppearanceSettings;
/// use livery_style::StyleSynthesizer;
///
/// let synthesizer = StyleSynthesizer::new().unwrap();
/// let settings = AppearanceSettings {
///     service_ribbon_width: "50".into(),
///     ..Default::default()
/// };
/// let style = synthesizer.generate_style(&settings).unwrap();
/// assert!(style.contains("width: 48px !important"));
/// ```
pub struct StyleSynthesizer {
    env: Environment<'static>,
}

impl StyleSynthesizer {
    /// Compiles the fixed fragment templates.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleError`] if a template fails to compile; the sources
    /// are constants, so this only fires on a programming error.
    pub fn new() -> Result<Self, StyleError> {
        let mut env = Environment::new();
        env.add_template("accent", ACCENT_TEMPLATE)?;
        env.add_template("ribbon", RIBBON_TEMPLATE)?;
        env.add_template("drag_area", DRAG_AREA_TEMPLATE)?;
        env.add_template("vertical", VERTICAL_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Generates the full stylesheet for the given snapshot.
    ///
    /// Fragments are concatenated in fixed order (accent, ribbon/icon-size,
    /// drag area, vertical layout), each emitted only when its triggering
    /// condition holds. With everything at its default the result is the
    /// empty string.
    pub fn generate_style(&self, settings: &AppearanceSettings) -> Result<String, StyleError> {
        let mut style = String::new();

        if settings.accent_customized() {
            style.push_str(&self.render("accent", &AccentContext::new(&settings.accent_color))?);
        }
        if settings.ribbon_customized() {
            style.push_str(&self.render("ribbon", &RibbonContext::from_settings(settings))?);
        }
        if settings.show_drag_area {
            style.push_str(&self.render("drag_area", &DragAreaContext::from_settings(settings))?);
        }
        if settings.use_vertical_style {
            style.push_str(&self.render("vertical", &VerticalContext::from_settings(settings))?);
        }

        Ok(style)
    }

    fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String, StyleError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(Value::from_serialize(context))?)
    }
}
