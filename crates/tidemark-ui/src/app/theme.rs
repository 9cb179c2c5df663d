//! DOM wiring for the light/dark theme switch.

use super::{THEME_TOGGLE, preferences, query};
use crate::core::theme::{ThemeMode, ThemePreference};
use gloo::events::EventListener;
use gloo::utils::document;

/// Apply the persisted theme, then wire the switch when the page has one.
///
/// The root attribute is written during initialization even on pages without
/// a visible switch, so first paint is themed everywhere; only the click
/// listener requires the element.
pub(crate) fn init() {
    let mut preference = ThemePreference::load(preferences::load_theme().as_deref());
    apply(preference.mode());

    let Some(toggle) = query(THEME_TOGGLE) else {
        return;
    };
    EventListener::new(&toggle, "click", move |_event| {
        let mode = preference.toggle();
        apply(mode);
        preferences::persist_theme(mode);
    })
    .forget();
}

/// Mirror the mode onto the document root for the stylesheets.
fn apply(mode: ThemeMode) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }
}
