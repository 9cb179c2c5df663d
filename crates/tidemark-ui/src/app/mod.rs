//! DOM wiring for the interaction controllers.
//!
//! Everything here assumes a browser environment; the crate only compiles
//! this module for `wasm32` targets. The pure decisions live in
//! [`crate::core`], this layer samples the page and writes the results back.

use crate::core::breakpoints::{Breakpoint, for_width};
use gloo::events::EventListener;
use gloo::utils::{document, window};
use web_sys::Element;

mod dropdown;
mod menu;
mod preferences;
mod theme;

/// Selector for the menu trigger button.
pub(crate) const MENU_TOGGLE: &str = ".menu-toggle";
/// Selector for the collapsible menu container.
pub(crate) const HEADER_MENU: &str = ".header-menu";
/// Selector for the header region the outside-click dismissal respects.
pub(crate) const HEADER_WRAPPER: &str = ".header-wrapper";
/// Selector for the language-selector trigger.
pub(crate) const LANG_TOGGLE: &str = ".lang-toggle";
/// Selector for the language-selector popover.
pub(crate) const LANG_DROPDOWN: &str = ".lang-dropdown";
/// Selector for the theme switch.
pub(crate) const THEME_TOGGLE: &str = ".theme-toggle";

/// Class whose presence marks a panel as visible.
pub(crate) const OPEN_CLASS: &str = "is-open";

/// Width assumed when the host reports no usable viewport size.
const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

/// Mount every controller once the page's markup is fully available.
///
/// Runs immediately when the document is already parsed; otherwise defers to
/// a one-shot listener so initialization happens exactly once either way.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if document().ready_state() == "loading" {
        EventListener::once(&document(), "DOMContentLoaded", |_event| {
            attach_controllers();
        })
        .forget();
    } else {
        attach_controllers();
    }
}

fn attach_controllers() {
    theme::init();
    menu::init();
    dropdown::init();
}

/// First element matching `selector`, or `None` when the page omits it.
pub(crate) fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

/// Current viewport classification sampled from the window.
pub(crate) fn current_breakpoint() -> Breakpoint {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let width = window()
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH) as u16;
    for_width(width)
}
