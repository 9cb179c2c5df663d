//! DOM wiring for the language-selector dropdown.

use super::{LANG_DROPDOWN, LANG_TOGGLE, OPEN_CLASS, current_breakpoint, query};
use crate::core::dropdown::{self, DropdownState};
use gloo::events::EventListener;

/// Attach the dropdown toggle for narrow viewports.
///
/// The viewport check runs once at startup; pages loaded wide never wire the
/// control.
pub(crate) fn init() {
    let Some(toggle) = query(LANG_TOGGLE) else {
        return;
    };
    let Some(panel) = query(LANG_DROPDOWN) else {
        return;
    };
    if !dropdown::activates(current_breakpoint()) {
        return;
    }

    EventListener::new(&toggle, "click", move |event| {
        // Keep the click away from the menu's document-level dismissal.
        event.stop_propagation();
        let state = if panel.class_list().contains(OPEN_CLASS) {
            DropdownState::Open
        } else {
            DropdownState::Closed
        };
        let _ = panel
            .class_list()
            .toggle_with_force(OPEN_CLASS, state.toggled().is_open());
    })
    .forget();
}
