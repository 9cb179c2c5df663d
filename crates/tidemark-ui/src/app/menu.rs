//! DOM wiring for the navigation menu controller.

use super::{HEADER_MENU, HEADER_WRAPPER, MENU_TOGGLE, OPEN_CLASS, current_breakpoint, query};
use crate::core::menu::{MenuEvent, MenuState};
use gloo::events::EventListener;
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

/// Attach the menu listeners, or do nothing when the page has no menu.
pub(crate) fn init() {
    let Some(trigger) = query(MENU_TOGGLE) else {
        return;
    };
    let Some(panel) = query(HEADER_MENU) else {
        return;
    };

    // The trigger owns its clicks outright; the document-level dismissal
    // below never observes them.
    {
        let handle = trigger.clone();
        let panel = panel.clone();
        EventListener::new(&trigger, "click", move |event| {
            event.stop_propagation();
            let state = read_state(&handle);
            apply(state.transition(MenuEvent::TriggerClick), &handle, &panel);
        })
        .forget();
    }

    // Header region resolved once; without it there is nothing to scope the
    // dismissal to, so the listener is simply not attached.
    if let Some(header) = query(HEADER_WRAPPER) {
        let handle = trigger.clone();
        let panel = panel.clone();
        EventListener::new(&document(), "click", move |event| {
            if target_outside(&header, event) {
                let state = read_state(&handle);
                apply(state.transition(MenuEvent::OutsideClick), &handle, &panel);
            }
        })
        .forget();
    }

    EventListener::new(&window(), "resize", move |_event| {
        let state = read_state(&trigger);
        apply(
            state.transition(MenuEvent::Resize(current_breakpoint())),
            &trigger,
            &panel,
        );
    })
    .forget();
}

/// Current state as mirrored on the trigger's `aria-expanded` attribute.
fn read_state(trigger: &Element) -> MenuState {
    MenuState::from_aria(trigger.get_attribute("aria-expanded").as_deref())
}

/// Write one state onto the trigger, the panel, and the body scroll lock.
fn apply(state: MenuState, trigger: &Element, panel: &Element) {
    let effects = state.effects();
    let _ = trigger.set_attribute("aria-expanded", effects.aria_expanded);
    let _ = panel
        .class_list()
        .toggle_with_force(OPEN_CLASS, effects.panel_open);
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", effects.body_overflow);
    }
}

/// Whether the click landed outside the header region.
fn target_outside(header: &Element, event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| !header.contains(Some(&node)))
}
