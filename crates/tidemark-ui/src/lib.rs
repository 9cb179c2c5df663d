#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Tidemark site interactions: the navigation menu, the language-selector
//! dropdown, and the light/dark theme switch for the otherwise static pages.
//! Pure controller logic lives in [`core`]; the wasm-only DOM wiring mounts
//! it onto the markup the templates ship.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::breakpoints::{NARROW_MAX_WIDTH, for_width};
    use crate::core::dropdown;
    use crate::core::menu::{MenuEvent, MenuState};
    use crate::core::theme::ThemePreference;

    #[test]
    fn widening_the_viewport_closes_an_open_menu() {
        let open = MenuState::Closed.transition(MenuEvent::TriggerClick);
        assert!(open.is_open());
        let after = open.transition(MenuEvent::Resize(for_width(NARROW_MAX_WIDTH + 1)));
        assert!(!after.is_open());
    }

    #[test]
    fn menu_and_dropdown_share_the_breakpoint_threshold() {
        assert!(dropdown::activates(for_width(NARROW_MAX_WIDTH)));
        assert!(!dropdown::activates(for_width(NARROW_MAX_WIDTH + 1)));
    }

    #[test]
    fn theme_round_trips_through_its_stored_identifier() {
        let mut preference = ThemePreference::load(Some("dark"));
        let flipped = preference.toggle();
        assert_eq!(
            ThemePreference::load(Some(flipped.as_str())).mode(),
            flipped
        );
    }
}
