//! Activation and toggle rules for the language-selector dropdown.

use crate::core::breakpoints::Breakpoint;

/// Dropdown visibility states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    /// Popover hidden.
    #[default]
    Closed,
    /// Popover visible.
    Open,
}

impl DropdownState {
    /// Flip between closed and open.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Whether the popover carries its open class.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Whether the dropdown wires up at all for the viewport observed at startup.
///
/// The decision is taken once; resizing afterwards does not revisit it.
#[must_use]
pub const fn activates(breakpoint: Breakpoint) -> bool {
    breakpoint.is_narrow()
}

#[cfg(test)]
mod tests {
    use super::{DropdownState, activates};
    use crate::core::breakpoints::for_width;

    #[test]
    fn activates_only_on_narrow_viewports() {
        assert!(activates(for_width(320)));
        assert!(activates(for_width(768)));
        assert!(!activates(for_width(769)));
        assert!(!activates(for_width(1440)));
    }

    #[test]
    fn toggle_is_an_involution() {
        for state in [DropdownState::Closed, DropdownState::Open] {
            assert_ne!(state.toggled(), state);
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn starts_closed() {
        assert!(!DropdownState::default().is_open());
    }
}
