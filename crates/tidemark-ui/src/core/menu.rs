//! State machine for the responsive navigation menu.
//!
//! The open flag is mirrored into two places on the page: the trigger's
//! `aria-expanded` attribute and the panel's open class. Both are derived
//! from a single [`MenuState`] here so the mirrors cannot disagree.

use crate::core::breakpoints::Breakpoint;

/// Menu visibility states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    /// Panel hidden; page scroll available.
    #[default]
    Closed,
    /// Panel visible; page scroll locked.
    Open,
}

/// Events the menu controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the menu trigger button.
    TriggerClick,
    /// Click anywhere outside the header region.
    OutsideClick,
    /// Viewport resized into the given breakpoint.
    Resize(Breakpoint),
}

/// Presentation writes that realize a menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEffects {
    /// Value for the trigger's `aria-expanded` attribute.
    pub aria_expanded: &'static str,
    /// Whether the panel carries its open class.
    pub panel_open: bool,
    /// Inline `overflow` value for the page body.
    pub body_overflow: &'static str,
}

impl MenuState {
    /// Interpret the trigger's `aria-expanded` attribute.
    ///
    /// Anything other than `"true"`, including a missing attribute, reads as
    /// closed.
    #[must_use]
    pub fn from_aria(value: Option<&str>) -> Self {
        if value == Some("true") {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Advance the state machine by one event.
    ///
    /// Only the trigger click can open the menu; the other events close it or
    /// leave it untouched, so re-closing an already closed menu stays a no-op.
    #[must_use]
    pub const fn transition(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::TriggerClick => match self {
                Self::Closed => Self::Open,
                Self::Open => Self::Closed,
            },
            MenuEvent::OutsideClick => Self::Closed,
            MenuEvent::Resize(breakpoint) => {
                if breakpoint.is_narrow() {
                    self
                } else {
                    Self::Closed
                }
            }
        }
    }

    /// Presentation state written back to the page for this state.
    #[must_use]
    pub const fn effects(self) -> MenuEffects {
        match self {
            Self::Closed => MenuEffects {
                aria_expanded: "false",
                panel_open: false,
                body_overflow: "",
            },
            Self::Open => MenuEffects {
                aria_expanded: "true",
                panel_open: true,
                body_overflow: "hidden",
            },
        }
    }

    /// Whether the panel is visible in this state.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
