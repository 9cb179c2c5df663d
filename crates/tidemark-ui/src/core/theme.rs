//! Theme preference model for the light/dark switch.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode, the first-run default.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in the root `data-theme` attribute and in
    /// persisted storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored identifier; unknown values are rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other mode of the two-element enumeration.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Owned theme state backing the toggle control.
///
/// The document root attribute is a write-only mirror of this value, so the
/// attribute and the persisted preference stay equal without re-reading the
/// DOM on every click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    mode: ThemeMode,
}

impl ThemePreference {
    /// Build from a stored value; absence or an unknown value falls back to
    /// light.
    #[must_use]
    pub fn load(stored: Option<&str>) -> Self {
        Self {
            mode: stored.and_then(ThemeMode::parse).unwrap_or_default(),
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(self) -> ThemeMode {
        self.mode
    }

    /// Flip to the other mode and return it.
    pub const fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeMode, ThemePreference};

    #[test]
    fn identifiers_round_trip() {
        assert_eq!(ThemeMode::parse(ThemeMode::Light.as_str()), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), Some(ThemeMode::Dark));
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(ThemeMode::parse(""), None);
        assert_eq!(ThemeMode::parse("Dark"), None);
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn toggle_is_an_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn load_defaults_to_light() {
        assert_eq!(ThemePreference::load(None).mode(), ThemeMode::Light);
        assert_eq!(ThemePreference::load(Some("sepia")).mode(), ThemeMode::Light);
    }

    #[test]
    fn load_honours_a_stored_dark_value() {
        assert_eq!(ThemePreference::load(Some("dark")).mode(), ThemeMode::Dark);
    }

    #[test]
    fn double_toggle_restores_the_loaded_mode() {
        let mut preference = ThemePreference::load(Some("dark"));
        let original = preference.mode();
        preference.toggle();
        assert_ne!(preference.mode(), original);
        preference.toggle();
        assert_eq!(preference.mode(), original);
    }
}
