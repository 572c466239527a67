//! The two-valued theme and the pure resolution rule.

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Display mode applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage and to the document attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The theme a toggle click switches to.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Map a `prefers-color-scheme: dark` match result to a theme.
    #[must_use]
    pub fn from_dark(matches: bool) -> Self {
        if matches { Theme::Dark } else { Theme::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}

/// Active theme for a given persisted choice and system signal.
///
/// An explicit choice always wins; the system signal is only the fallback.
#[must_use]
pub fn resolve(persisted: Option<Theme>, system: Theme) -> Theme {
    persisted.unwrap_or(system)
}
