//! Owned theme state threaded through the controller handlers.

use crate::theme::{Theme, resolve};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Snapshot of the three theme inputs and outputs.
///
/// `active` is `None` only before the first `initialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    /// Explicit user choice loaded from or written to storage.
    pub persisted: Option<Theme>,
    /// Last observed OS color scheme.
    pub system: Theme,
    /// Theme currently applied to the document.
    pub active: Option<Theme>,
}

impl ThemeState {
    /// Theme the inputs call for right now.
    #[must_use]
    pub fn resolved(&self) -> Theme {
        resolve(self.persisted, self.system)
    }

    /// Theme a toggle click starts from: the stored choice, else what is on screen.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.persisted
            .or(self.active)
            .unwrap_or_else(|| self.resolved())
    }

    #[must_use]
    pub fn has_explicit_choice(&self) -> bool {
        self.persisted.is_some()
    }
}
