//! Theme controller: resolve, apply, persist, and react.
//!
//! DESIGN
//! ======
//! The controller owns a [`ThemeState`] and a [`Host`]. Each of the three
//! triggers (page ready, toggle click, system scheme change) recomputes the
//! active theme from state with [`resolve`](crate::theme::resolve) and then
//! pushes it to every surface; nothing is patched incrementally.
//!
//! Applying a theme runs in a fixed order: storage, document attribute,
//! docs-theme API, toggle label, diagrams, SVG attribute. Everything that
//! other code reads back (storage and the attribute) is written before any
//! third-party library is called.
//!
//! TRADE-OFFS
//! ==========
//! By default the system-derived theme is not persisted, so the page keeps
//! following the OS until the user clicks the toggle. Setting
//! `persist_resolved_default` stores the first resolved theme instead, which
//! pins it and stops system changes from having any effect afterwards.

use crate::config::ThemeConfig;
use crate::diagram::DiagramOptions;
use crate::host::Host;
use crate::state::ThemeState;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<H> {
    host: H,
    config: ThemeConfig,
    state: ThemeState,
}

impl<H: Host> ThemeController<H> {
    #[must_use]
    pub fn new(host: H, config: ThemeConfig) -> Self {
        Self { host, config, state: ThemeState::default() }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    // --- Triggers ---

    /// Resolve the theme on page load and apply it.
    ///
    /// Storage is only written when `persist_resolved_default` is set and no
    /// choice was stored yet.
    pub fn initialize(&mut self) -> Theme {
        self.state.persisted = self.load_persisted();
        self.state.system = Theme::from_dark(self.host.prefers_dark());

        let theme = self.state.resolved();
        if self.state.persisted.is_none() && self.config.persist_resolved_default {
            log::debug!("persisting system-derived theme {theme}");
            self.apply_theme(theme);
        } else {
            self.render(theme);
        }
        log::info!(
            "theme initialized: {theme} (persisted={:?}, system={})",
            self.state.persisted,
            self.state.system
        );
        theme
    }

    /// Persist `theme` and push it to every surface.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.host.store_preference(&self.config.storage_key, theme.as_str());
        self.state.persisted = Some(theme);
        self.render(theme);
    }

    /// Switch to the complement of the current theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.state.current().opposite();
        log::debug!("toggle: switching to {next}");
        self.apply_theme(next);
        next
    }

    /// React to the OS color scheme changing.
    ///
    /// Returns the newly applied theme, or `None` when an explicit choice is
    /// stored and the change is ignored.
    pub fn on_system_preference_change(&mut self, matches: bool) -> Option<Theme> {
        self.state.system = Theme::from_dark(matches);
        if self.state.has_explicit_choice() {
            log::debug!("system scheme changed to {}; explicit choice kept", self.state.system);
            return None;
        }

        let theme = self.state.resolved();
        self.render(theme);
        Some(theme)
    }

    // --- Propagation ---

    fn load_persisted(&self) -> Option<Theme> {
        let raw = self.host.load_preference(&self.config.storage_key)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("ignoring stored preference: {e}");
                None
            }
        }
    }

    fn render(&mut self, theme: Theme) {
        self.host.set_root_attribute(&self.config.attribute, theme.as_str());
        self.state.active = Some(theme);

        if let Some(docs) = self.host.docs_theme() {
            if let Err(e) = docs.set_theme(theme.as_str()) {
                log::warn!("docs theme setTheme failed: {e}");
            }
        }

        if let Some(control) = self.host.toggle_control() {
            control.set_label(self.config.label_for(theme));
        }

        self.sync_diagrams(theme);

        if let Some(name) = &self.config.svg_theme_attribute {
            self.host.set_svg_attribute(name, theme.as_str());
        }
    }

    fn sync_diagrams(&mut self, theme: Theme) {
        let Some(diagrams) = self.host.diagrams() else {
            log::debug!("diagram library not loaded; skipping");
            return;
        };

        if let Err(e) = diagrams.initialize(&DiagramOptions::for_theme(theme)) {
            log::warn!("failed to reconfigure diagrams: {e}");
            return;
        }

        for selector in &self.config.diagram_selectors {
            if let Err(e) = diagrams.rerender(selector) {
                log::warn!("failed to re-render diagrams matching {selector}: {e}");
            }
        }
    }
}
