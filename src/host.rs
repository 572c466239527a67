//! Capabilities the controller needs from its environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser shell implements [`Host`] over `web-sys`; tests implement it
//! in memory. Storage, the document root, and the system signal are always
//! present. The toggle control, the diagram library, and the docs-theme API
//! are optional and are asked for once per use, so a library that loads after
//! boot is still picked up on the next theme change.

use crate::diagram::DiagramOptions;
use crate::error::ThemeError;

/// The visible button that flips the theme.
pub trait ToggleControl {
    fn set_label(&mut self, label: &str);
}

/// A loaded diagram-rendering library (Mermaid).
pub trait DiagramRenderer {
    /// Reconfigure the library for subsequent renders.
    ///
    /// # Errors
    ///
    /// Returns an error if the library call throws.
    fn initialize(&mut self, options: &DiagramOptions) -> Result<(), ThemeError>;

    /// Re-render every already-inserted diagram matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns an error if the library call throws.
    fn rerender(&mut self, selector: &str) -> Result<(), ThemeError>;
}

/// A documentation theme exposing its own `setTheme`.
pub trait DocsThemeApi {
    /// # Errors
    ///
    /// Returns an error if the theme's call throws.
    fn set_theme(&mut self, name: &str) -> Result<(), ThemeError>;
}

/// Environment the controller reads from and writes to.
pub trait Host {
    fn load_preference(&self, key: &str) -> Option<String>;

    fn store_preference(&mut self, key: &str, value: &str);

    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Write `name` on every `<svg>` element in the document.
    fn set_svg_attribute(&mut self, name: &str, value: &str);

    /// Current result of the dark color-scheme media query.
    fn prefers_dark(&self) -> bool;

    fn toggle_control(&mut self) -> Option<&mut dyn ToggleControl>;

    fn diagrams(&mut self) -> Option<&mut dyn DiagramRenderer>;

    fn docs_theme(&mut self) -> Option<&mut dyn DocsThemeApi>;
}
