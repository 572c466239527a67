//! Default names shared with the site markup and stylesheets.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the explicit user choice.
pub const STORAGE_KEY: &str = "theme";

// ── Document ────────────────────────────────────────────────────

/// Attribute on `<html>` that the stylesheets switch on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Selector for the toggle button rendered by the site layout.
pub const TOGGLE_SELECTOR: &str = ".js-toggle-dark-mode";

/// Button label while the dark theme is active.
pub const DARK_ACTIVE_LABEL: &str = "Toggle Light Mode";

/// Button label while the light theme is active.
pub const LIGHT_ACTIVE_LABEL: &str = "Toggle Dark Mode";

/// Media query reporting the OS color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Diagrams ────────────────────────────────────────────────────

/// Block-level `<div class="mermaid">` containers.
pub const MERMAID_BLOCK_SELECTOR: &str = ".mermaid";

/// Fenced ```` ```mermaid ```` code blocks rendered by the markdown pipeline.
pub const MERMAID_FENCE_SELECTOR: &str = ".language-mermaid";

/// Global object exposed by the Mermaid bundle.
pub const MERMAID_GLOBAL: &str = "mermaid";

/// Global object exposed by the Just the Docs theme.
pub const DOCS_THEME_GLOBAL: &str = "jtd";
