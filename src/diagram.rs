//! Mermaid option payloads.
//!
//! Mermaid names its dark palette `dark` and its light palette `default`.
//! [`DiagramOptions`] is what the controller hands to `mermaid.initialize`
//! on every theme change; [`DiagramConfig`] is the full site configuration
//! pages use before the first render.

use serde::Serialize;

use crate::theme::{Theme, resolve};

#[cfg(test)]
#[path = "diagram_test.rs"]
mod diagram_test;

/// Mermaid palette name for a site theme.
#[must_use]
pub fn mermaid_theme(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "dark",
        Theme::Light => "default",
    }
}

/// Theme a page is showing, for configuring Mermaid before the first render.
///
/// The document attribute wins when it holds a valid theme; otherwise the
/// stored choice and OS scheme resolve it the same way the controller does.
#[must_use]
pub fn page_theme(attribute: Option<&str>, stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(Ok(theme)) = attribute.map(str::parse::<Theme>) {
        return theme;
    }
    let persisted = match stored.map(str::parse::<Theme>) {
        Some(Ok(theme)) => Some(theme),
        _ => None,
    };
    resolve(persisted, Theme::from_dark(prefers_dark))
}

/// Re-initialization options passed to `mermaid.initialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DiagramOptions {
    pub theme: &'static str,
}

impl DiagramOptions {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        Self { theme: mermaid_theme(theme) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowchartConfig {
    pub use_max_width: bool,
    pub html_labels: bool,
}

/// Site-wide Mermaid configuration applied before diagrams first render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConfig {
    pub theme: &'static str,
    pub security_level: &'static str,
    pub start_on_load: bool,
    pub flowchart: FlowchartConfig,
}

impl DiagramConfig {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            theme: mermaid_theme(theme),
            security_level: "loose",
            start_on_load: true,
            flowchart: FlowchartConfig { use_max_width: true, html_labels: true },
        }
    }
}
