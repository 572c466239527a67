//! Controller configuration.
//!
//! DESIGN
//! ======
//! Every field has a default matching the site layout, so pages pass either
//! nothing or a small JSON object overriding a few names. Unknown fields are
//! rejected to catch typos in page markup early.

use serde::Deserialize;

use crate::consts::{
    DARK_ACTIVE_LABEL, LIGHT_ACTIVE_LABEL, MERMAID_BLOCK_SELECTOR, MERMAID_FENCE_SELECTOR,
    STORAGE_KEY, THEME_ATTRIBUTE, TOGGLE_SELECTOR,
};
use crate::error::ThemeError;
use crate::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Console log verbosity for the browser logger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The `log` level to install, or `None` when logging is disabled.
    #[must_use]
    pub fn to_level(self) -> Option<log::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(log::Level::Error),
            LogLevel::Warn => Some(log::Level::Warn),
            LogLevel::Info => Some(log::Level::Info),
            LogLevel::Debug => Some(log::Level::Debug),
            LogLevel::Trace => Some(log::Level::Trace),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Storage key for the persisted preference.
    pub storage_key: String,
    /// Attribute set on the document root.
    pub attribute: String,
    /// Selector locating the toggle control.
    pub toggle_selector: String,
    /// Label shown while dark is active (describes switching to light).
    pub dark_label: String,
    /// Label shown while light is active (describes switching to dark).
    pub light_label: String,
    /// Diagram container selectors, re-rendered one call per selector.
    pub diagram_selectors: Vec<String>,
    /// When set, this attribute is written on every `<svg>` element too.
    pub svg_theme_attribute: Option<String>,
    /// Persist the system-derived theme on first resolution.
    pub persist_resolved_default: bool,
    pub log_level: LogLevel,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            toggle_selector: TOGGLE_SELECTOR.to_owned(),
            dark_label: DARK_ACTIVE_LABEL.to_owned(),
            light_label: LIGHT_ACTIVE_LABEL.to_owned(),
            diagram_selectors: vec![
                MERMAID_BLOCK_SELECTOR.to_owned(),
                MERMAID_FENCE_SELECTOR.to_owned(),
            ],
            svg_theme_attribute: None,
            persist_resolved_default: false,
            log_level: LogLevel::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed JSON, unknown fields, or
    /// values of the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Toggle label for the given active theme.
    #[must_use]
    pub fn label_for(&self, active: Theme) -> &str {
        match active {
            Theme::Dark => &self.dark_label,
            Theme::Light => &self.light_label,
        }
    }
}
