//! Error taxonomy for theme synchronization.
//!
//! ERROR HANDLING
//! ==============
//! Only configuration parsing and browser boot surface errors to callers.
//! Failures from third-party page libraries (Mermaid, the docs theme) are
//! caught inside the controller and logged, so a broken library never leaves
//! storage and the document attribute out of step.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme: {0:?}")]
    InvalidTheme(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("host error: {0}")]
    Host(String),
}
