//! Dark/light theme synchronization for static documentation sites.
//!
//! This crate is compiled to WebAssembly and loaded by every page of the site.
//! It keeps one preference consistent across five places: the stored choice in
//! `localStorage`, the OS color-scheme signal, the `data-theme` attribute on
//! `<html>`, the label of the toggle button, and the Mermaid diagram theme.
//!
//! All decision logic lives in [`controller::ThemeController`], which talks to
//! the browser only through the [`host::Host`] trait so it can be tested
//! natively. The `web` feature adds the `web-sys` host and the exported
//! `boot` entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme` enum and the pure `resolve` function |
//! | [`state`] | Owned record of persisted, system, and active theme |
//! | [`host`] | Capability traits the controller drives |
//! | [`controller`] | Page-load, click, and system-change handlers |
//! | [`diagram`] | Mermaid option payloads |
//! | [`dispatch`] | Listener decisions: default-action suppression, busy drop |
//! | [`config`] | Keys, selectors, labels, and policies |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Default names shared with the site markup |

pub mod config;
pub mod consts;
pub mod controller;
pub mod diagram;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod state;
pub mod theme;
#[cfg(feature = "web")]
pub mod web;

pub use config::{LogLevel, ThemeConfig};
pub use controller::ThemeController;
pub use error::ThemeError;
pub use host::{DiagramRenderer, DocsThemeApi, Host, ToggleControl};
pub use state::ThemeState;
pub use theme::{Theme, resolve};
