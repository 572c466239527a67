//! Browser shell: `web-sys` host and the exported entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages load the WASM bundle and call `boot()` (optionally with a JSON
//! config). Boot installs the console logger, waits for `DOMContentLoaded`
//! when the document is still loading, then initializes the controller and
//! wires the toggle click and the color-scheme `change` listeners.
//!
//! The controller is shared by those listeners through `Rc<RefCell<_>>`.
//! Each handler holds the borrow for its whole resolve-and-apply sequence;
//! a trigger arriving while another is still running is dropped with a
//! warning instead of panicking (see [`crate::dispatch`]). Listener closures live for the page
//! lifetime and are leaked with `Closure::forget`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, MediaQueryList, MediaQueryListEvent, Storage, Window};

use crate::config::ThemeConfig;
use crate::consts::{
    DARK_SCHEME_QUERY, DOCS_THEME_GLOBAL, MERMAID_GLOBAL, STORAGE_KEY, THEME_ATTRIBUTE, TOGGLE_SELECTOR,
};
use crate::controller::ThemeController;
use crate::diagram::{DiagramConfig, DiagramOptions, page_theme};
use crate::dispatch::{run_exclusive, suppresses_default};
use crate::error::ThemeError;
use crate::host::{DiagramRenderer, DocsThemeApi, Host, ToggleControl};

type SharedController = Rc<RefCell<ThemeController<WebHost>>>;

impl From<ThemeError> for JsValue {
    fn from(err: ThemeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn js_error(err: JsValue) -> ThemeError {
    ThemeError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Look up a global property, treating `undefined` and `null` as absent.
fn global(window: &Window, name: &str) -> Option<JsValue> {
    match Reflect::get(window, &JsValue::from_str(name)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => Some(value),
        Ok(_) => None,
        Err(e) => {
            log::debug!("reading window.{name} threw: {e:?}");
            None
        }
    }
}

fn method(target: &JsValue, name: &str) -> Result<Function, ThemeError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| ThemeError::Host(format!("{name} is not a function")))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ThemeError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ThemeError::Host(e.to_string()))
}

// =============================================================================
// CAPABILITIES
// =============================================================================

pub struct WebToggle {
    element: Element,
}

impl ToggleControl for WebToggle {
    fn set_label(&mut self, label: &str) {
        self.element.set_text_content(Some(label));
    }
}

/// `window.mermaid`, captured for one propagation.
pub struct Mermaid {
    library: JsValue,
    initialize: Function,
    init: Function,
    document: Document,
}

impl Mermaid {
    fn lookup(window: &Window, document: &Document) -> Option<Self> {
        let library = global(window, MERMAID_GLOBAL)?;
        let initialize = method(&library, "initialize");
        let init = method(&library, "init");
        match (initialize, init) {
            (Ok(initialize), Ok(init)) => Some(Self { library, initialize, init, document: document.clone() }),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("window.{MERMAID_GLOBAL} is present but unusable: {e}");
                None
            }
        }
    }
}

impl DiagramRenderer for Mermaid {
    fn initialize(&mut self, options: &DiagramOptions) -> Result<(), ThemeError> {
        let options = to_js(options)?;
        self.initialize.call1(&self.library, &options).map_err(js_error)?;
        Ok(())
    }

    fn rerender(&mut self, selector: &str) -> Result<(), ThemeError> {
        let nodes = self.document.query_selector_all(selector).map_err(js_error)?;
        self.init
            .call2(&self.library, &JsValue::UNDEFINED, &nodes)
            .map_err(js_error)?;
        Ok(())
    }
}

/// `window.jtd` from the Just the Docs theme.
pub struct DocsTheme {
    api: JsValue,
    set_theme: Function,
}

impl DocsTheme {
    fn lookup(window: &Window) -> Option<Self> {
        let api = global(window, DOCS_THEME_GLOBAL)?;
        match method(&api, "setTheme") {
            Ok(set_theme) => Some(Self { api, set_theme }),
            Err(_) => None,
        }
    }
}

impl DocsThemeApi for DocsTheme {
    fn set_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        self.set_theme
            .call1(&self.api, &JsValue::from_str(name))
            .map_err(js_error)?;
        Ok(())
    }
}

// =============================================================================
// HOST
// =============================================================================

pub struct WebHost {
    window: Window,
    document: Document,
    root: Element,
    scheme: Option<MediaQueryList>,
    toggle: Option<WebToggle>,
    mermaid: Option<Mermaid>,
    docs: Option<DocsTheme>,
}

impl WebHost {
    /// Capture the document root, toggle control, and color-scheme query.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no root element or the selector
    /// is invalid.
    pub fn new(window: Window, document: Document, toggle_selector: &str) -> Result<Self, ThemeError> {
        let root = document
            .document_element()
            .ok_or_else(|| ThemeError::Host("document has no root element".into()))?;
        let toggle = document
            .query_selector(toggle_selector)
            .map_err(js_error)?
            .map(|element| WebToggle { element });
        let scheme = match window.match_media(DARK_SCHEME_QUERY) {
            Ok(list) => list,
            Err(e) => {
                log::debug!("matchMedia unavailable: {e:?}");
                None
            }
        };
        Ok(Self { window, document, root, scheme, toggle, mermaid: None, docs: None })
    }

    fn storage(&self) -> Option<Storage> {
        match self.window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::debug!("localStorage unavailable: {e:?}");
                None
            }
        }
    }

    fn toggle_element(&self) -> Option<Element> {
        self.toggle.as_ref().map(|t| t.element.clone())
    }
}

impl Host for WebHost {
    fn load_preference(&self, key: &str) -> Option<String> {
        match self.storage()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("localStorage read failed: {e:?}");
                None
            }
        }
    }

    fn store_preference(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::debug!("localStorage write failed: {e:?}");
        }
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        if let Err(e) = self.root.set_attribute(name, value) {
            log::debug!("setting {name} on root failed: {e:?}");
        }
    }

    fn set_svg_attribute(&mut self, name: &str, value: &str) {
        let nodes = match self.document.query_selector_all("svg") {
            Ok(nodes) => nodes,
            Err(e) => {
                log::debug!("svg lookup failed: {e:?}");
                return;
            }
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if let Err(e) = element.set_attribute(name, value) {
                log::debug!("setting {name} on svg failed: {e:?}");
            }
        }
    }

    fn prefers_dark(&self) -> bool {
        self.scheme.as_ref().is_some_and(MediaQueryList::matches)
    }

    fn toggle_control(&mut self) -> Option<&mut dyn ToggleControl> {
        self.toggle.as_mut().map(|t| t as &mut dyn ToggleControl)
    }

    fn diagrams(&mut self) -> Option<&mut dyn DiagramRenderer> {
        self.mermaid = Mermaid::lookup(&self.window, &self.document);
        self.mermaid.as_mut().map(|m| m as &mut dyn DiagramRenderer)
    }

    fn docs_theme(&mut self) -> Option<&mut dyn DocsThemeApi> {
        self.docs = DocsTheme::lookup(&self.window);
        self.docs.as_mut().map(|d| d as &mut dyn DocsThemeApi)
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Boot the theme controller for the current page.
///
/// # Errors
///
/// Returns a JS `Error` when the config JSON is invalid or the browser
/// objects the controller needs are missing.
#[wasm_bindgen]
pub fn boot(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(raw) => ThemeConfig::from_json(&raw)?,
        None => ThemeConfig::default(),
    };
    init_logging(&config);

    let window = web_sys::window().ok_or_else(|| ThemeError::Host("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::Host("no document".into()))?;

    if document.ready_state() == "loading" {
        let on_ready_window = window.clone();
        let on_ready_document = document.clone();
        let mut pending = Some(config);
        let on_ready = Closure::wrap(Box::new(move |_: Event| {
            let Some(config) = pending.take() else {
                return;
            };
            if let Err(e) = start(on_ready_window.clone(), on_ready_document.clone(), config) {
                log::error!("theme boot failed: {e}");
            }
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_ready.forget();
        return Ok(());
    }

    start(window, document, config)?;
    Ok(())
}

/// Site-wide Mermaid configuration for the page's theme.
///
/// Uses the theme on `<html>` when set; before `boot` has run, falls back to
/// the stored choice and then the OS color scheme.
///
/// # Errors
///
/// Returns a JS `Error` when there is no document or serialization fails.
#[wasm_bindgen(js_name = diagramConfig)]
pub fn diagram_config(attribute: Option<String>, storage_key: Option<String>) -> Result<JsValue, JsValue> {
    let attribute = attribute.unwrap_or_else(|| THEME_ATTRIBUTE.to_owned());
    let storage_key = storage_key.unwrap_or_else(|| STORAGE_KEY.to_owned());
    let window = web_sys::window().ok_or_else(|| ThemeError::Host("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::Host("no document".into()))?;
    let host = WebHost::new(window, document, TOGGLE_SELECTOR)?;

    let current = host.root.get_attribute(&attribute);
    let stored = host.load_preference(&storage_key);
    let theme = page_theme(current.as_deref(), stored.as_deref(), host.prefers_dark());
    Ok(to_js(&DiagramConfig::for_theme(theme))?)
}

fn init_logging(config: &ThemeConfig) {
    console_error_panic_hook::set_once();
    if let Some(level) = config.log_level.to_level() {
        if console_log::init_with_level(level).is_err() {
            log::debug!("logger already installed");
        }
    }
}

fn start(window: Window, document: Document, config: ThemeConfig) -> Result<(), ThemeError> {
    let host = WebHost::new(window, document, &config.toggle_selector)?;
    let toggle = host.toggle_element();
    let scheme = host.scheme.clone();

    let controller: SharedController = Rc::new(RefCell::new(ThemeController::new(host, config)));
    controller.borrow_mut().initialize();

    if let Some(element) = toggle {
        attach_toggle(&controller, &element)?;
    }
    if let Some(list) = scheme {
        attach_scheme(&controller, &list)?;
    }
    Ok(())
}

fn attach_toggle(controller: &SharedController, element: &Element) -> Result<(), ThemeError> {
    let handle = Rc::clone(controller);
    let navigable = suppresses_default(&element.tag_name(), element.has_attribute("href"));
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        if navigable {
            event.prevent_default();
        }
        run_exclusive(&handle, "toggle", ThemeController::toggle);
    }) as Box<dyn FnMut(_)>);
    element
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_click.forget();
    Ok(())
}

fn attach_scheme(controller: &SharedController, list: &MediaQueryList) -> Result<(), ThemeError> {
    let handle = Rc::clone(controller);
    let on_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
        run_exclusive(&handle, "scheme change", |controller| {
            controller.on_system_preference_change(event.matches())
        });
    }) as Box<dyn FnMut(_)>);
    list.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_change.forget();
    Ok(())
}
