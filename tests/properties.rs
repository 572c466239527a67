//! End-to-end theme behavior through the public API with an in-memory page.

use std::collections::HashMap;

use theme_sync::diagram::DiagramOptions;
use theme_sync::{
    DiagramRenderer, DocsThemeApi, Host, Theme, ThemeConfig, ThemeController, ThemeError,
    ToggleControl,
};

#[derive(Default)]
struct Button {
    text: String,
}

impl ToggleControl for Button {
    fn set_label(&mut self, label: &str) {
        self.text = label.to_owned();
    }
}

#[derive(Default)]
struct Mermaid {
    theme: Option<&'static str>,
    rendered: Vec<String>,
    broken: bool,
}

impl DiagramRenderer for Mermaid {
    fn initialize(&mut self, options: &DiagramOptions) -> Result<(), ThemeError> {
        self.theme = Some(options.theme);
        Ok(())
    }

    fn rerender(&mut self, selector: &str) -> Result<(), ThemeError> {
        self.rendered.push(selector.to_owned());
        if self.broken {
            return Err(ThemeError::Host("Parse error on line 1".into()));
        }
        Ok(())
    }
}

#[derive(Default)]
struct Page {
    local_storage: HashMap<String, String>,
    html: HashMap<String, String>,
    os_dark: bool,
    button: Option<Button>,
    mermaid: Option<Mermaid>,
}

impl Host for Page {
    fn load_preference(&self, key: &str) -> Option<String> {
        self.local_storage.get(key).cloned()
    }

    fn store_preference(&mut self, key: &str, value: &str) {
        self.local_storage.insert(key.to_owned(), value.to_owned());
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.html.insert(name.to_owned(), value.to_owned());
    }

    fn set_svg_attribute(&mut self, _name: &str, _value: &str) {}

    fn prefers_dark(&self) -> bool {
        self.os_dark
    }

    fn toggle_control(&mut self) -> Option<&mut dyn ToggleControl> {
        self.button.as_mut().map(|b| b as &mut dyn ToggleControl)
    }

    fn diagrams(&mut self) -> Option<&mut dyn DiagramRenderer> {
        self.mermaid.as_mut().map(|m| m as &mut dyn DiagramRenderer)
    }

    fn docs_theme(&mut self) -> Option<&mut dyn DocsThemeApi> {
        None
    }
}

fn page(stored: Option<&str>, os_dark: bool) -> Page {
    let mut page = Page { os_dark, button: Some(Button::default()), ..Page::default() };
    if let Some(value) = stored {
        page.local_storage.insert("theme".into(), value.into());
    }
    page
}

fn attr(c: &ThemeController<Page>) -> Option<&str> {
    c.host().html.get("data-theme").map(String::as_str)
}

fn stored(c: &ThemeController<Page>) -> Option<&str> {
    c.host().local_storage.get("theme").map(String::as_str)
}

#[test]
fn stored_choice_wins_over_os_scheme() {
    let mut c = ThemeController::new(page(Some("dark"), false), ThemeConfig::default());
    assert_eq!(c.initialize(), Theme::Dark);
    assert_eq!(attr(&c), Some("dark"));
}

#[test]
fn os_scheme_is_used_and_not_stored_on_first_visit() {
    let mut c = ThemeController::new(page(None, true), ThemeConfig::default());
    assert_eq!(c.initialize(), Theme::Dark);
    assert_eq!(attr(&c), Some("dark"));
    assert_eq!(stored(&c), None);

    // A reload on the same origin resolves the same way.
    let mut reloaded = ThemeController::new(page(None, true), ThemeConfig::default());
    assert_eq!(reloaded.initialize(), Theme::Dark);
    assert_eq!(stored(&reloaded), None);
}

#[test]
fn toggled_choice_survives_reload() {
    let mut c = ThemeController::new(page(None, false), ThemeConfig::default());
    c.initialize();
    c.toggle();
    let storage = c.host().local_storage.clone();

    let next = Page { local_storage: storage, os_dark: false, ..Page::default() };
    let mut reloaded = ThemeController::new(next, ThemeConfig::default());
    assert_eq!(reloaded.initialize(), Theme::Dark);
}

#[test]
fn toggling_twice_restores_the_original_theme() {
    let mut c = ThemeController::new(page(Some("light"), false), ThemeConfig::default());
    c.initialize();
    c.toggle();
    assert_eq!(attr(&c), Some("dark"));
    c.toggle();
    assert_eq!(attr(&c), Some("light"));
    assert_eq!(c.host().button.as_ref().map(|b| b.text.as_str()), Some("Toggle Dark Mode"));
}

#[test]
fn os_change_is_ignored_once_a_choice_is_stored() {
    let mut c = ThemeController::new(page(Some("light"), false), ThemeConfig::default());
    c.initialize();
    assert_eq!(c.on_system_preference_change(true), None);
    assert_eq!(attr(&c), Some("light"));
    assert_eq!(stored(&c), Some("light"));
}

#[test]
fn os_change_is_followed_without_a_stored_choice() {
    let mut c = ThemeController::new(page(None, false), ThemeConfig::default());
    c.initialize();
    assert_eq!(c.on_system_preference_change(true), Some(Theme::Dark));
    assert_eq!(attr(&c), Some("dark"));
    assert_eq!(c.host().button.as_ref().map(|b| b.text.as_str()), Some("Toggle Light Mode"));
}

#[test]
fn pages_without_a_button_still_get_the_theme() {
    let host = Page { os_dark: true, ..Page::default() };
    let mut c = ThemeController::new(host, ThemeConfig::default());
    assert_eq!(c.initialize(), Theme::Dark);
    assert_eq!(c.toggle(), Theme::Light);
    assert_eq!(attr(&c), Some("light"));
}

#[test]
fn diagrams_follow_the_theme() {
    let mut host = page(None, false);
    host.mermaid = Some(Mermaid::default());
    let mut c = ThemeController::new(host, ThemeConfig::default());
    c.apply_theme(Theme::Dark);
    let mermaid = c.host().mermaid.as_ref().map(|m| (m.theme, m.rendered.clone()));
    assert_eq!(
        mermaid,
        Some((Some("dark"), vec![".mermaid".to_owned(), ".language-mermaid".to_owned()]))
    );
}

#[test]
fn broken_diagrams_do_not_block_the_theme() {
    let mut host = page(None, false);
    host.mermaid = Some(Mermaid { broken: true, ..Mermaid::default() });
    let mut c = ThemeController::new(host, ThemeConfig::default());
    c.apply_theme(Theme::Dark);
    assert_eq!(attr(&c), Some("dark"));
    assert_eq!(stored(&c), Some("dark"));
    assert_eq!(c.host().mermaid.as_ref().map(|m| m.rendered.len()), Some(2));
}
