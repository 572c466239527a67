//! Browser-free decisions made by the event listeners.
//!
//! DESIGN
//! ======
//! Listeners share one controller through `Rc<RefCell<_>>`. [`run_exclusive`]
//! holds the borrow for the whole handler; a trigger that arrives while the
//! borrow is taken is dropped with a warning instead of panicking.

use std::cell::RefCell;

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

/// Whether a click on the toggle must have its default action cancelled.
///
/// Anchors and `href`-carrying controls would navigate on click.
#[must_use]
pub fn suppresses_default(tag: &str, has_href: bool) -> bool {
    tag.eq_ignore_ascii_case("a") || has_href
}

/// Run `handler` with exclusive access to `shared`.
///
/// Returns `None` and logs when another handler is still running.
pub fn run_exclusive<C, R>(shared: &RefCell<C>, trigger: &str, handler: impl FnOnce(&mut C) -> R) -> Option<R> {
    match shared.try_borrow_mut() {
        Ok(mut inner) => Some(handler(&mut inner)),
        Err(_) => {
            log::warn!("theme controller busy; {trigger} dropped");
            None
        }
    }
}
