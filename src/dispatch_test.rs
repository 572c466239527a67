use std::rc::Rc;

use super::*;

#[test]
fn anchors_suppress_default() {
    assert!(suppresses_default("a", true));
    assert!(suppresses_default("A", false));
}

#[test]
fn href_on_other_elements_suppresses_default() {
    assert!(suppresses_default("BUTTON", true));
}

#[test]
fn plain_button_keeps_default() {
    assert!(!suppresses_default("BUTTON", false));
    assert!(!suppresses_default("abbr", false));
}

#[test]
fn run_exclusive_runs_handler_when_free() {
    let shared = RefCell::new(0);
    let out = run_exclusive(&shared, "toggle", |n| {
        *n += 1;
        *n
    });
    assert_eq!(out, Some(1));
    assert_eq!(*shared.borrow(), 1);
}

#[test]
fn run_exclusive_drops_trigger_while_busy() {
    let shared = Rc::new(RefCell::new(0));
    let held = shared.borrow_mut();
    let out = run_exclusive(&shared, "toggle", |n| {
        *n += 1;
    });
    assert_eq!(out, None);
    drop(held);
    assert_eq!(*shared.borrow(), 0);
}

#[test]
fn run_exclusive_drops_reentrant_trigger() {
    let shared = Rc::new(RefCell::new(Vec::new()));
    let inner = Rc::clone(&shared);
    run_exclusive(&shared, "toggle", |log: &mut Vec<&str>| {
        log.push("outer");
        let nested = run_exclusive(&inner, "scheme change", |log: &mut Vec<&str>| log.push("inner"));
        assert!(nested.is_none());
    });
    assert_eq!(*shared.borrow(), vec!["outer"]);
}
