use super::*;

#[test]
fn default_state_is_unresolved_light() {
    let state = ThemeState::default();
    assert_eq!(state.persisted, None);
    assert_eq!(state.active, None);
    assert_eq!(state.resolved(), Theme::Light);
    assert!(!state.has_explicit_choice());
}

#[test]
fn resolved_prefers_persisted() {
    let state = ThemeState { persisted: Some(Theme::Dark), system: Theme::Light, active: None };
    assert_eq!(state.resolved(), Theme::Dark);
    assert!(state.has_explicit_choice());
}

#[test]
fn current_uses_active_when_nothing_persisted() {
    let state = ThemeState { persisted: None, system: Theme::Light, active: Some(Theme::Dark) };
    assert_eq!(state.current(), Theme::Dark);
}

#[test]
fn current_falls_back_to_resolved_before_first_apply() {
    let state = ThemeState { persisted: None, system: Theme::Dark, active: None };
    assert_eq!(state.current(), Theme::Dark);
}
