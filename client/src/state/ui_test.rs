use super::*;

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn ui_state_default_is_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
    assert_eq!(state.modal, None);
}

#[test]
fn mobile_menu_toggles_and_closes() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
    state.toggle_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Browse overlays
// =============================================================

#[test]
fn opening_preview_replaces_comments() {
    let mut state = UiState::default();
    state.open_comments("101");
    assert_eq!(state.modal, Some(BrowseModal::Comments("101".to_owned())));
    state.open_preview("102");
    assert_eq!(state.modal, Some(BrowseModal::Preview("102".to_owned())));
    state.close_modal();
    assert_eq!(state.modal, None);
}

#[test]
fn escape_closes_open_modal() {
    let mut state = UiState::default();
    state.open_preview("105");
    assert!(state.handle_key("Escape"));
    assert_eq!(state.modal, None);
}

#[test]
fn other_keys_and_idle_escape_are_ignored() {
    let mut state = UiState::default();
    assert!(!state.handle_key("Escape"));
    assert_eq!(state, UiState::default());
    state.open_comments("101");
    let before = state.clone();
    for key in ["Enter", "a", "Tab", "escape"] {
        assert!(!state.handle_key(key));
    }
    assert_eq!(state, before);
}
