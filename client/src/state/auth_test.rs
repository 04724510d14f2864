use super::*;
use crate::net::types::SessionUser;

fn session(email: &str) -> Session {
    Session {
        access_token: "tok".to_owned(),
        user: SessionUser { id: "u1".to_owned(), email: email.to_owned() },
    }
}

#[test]
fn default_state_is_loading_without_session() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.access_token(), None);
}

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    assert!(should_redirect_unauth(&AuthState::restored(None)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = AuthState::restored(Some(session("alice@example.com")));
    assert!(!should_redirect_unauth(&state));
    assert_eq!(state.access_token(), Some("tok"));
    assert_eq!(state.handle(), Some("alice"));
}
