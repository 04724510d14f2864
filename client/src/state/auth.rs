//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the navigation bar, the dashboard route guard, and comment forms
//! to coordinate login redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state tracking the current session and restore status.
///
/// `loading` stays true until the stored session has been read on the client,
/// so guards do not redirect during server rendering or hydration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Finish restoring with whatever was found in storage.
    pub fn restored(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    /// Name shown in the user menu.
    pub fn handle(&self) -> Option<&str> {
        self.session.as_ref().map(Session::handle)
    }
}

/// Whether a guarded route should send the visitor to the login page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}
