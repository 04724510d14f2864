//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and the navigation bar share redirect and sign-out
//! behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ClientConfig;
use crate::state::auth::{AuthState, should_redirect_unauth};
use crate::util::session_store;

/// Login route used by guards.
pub const LOGIN_PATH: &str = "/auth/login";

/// Redirect to the login page whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Restore the persisted session once the app is running in the browser.
pub fn install_session_restore(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        if auth.get_untracked().loading {
            auth.set(AuthState::restored(session_store::load_session()));
        }
    });
}

/// Clear local session state and revoke the token with the auth provider.
pub fn sign_out(auth: RwSignal<AuthState>, config: ClientConfig) {
    let token = auth.get_untracked().access_token().map(str::to_owned);
    session_store::clear_session();
    auth.set(AuthState::restored(None));
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                crate::net::auth::sign_out(&config, &token).await;
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, config);
    }
}
