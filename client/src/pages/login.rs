//! Sign-in and sign-up pages backed by the auth provider's password flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

/// Minimum password length accepted by the auth provider.
const MIN_PASSWORD_LEN: usize = 6;

/// Which credential flow the form runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }

    fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::SignIn, false) => "Sign In",
            (Self::SignIn, true) => "Signing in...",
            (Self::SignUp, false) => "Sign Up",
            (Self::SignUp, true) => "Creating account...",
        }
    }
}

/// Trim the email and check both fields before calling the provider.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::SignIn/> }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::SignUp/> }
}

#[component]
fn AuthForm(mode: AuthMode) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: nothing to do here.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate_home("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match mode {
                    AuthMode::SignIn => {
                        crate::net::auth::sign_in_with_password(&config, &email_value, &password_value)
                            .await
                            .map(Some)
                    }
                    AuthMode::SignUp => crate::net::auth::sign_up(&config, &email_value, &password_value).await,
                };
                match result {
                    Ok(Some(session)) => {
                        crate::util::session_store::save_session(&session);
                        auth.set(AuthState::restored(Some(session)));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Ok(None) => info.set("Check your email to confirm your account, then sign in.".to_owned()),
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &config, &navigate);
        }
    };

    let (switch_prompt, switch_href, switch_label) = match mode {
        AuthMode::SignIn => ("Don't have an account? ", "/auth/register", "Sign Up"),
        AuthMode::SignUp => ("Already have an account? ", "/auth/login", "Sign In"),
    };

    view! {
        <div class="auth-page">
            <div class="auth-card card">
                <h1>{mode.title()}</h1>
                <p class="auth-card__subtitle">"TruthGuard AI"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        placeholder="Password"
                        autocomplete=match mode {
                            AuthMode::SignIn => "current-password",
                            AuthMode::SignUp => "new-password",
                        }
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || mode.submit_label(busy.get())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    {switch_prompt}
                    <a href=switch_href>{switch_label}</a>
                </p>
            </div>
        </div>
    }
}
