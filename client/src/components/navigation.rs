//! Top navigation bar with the user menu and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Reads `AuthState` for link visibility and the
//! user handle, and `UiState` for the mobile menu toggle.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::sign_out;

/// One navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub requires_auth: bool,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", href: "/", requires_auth: false },
    NavItem { label: "Browse Claims", href: "/browse", requires_auth: false },
    NavItem { label: "About", href: "/about", requires_auth: false },
    NavItem { label: "Dashboard", href: "/dashboard", requires_auth: true },
];

/// Entries visible for the given auth status.
pub fn visible_items(authenticated: bool) -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS.iter().filter(move |item| authenticated || !item.requires_auth)
}

#[component]
pub fn Navigation() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ClientConfig>();

    let authenticated = move || auth.get().is_authenticated();
    let close_menu = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_mobile_menu);

    let on_sign_out = {
        let config = config.clone();
        move |_: leptos::ev::MouseEvent| {
            sign_out(auth, config.clone());
            ui.update(UiState::close_mobile_menu);
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            }
        }
    };

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a class="nav__brand" href="/">
                    <span class="nav__logo" aria-hidden="true">"🛡"</span>
                    <span class="nav__title">"TruthGuard AI"</span>
                </a>

                <div class="nav__links">
                    {move || {
                        visible_items(authenticated())
                            .map(|item| view! { <a class="nav__link" href=item.href>{item.label}</a> })
                            .collect_view()
                    }}
                </div>

                <div class="nav__user">
                    <Show
                        when=authenticated
                        fallback=|| {
                            view! {
                                <a class="nav__link" href="/auth/login">"Sign In"</a>
                                <a class="btn btn--primary" href="/auth/register">"Sign Up"</a>
                            }
                        }
                    >
                        <div class="nav__menu">
                            <button class="nav__menu-trigger">
                                {move || auth.get().handle().map(str::to_owned).unwrap_or_default()}
                            </button>
                            <div class="nav__dropdown">
                                <a class="nav__dropdown-item" href="/dashboard">"Dashboard"</a>
                                <div class="nav__dropdown-divider"></div>
                                <button class="nav__dropdown-item" on:click=on_sign_out.clone()>
                                    "Sign Out"
                                </button>
                            </div>
                        </div>
                    </Show>
                    <button
                        class="nav__toggle"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    >
                        {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || ui.get().mobile_menu_open>
                <div class="nav__mobile">
                    {move || {
                        visible_items(authenticated())
                            .map(|item| {
                                view! {
                                    <a class="nav__mobile-link" href=item.href on:click=close_menu>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=move || !authenticated()>
                        <div class="nav__mobile-auth">
                            <a class="nav__mobile-link" href="/auth/login" on:click=close_menu>"Sign In"</a>
                            <a class="nav__mobile-link nav__mobile-link--primary" href="/auth/register" on:click=close_menu>
                                "Sign Up"
                            </a>
                        </div>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_link_requires_auth() {
        let guest: Vec<_> = visible_items(false).map(|i| i.label).collect();
        assert_eq!(guest, vec!["Home", "Browse Claims", "About"]);
        let member: Vec<_> = visible_items(true).map(|i| i.label).collect();
        assert_eq!(member, vec!["Home", "Browse Claims", "About", "Dashboard"]);
    }
}
