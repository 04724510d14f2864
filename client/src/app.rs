//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::config::{ClientConfig, META_AUTH_ANON_KEY, META_AUTH_URL, META_BACKEND_URL};
use crate::pages::{
    about::AboutPage,
    browse::BrowsePage,
    claim_detail::ClaimDetailPage,
    dashboard::DashboardPage,
    home::HomePage,
    login::{LoginPage, RegisterPage},
};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::auth::install_session_restore;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Runtime endpoints are written into `<meta>` tags so the hydrated bundle
/// can read them back with [`ClientConfig::from_document`].
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let backend_url = config.backend_url.clone().unwrap_or_default();
    let auth_url = config.auth_url.clone().unwrap_or_default();
    let auth_anon_key = config.auth_anon_key.clone().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_BACKEND_URL content=backend_url/>
                <meta name=META_AUTH_URL content=auth_url/>
                <meta name=META_AUTH_ANON_KEY content=auth_anon_key/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the endpoint config and shared state contexts, and sets up
/// client-side routing.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(auth);
    provide_context(ui);

    install_session_restore(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/truthguard.css"/>
        <Title text="TruthGuard AI - Combat Misinformation"/>

        <Router>
            <Navigation/>
            <main class="page">
                <Routes fallback=|| view! { <p class="page__missing">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("browse") view=BrowsePage/>
                    <Route path=(StaticSegment("claims"), ParamSegment("id")) view=ClaimDetailPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
