//! Dashboard page with claim totals, weekly activity, and recent claims.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Stats are fetched once the
//! session is known; any failure falls back to sample data so the page
//! always renders.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::activity_chart::ActivityChart;
use crate::config::ClientConfig;
use crate::net::types::{DashboardStats, RecentClaim};
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, activity_series, status_modifier};
use crate::util::auth::install_unauth_redirect;
use crate::util::dates::{display_date, now_ms};

/// Dashboard page. Redirects to the login page if there is no session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let state = RwSignal::new(DashboardState::default());

    install_unauth_redirect(auth, use_navigate());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() {
            return;
        }
        let Some(token) = auth.get().access_token().map(str::to_owned) else {
            return;
        };
        requested.set(true);
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_dashboard_stats(&config, &token).await;
                if let Err(e) = &result {
                    log::warn!("dashboard stats unavailable, showing sample data: {e}");
                }
                state.update(|s| s.apply_fetch_result(result, now_ms()));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, &config);
        }
    });

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || view! { <div class="dashboard"><p>"Redirecting..."</p></div> }
        >
            <Show when=move || !state.get().loading fallback=|| view! { <DashboardSkeleton/> }>
                <div class="dashboard">
                    <header class="dashboard__header">
                        <div>
                            <h1>"Dashboard"</h1>
                            <p class="dashboard__intro">
                                "Welcome back! Track your fact-checking activity and submissions."
                            </p>
                            <Show when=move || state.get().using_mock>
                                <span class="dashboard__mock">"Showing sample data"</span>
                            </Show>
                        </div>
                        <a class="btn btn--primary" href="/">"+ New Claim"</a>
                    </header>

                    {move || state.get().stats.map(|stats| view! { <StatTiles stats=stats/> })}

                    {move || {
                        let recent = state.get().stats.map(|s| s.recent_claims).unwrap_or_default();
                        view! { <ActivityChart series=activity_series(&recent, now_ms())/> }
                    }}

                    <section class="dashboard__recent card">
                        <div class="dashboard__recent-header">
                            <h2>"Recent Claims"</h2>
                            <a href="/browse">"View All →"</a>
                        </div>
                        <Show
                            when=move || state.get().has_claims()
                            fallback=|| {
                                view! {
                                    <div class="dashboard__empty">
                                        <h3>"No claims yet"</h3>
                                        <p>"Start fact-checking by submitting your first claim."</p>
                                        <a class="btn btn--primary" href="/">"Submit First Claim"</a>
                                    </div>
                                }
                            }
                        >
                            <ul class="dashboard__claims">
                                {move || {
                                    state
                                        .get()
                                        .stats
                                        .map(|s| s.recent_claims)
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|claim| view! { <RecentClaimRow claim=claim/> })
                                        .collect_view()
                                }}
                            </ul>
                        </Show>
                    </section>
                </div>
            </Show>
        </Show>
    }
}

#[component]
fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div class="dashboard dashboard--loading">
            <div class="skeleton skeleton--title"></div>
            <div class="dashboard__tiles">
                {(0..4).map(|_| view! { <div class="card skeleton skeleton--tile"></div> }).collect_view()}
            </div>
            <div class="card skeleton skeleton--chart"></div>
        </div>
    }
}

#[component]
fn StatTiles(stats: DashboardStats) -> impl IntoView {
    let tiles = [
        ("Total Claims", stats.total_claims, "primary"),
        ("Pending Analysis", stats.pending_claims, "warning"),
        ("Completed", stats.completed_claims, "success"),
        ("RTI Requests", stats.rti_requests, "primary"),
    ];
    view! {
        <div class="dashboard__tiles">
            {tiles
                .into_iter()
                .map(|(label, value, tone)| {
                    view! {
                        <div class="card stat-tile">
                            <span class="stat-tile__label">{label}</span>
                            <span class=format!("stat-tile__value stat-tile__value--{tone}")>{value}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RecentClaimRow(claim: RecentClaim) -> impl IntoView {
    let href = format!("/claims/{}", claim.id);
    let pill = format!("status-pill status-pill--{}", status_modifier(&claim.status));

    view! {
        <li class="recent-claim">
            <div class="recent-claim__body">
                <p class="recent-claim__content">{claim.content.clone()}</p>
                <div class="recent-claim__meta">
                    <span>{display_date(&claim.created_at)}</span>
                    <span class=pill>{claim.status.as_str().to_owned()}</span>
                </div>
            </div>
            <a class="recent-claim__open" href=href aria-label="View claim">"👁"</a>
        </li>
    }
}
