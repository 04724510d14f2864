//! "Trust Through Transparency" counters that grow as the page scrolls.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::stats_counter::scroll_progress;
use crate::util::stats_counter::{STATS, format_stat};

#[component]
pub fn StatsSection() -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let Some(doc) = document().document_element() else {
                return;
            };
            progress.set(scroll_progress(
                f64::from(doc.scroll_top()),
                f64::from(doc.scroll_height()),
                f64::from(doc.client_height()),
            ));
        };
        Effect::new(move || measure());
        let handle = window_event_listener(leptos::ev::scroll, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    view! {
        <section class="stats">
            <div class="section-heading">
                <h2>"Trust Through Transparency"</h2>
                <p>
                    "Join thousands of users who rely on TruthGuard AI for accurate, AI-powered fact-checking and community-driven verification."
                </p>
            </div>
            <div class="stats__grid">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stats__item">
                                <div class="stats__value">{move || format_stat(stat, progress.get())}</div>
                                <div class="stats__label">{stat.label}</div>
                                <div class="stats__change">{format!("{}% this month", stat.change)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
