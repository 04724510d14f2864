//! Card for a sample claim on the browse grid and home page strip.

use leptos::prelude::*;

use crate::components::verdict_badge::VerdictBadge;
use crate::state::samples::SampleClaim;

/// A sample claim card. The comment counter and preview button only render
/// when the matching callback is supplied.
#[component]
pub fn ClaimCard(
    claim: &'static SampleClaim,
    #[prop(optional)] on_comments: Option<Callback<&'static str>>,
    #[prop(optional)] on_preview: Option<Callback<&'static str>>,
) -> impl IntoView {
    let href = format!("/claims/{}", claim.id);
    let discussion_href = format!("{href}#comments");

    let comments = move || match on_comments {
        Some(cb) => view! {
            <button
                class="claim-card__comments"
                aria-label="Open comments"
                on:click=move |_| cb.run(claim.id)
            >
                {format!("💬 {}", claim.comment_count)}
            </button>
        }
        .into_any(),
        None => view! { <span class="claim-card__comments">{format!("💬 {}", claim.comment_count)}</span> }.into_any(),
    };

    view! {
        <article class="claim-card card">
            <div class="claim-card__header">
                <VerdictBadge verdict=Some(claim.verdict) confidence=Some(claim.confidence) small=true/>
                <span class="claim-card__time">{claim.time_ago}</span>
            </div>
            <a class="claim-card__content" href=href.clone() aria-label="Open claim details">
                {claim.content}
            </a>
            <div class="claim-card__footer">
                <div class="claim-card__meta">
                    <span class="claim-card__type">{claim.content_type.as_str()}</span>
                    {comments}
                </div>
                <div class="claim-card__actions">
                    {on_preview.map(|cb| view! {
                        <button class="claim-card__preview" on:click=move |_| cb.run(claim.id)>
                            "Preview"
                        </button>
                    })}
                    <a class="claim-card__view" href=discussion_href aria-label="Open full discussion">
                        "View →"
                    </a>
                </div>
            </div>
        </article>
    }
}
