//! Comments and preview overlays opened from browse cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both overlays read the open modal from `UiState`; clicking the backdrop,
//! the close button, or pressing Escape clears it.

use leptos::prelude::*;

use crate::components::verdict_badge::VerdictBadge;
use crate::state::claim::confidence_percent;
use crate::state::samples::{SampleClaim, find_browse_claim, sample_comments};
use crate::state::ui::{BrowseModal, UiState};
use crate::util::dates::{iso_date, now_ms};

#[component]
pub fn BrowseModals() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || match ui.get().modal? {
        BrowseModal::Comments(id) => {
            find_browse_claim(&id).map(|claim| view! { <CommentsModal claim=claim/> }.into_any())
        }
        BrowseModal::Preview(id) => {
            find_browse_claim(&id).map(|claim| view! { <PreviewModal claim=claim/> }.into_any())
        }
    }
}

#[component]
fn ModalFrame(title: String, close_label: &'static str, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_modal);

    view! {
        <div class="modal">
            <div class="modal__backdrop" on:click=close></div>
            <div class="modal__panel card" role="dialog" aria-modal="true">
                <div class="modal__header">
                    <h3>{title}</h3>
                    <button class="modal__close" aria-label=close_label on:click=close>"✕"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn CommentsModal(claim: &'static SampleClaim) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let comments = sample_comments(claim.id, &iso_date(now_ms()));

    view! {
        <ModalFrame title=format!("Discussion ({})", claim.comment_count) close_label="Close comments">
            <p class="modal__claim">{claim.content}</p>
            <ul class="modal__comments">
                {comments
                    .into_iter()
                    .map(|c| {
                        view! {
                            <li class="modal__comment">
                                <div class="modal__comment-meta">
                                    <span class="modal__comment-user">{c.user}</span>
                                    <span class="modal__comment-date">{c.date}</span>
                                </div>
                                <p>{c.text}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="modal__actions">
                <a
                    class="btn btn--primary"
                    href=format!("/claims/{}#comments", claim.id)
                    on:click=move |_| ui.update(UiState::close_modal)
                >
                    "Open full discussion"
                </a>
            </div>
        </ModalFrame>
    }
}

#[component]
fn PreviewModal(claim: &'static SampleClaim) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let percent = confidence_percent(claim.confidence);

    view! {
        <ModalFrame title="Quick Analysis Preview".to_owned() close_label="Close preview">
            <div class="modal__row">
                <VerdictBadge verdict=Some(claim.verdict) confidence=Some(claim.confidence) small=true/>
                <span class="modal__time">{claim.time_ago}</span>
            </div>
            <p class="modal__claim">{claim.content}</p>
            <div class="modal__note">
                {format!(
                    "This is a sample preview. The full page shows summary, evidence, AI reasoning, and sources. Confidence: {percent}%."
                )}
            </div>
            <div class="modal__actions">
                <button class="btn btn--secondary" on:click=move |_| ui.update(UiState::close_modal)>"Close"</button>
                <a
                    class="btn btn--primary"
                    href=format!("/claims/{}", claim.id)
                    on:click=move |_| ui.update(UiState::close_modal)
                >
                    "Open full analysis"
                </a>
            </div>
        </ModalFrame>
    }
}
