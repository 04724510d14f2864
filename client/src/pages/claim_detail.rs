//! Claim detail page: analysis, evidence, reasoning, sources, discussion,
//! and the sidebar actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the claim once on mount, then refetches every few seconds while
//! the backend reports it as `processing`. The poll loop stops when the page
//! unmounts or the claim leaves the processing state. Only the analysis card
//! tracks each refetch; the discussion column is rebuilt when the page
//! layout changes.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_section::CommentSection;
use crate::components::rti_panel::RtiPanel;
use crate::components::verdict_badge::VerdictBadge;
use crate::config::ClientConfig;
use crate::net::types::{Analysis, ClaimStatus, EvidenceItem, SourceRef};
use crate::state::claim::{AnalysisPanel, ClaimPage, ClaimViewState, credibility_percent};
use crate::util::dates::display_date;
use crate::util::markdown::render_markdown;

#[component]
pub fn ClaimDetailPage() -> impl IntoView {
    let params = use_params_map();
    let config = expect_context::<ClientConfig>();
    let state = RwSignal::new(ClaimViewState::default());

    let claim_id = move || params.with(|p| p.get("id").unwrap_or_default());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        // One poll loop per claim id; switching ids retires the previous loop.
        let current_loop = StoredValue::new(Arc::new(AtomicBool::new(false)));
        Effect::new(move || {
            let id = claim_id();
            let alive = Arc::new(AtomicBool::new(true));
            current_loop.with_value(|prev| prev.store(false, Ordering::Relaxed));
            current_loop.set_value(alive.clone());
            state.set(ClaimViewState::default());
            leptos::task::spawn_local(poll_claim(config.clone(), id, state, alive));
        });
        on_cleanup(move || {
            let _ = current_loop.try_with_value(|alive| alive.store(false, Ordering::Relaxed));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    let page = Memo::new(move |_| state.with(ClaimViewState::page));

    view! {
        {move || match page.get() {
            ClaimPage::Loading => view! { <ClaimSkeleton/> }.into_any(),
            ClaimPage::NotFound(message) => view! { <ClaimNotFound message=message/> }.into_any(),
            ClaimPage::Loaded => {
                let id = claim_id();
                let content = state.with_untracked(ClaimViewState::claim_content).unwrap_or_default();
                view! {
                    <div class="claim-detail">
                        <AnalysisCard state=state/>
                        <div class="claim-detail__columns">
                            <div id="comments" class="claim-detail__discussion">
                                <CommentSection claim_id=id/>
                            </div>
                            <aside class="claim-detail__sidebar">
                                <RtiPanel claim_content=content/>
                                <ShareCard/>
                            </aside>
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

/// Claim header plus the analysis body; re-renders on every refetch.
#[component]
fn AnalysisCard(state: RwSignal<ClaimViewState>) -> impl IntoView {
    move || {
        state.with(|current| {
            let Some(detail) = current.detail.as_ref() else {
                return ().into_any();
            };
            let claim = &detail.claim;
            let processing = claim.status == ClaimStatus::Processing;
            let verdict = detail.analysis.as_ref().map(|a| a.verdict);
            let confidence = detail.analysis.as_ref().map(|a| a.confidence_score);
            let body = match current.panel() {
                AnalysisPanel::InProgress => view! { <AnalysisInProgress/> }.into_any(),
                AnalysisPanel::Ready(analysis) => view! { <AnalysisBody analysis=analysis.clone()/> }.into_any(),
                AnalysisPanel::Failed => view! { <AnalysisFailed/> }.into_any(),
                AnalysisPanel::Loading | AnalysisPanel::NotFound(_) => ().into_any(),
            };
            view! {
                <section class="card claim-detail__main">
                    <div class="claim-detail__badges">
                        <VerdictBadge verdict=verdict confidence=confidence processing=processing/>
                        <span class="claim-detail__date">{display_date(&claim.created_at)}</span>
                    </div>
                    <h1>"Fact-Check Analysis"</h1>

                    <div class="claim-detail__original">
                        <h2>"Original Claim"</h2>
                        <p>{claim.content.clone()}</p>
                        {claim.original_url.clone().map(|url| view! {
                            <a class="claim-detail__source" href=url target="_blank" rel="noopener noreferrer">
                                "View Original Source ↗"
                            </a>
                        })}
                    </div>

                    {body}
                </section>
            }
            .into_any()
        })
    }
}

/// Fetch the claim, then keep refetching while it is processing and `alive`
/// is set.
#[cfg(feature = "hydrate")]
async fn poll_claim(
    config: ClientConfig,
    id: String,
    state: RwSignal<ClaimViewState>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    use std::sync::atomic::Ordering;

    use crate::state::claim::POLL_INTERVAL_SECS;

    loop {
        let result = crate::net::api::fetch_claim_detail(&config, &id).await;
        if !alive.load(Ordering::Relaxed) {
            break;
        }
        if let Err(e) = &result {
            log::warn!("claim {id} fetch failed: {e}");
        }
        state.update(|s| s.apply_fetch_result(result));
        if !state.get_untracked().should_poll() {
            break;
        }
        gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
        if !alive.load(Ordering::Relaxed) {
            break;
        }
    }
}

#[component]
fn ClaimSkeleton() -> impl IntoView {
    view! {
        <div class="claim-detail claim-detail--loading">
            <div class="skeleton skeleton--title"></div>
            <div class="card">
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line skeleton--short"></div>
                <div class="skeleton skeleton--block"></div>
            </div>
        </div>
    }
}

#[component]
fn ClaimNotFound(message: String) -> impl IntoView {
    view! {
        <div class="claim-detail claim-detail--missing">
            <div class="card">
                <div class="claim-detail__icon claim-detail__icon--danger" aria-hidden="true">"✕"</div>
                <h1>"Claim Not Found"</h1>
                <p>{message}</p>
            </div>
        </div>
    }
}

#[component]
fn AnalysisInProgress() -> impl IntoView {
    view! {
        <div class="claim-detail__status">
            <div class="spinner" aria-hidden="true"></div>
            <h3>"Analysis in Progress"</h3>
            <p>"Our AI is analyzing this claim. This typically takes 30-60 seconds."</p>
        </div>
    }
}

#[component]
fn AnalysisFailed() -> impl IntoView {
    view! {
        <div class="claim-detail__status">
            <div class="claim-detail__icon claim-detail__icon--danger" aria-hidden="true">"✕"</div>
            <h3>"Analysis Failed"</h3>
            <p>"We encountered an issue analyzing this claim. Please try submitting it again."</p>
        </div>
    }
}

#[component]
fn AnalysisBody(analysis: Analysis) -> impl IntoView {
    let reasoning_html = render_markdown(&analysis.ai_reasoning);
    let Analysis { summary, evidence, sources, .. } = analysis;

    view! {
        <div class="analysis">
            <div>
                <h3>"Analysis Summary"</h3>
                <p>{summary}</p>
            </div>

            {(!evidence.is_empty()).then(|| view! {
                <div>
                    <h3>"Supporting Evidence"</h3>
                    <div class="analysis__evidence">
                        {evidence.into_iter().map(|item| view! { <EvidenceRow item=item/> }).collect_view()}
                    </div>
                </div>
            })}

            <div>
                <h3>"AI Analysis Reasoning"</h3>
                <div class="analysis__reasoning markdown" inner_html=reasoning_html></div>
            </div>

            {(!sources.is_empty()).then(|| view! {
                <div>
                    <h3>"Referenced Sources"</h3>
                    <div class="analysis__sources">
                        {sources.into_iter().map(|source| view! { <SourceRow source=source/> }).collect_view()}
                    </div>
                </div>
            })}
        </div>
    }
}

#[component]
fn EvidenceRow(item: EvidenceItem) -> impl IntoView {
    let credibility = credibility_percent(&item);
    view! {
        <div class="evidence">
            <div class="evidence__header">
                <h4>{item.source.clone()}</h4>
                {credibility.map(|pct| view! { <span class="evidence__credibility">{format!("Credibility: {pct}%")}</span> })}
            </div>
            <p class="evidence__excerpt">{item.excerpt.clone()}</p>
            {item.url.clone().map(|url| view! {
                <a class="evidence__link" href=url target="_blank" rel="noopener noreferrer">"Read full source →"</a>
            })}
        </div>
    }
}

#[component]
fn SourceRow(source: SourceRef) -> impl IntoView {
    view! {
        <div class="source">
            <div>
                <h4>{source.title.clone()}</h4>
                <div class="source__meta">
                    <span>{format!("Type: {}", source.kind)}</span>
                    {source.verified.then(|| view! { <span class="source__verified">"✓ Verified"</span> })}
                </div>
            </div>
            {source.url.clone().map(|url| view! {
                <a class="source__link" href=url target="_blank" rel="noopener noreferrer" aria-label="Open source">"↗"</a>
            })}
        </div>
    }
}

/// "Share This Analysis" card. Both buttons put the page URL on the clipboard.
#[component]
fn ShareCard() -> impl IntoView {
    let copied = RwSignal::new(false);

    let copy_link = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window()
                && let Ok(href) = window.location().href()
                && let Some(clipboard) = window.navigator().clipboard()
            {
                let _ = clipboard.write_text(&href);
                copied.set(true);
            }
        }
    };

    view! {
        <div class="card share-card">
            <h3>"Share This Analysis"</h3>
            <div class="share-card__actions">
                <button class="btn btn--secondary share-card__copy" on:click=copy_link>
                    {move || if copied.get() { "Link Copied" } else { "Copy Link" }}
                </button>
                <button class="btn btn--secondary" on:click=copy_link>"Share"</button>
            </div>
        </div>
    }
}
