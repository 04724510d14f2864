//! Discussion thread on the claim detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads comments from the backend on mount. Signed-in users can post and
//! vote; signed-out users see a sign-in prompt in place of the compose box.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{Comment, VoteType};
use crate::state::auth::AuthState;
use crate::state::comments::CommentsState;
use crate::util::dates::display_date;

#[component]
pub fn CommentSection(claim_id: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let state = RwSignal::new(CommentsState::default());

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        let claim_id = claim_id.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_comments(&config, &claim_id).await;
            state.update(|s| s.apply_fetch_result(result));
        });
    }

    let on_post = {
        let config = config.clone();
        let claim_id = claim_id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(token) = auth.get_untracked().access_token().map(str::to_owned) else {
                return;
            };
            let Some(text) = state.get_untracked().pending_post() else {
                return;
            };
            state.update(|s| s.posting = true);
            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                let claim_id = claim_id.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::post_comment(&config, &token, &claim_id, &text).await;
                    state.update(|s| s.apply_post_result(result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (token, text, &config, &claim_id);
            }
        }
    };

    let on_vote = Callback::new(move |(comment_id, vote): (String, VoteType)| {
        let Some(token) = auth.get_untracked().access_token().map(str::to_owned) else {
            return;
        };
        if state.with_untracked(|s| s.is_repeat_vote(&comment_id, vote)) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::vote_comment(&config, &token, &comment_id, vote).await {
                    Ok(()) => state.update(|s| s.apply_vote(&comment_id, vote)),
                    Err(e) => state.update(|s| s.error = Some(e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, comment_id, vote, &config);
        }
    });

    view! {
        <section class="comments card">
            <h3 class="comments__heading">{move || state.get().heading()}</h3>

            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <p class="comments__signin">
                            <a href="/auth/login">"Sign in"</a>
                            " to join the discussion."
                        </p>
                    }
                }
            >
                <form class="comments__form" on:submit=on_post.clone()>
                    <textarea
                        class="input comments__input"
                        rows="3"
                        placeholder="Share evidence or ask a question..."
                        prop:value=move || state.get().draft
                        on:input=move |ev| state.update(|s| s.draft = event_target_value(&ev))
                    ></textarea>
                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || state.get().pending_post().is_none()
                    >
                        {move || if state.get().posting { "Posting..." } else { "Post Comment" }}
                    </button>
                </form>
            </Show>

            <Show when=move || state.get().error.is_some()>
                <p class="comments__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !state.get().loading
                fallback=|| view! { <p class="comments__empty">"Loading comments..."</p> }
            >
                <Show
                    when=move || !state.get().items.is_empty()
                    fallback=|| view! { <p class="comments__empty">"No comments yet. Start the discussion."</p> }
                >
                    <ul class="comments__list">
                        {move || {
                            state
                                .get()
                                .items
                                .into_iter()
                                .map(|comment| view! { <CommentItem comment=comment on_vote=on_vote/> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn CommentItem(comment: Comment, on_vote: Callback<(String, VoteType)>) -> impl IntoView {
    let expert = comment.is_expert_response || comment.user.is_expert;
    let up_id = comment.id.clone();
    let down_id = comment.id.clone();

    view! {
        <li class="comment" class:comment--expert=expert>
            <div class="comment__meta">
                <span class="comment__author">{comment.user.display_name()}</span>
                {expert.then(|| view! { <span class="comment__expert">"Expert"</span> })}
                <span class="comment__date">{display_date(&comment.created_at)}</span>
            </div>
            <p class="comment__body">{comment.content.clone()}</p>
            <div class="comment__votes">
                <button
                    class="comment__vote"
                    aria-label="Upvote"
                    on:click=move |_| on_vote.run((up_id.clone(), VoteType::Up))
                >
                    "▲"
                </button>
                <span class="comment__score">{comment.score()}</span>
                <button
                    class="comment__vote"
                    aria-label="Downvote"
                    on:click=move |_| on_vote.run((down_id.clone(), VoteType::Down))
                >
                    "▼"
                </button>
            </div>
        </li>
    }
}
