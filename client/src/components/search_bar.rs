//! Claim submission bar on the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits text, URL, or media claims to the backend and navigates to the new
//! claim's detail page. Visitors without a session are sent to sign in first.
//!
//! DESIGN
//! ======
//! Form rules live in `state::submit`; this component owns the browser `File`
//! handle, which is kept in a local `StoredValue` because it is not `Send`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::FilePart;
use crate::state::auth::AuthState;
use crate::state::submit::{InputMode, SUBMIT_FAILED_MESSAGE, SubmitState, format_file_size};
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn SearchBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let state = RwSignal::new(SubmitState::default());
    let file_handle = StoredValue::new_local(None::<FilePart>);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let clear_file = move || {
        state.update(SubmitState::clear_file);
        file_handle.set_value(None);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let set_mode = move |mode: InputMode| {
        state.update(|s| s.set_mode(mode));
        file_handle.set_value(None);
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            let picked = crate::state::submit::SelectedFile { name: file.name(), mime: file.type_(), size: file.size() };
            state.update(|s| s.select_file(picked));
            file_handle.set_value(Some(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth.get_untracked().access_token().map(str::to_owned) else {
            navigate(LOGIN_PATH, NavigateOptions::default());
            return;
        };
        let current = state.get_untracked();
        if current.submitting {
            return;
        }
        let Some(form) = current.build_form() else {
            return;
        };
        state.update(|s| {
            s.submitting = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            let file = file_handle.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_claim(&config, &token, &form, file).await {
                    Ok(created) => {
                        state.update(|s| s.submitting = false);
                        navigate(&format!("/claims/{}", created.id), NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("claim submission failed: {e}");
                        state.update(|s| {
                            s.submitting = false;
                            s.error = Some(SUBMIT_FAILED_MESSAGE.to_owned());
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, form, &config);
        }
    };

    view! {
        <div class="search-bar">
            <div class="search-bar__modes">
                {InputMode::ALL
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <button
                                type="button"
                                class="search-bar__mode"
                                class:search-bar__mode--active=move || state.get().mode == mode
                                on:click=move |_| set_mode(mode)
                            >
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <form class="search-bar__form" on:submit=on_submit>
                <div class="search-bar__field">
                    <Show
                        when=move || state.get().mode == InputMode::File
                        fallback=move || {
                            view! {
                                <input
                                    type="text"
                                    class="search-bar__input"
                                    placeholder=move || state.get().mode.placeholder()
                                    prop:value=move || state.get().content
                                    on:input=move |ev| state.update(|s| s.content = event_target_value(&ev))
                                    disabled=move || state.get().submitting
                                />
                            }
                        }
                    >
                        <div class="search-bar__upload">
                            <input
                                node_ref=file_input
                                id="file-upload"
                                type="file"
                                accept="image/*,video/*"
                                class="search-bar__file"
                                on:change=on_file_change
                            />
                            <label for="file-upload" class="search-bar__dropzone">
                                {move || match state.get().file {
                                    Some(file) => view! {
                                        <span class="search-bar__file-name">{file.name.clone()}</span>
                                        <span class="search-bar__file-size">
                                            {format!("({})", format_file_size(file.size))}
                                        </span>
                                        <button
                                            type="button"
                                            class="search-bar__file-clear"
                                            aria-label="Remove file"
                                            on:click=move |ev: leptos::ev::MouseEvent| {
                                                ev.prevent_default();
                                                clear_file();
                                            }
                                        >
                                            "✕"
                                        </button>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <span class="search-bar__upload-title">"Click to upload image or video"</span>
                                        <span class="search-bar__upload-hint">"Max 50MB • JPG, PNG, GIF, MP4, AVI"</span>
                                    }
                                    .into_any(),
                                }}
                            </label>
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="search-bar__submit"
                        disabled=move || !state.get().can_submit()
                    >
                        {move || if state.get().submitting { "Processing..." } else { "Fact-Check" }}
                    </button>
                </div>

                <p class="search-bar__helper">{move || state.get().mode.helper_text()}</p>
                <Show when=move || state.get().error.is_some()>
                    <p class="search-bar__error">{move || state.get().error.unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
