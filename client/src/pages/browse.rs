//! Browse page: search, sort, and paginate the sample claim catalogue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Works entirely on client-side sample data. Cards open the comments or
//! preview overlay through `UiState`; Escape closes whichever is open.

use leptos::prelude::*;

use crate::components::browse_modals::BrowseModals;
use crate::components::claim_card::ClaimCard;
use crate::state::browse::{BrowseState, PAGE_SIZE, SortMode, page_slice, total_pages};
use crate::state::samples::{BROWSE_CLAIMS, SampleClaim};
use crate::state::ui::UiState;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let browse = RwSignal::new(BrowseState::default());

    let results = Memo::new(move |_| browse.with(|b| b.results(&BROWSE_CLAIMS)));
    let pages = Memo::new(move |_| total_pages(results.with(Vec::len), PAGE_SIZE));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            ui.maybe_update(|u| u.handle_key(&ev.key()));
        });
        on_cleanup(move || handle.remove());
    }
    on_cleanup(move || ui.update(UiState::close_modal));

    let on_comments = Callback::new(move |id: &'static str| ui.update(|u| u.open_comments(id)));
    let on_preview = Callback::new(move |id: &'static str| ui.update(|u| u.open_preview(id)));

    view! {
        <div class="browse">
            <header class="browse__header">
                <h1>"Browse Claims"</h1>
                <span class="browse__count">{move || format!("{} results", results.with(Vec::len))}</span>
            </header>

            <div class="browse__controls">
                <input
                    class="input browse__search"
                    placeholder="Search claims..."
                    prop:value=move || browse.get().query
                    on:input=move |ev| browse.update(|b| b.set_query(event_target_value(&ev)))
                />
                <div class="segmented">
                    {SortMode::ALL
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <button
                                    class="segmented__option"
                                    class:segmented__option--active=move || browse.get().sort == mode
                                    on:click=move |_| browse.update(|b| b.set_sort(mode))
                                >
                                    {mode.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=|| {
                    view! {
                        <div class="card browse__empty">
                            <p>"No results found. Try a different search."</p>
                        </div>
                    }
                }
            >
                <div class="claim-grid">
                    {move || {
                        let page = browse.get().page;
                        let items: Vec<&'static SampleClaim> = results.get();
                        page_slice(&items, page, PAGE_SIZE)
                            .iter()
                            .map(|claim| view! { <ClaimCard claim=*claim on_comments=on_comments on_preview=on_preview/> })
                            .collect_view()
                    }}
                </div>
            </Show>

            <Show when=move || { pages.get() > 1 }>
                <nav class="pagination">
                    <button
                        class="btn btn--secondary"
                        disabled=move || !browse.get().has_prev()
                        on:click=move |_| browse.update(BrowseState::prev_page)
                    >
                        "Previous"
                    </button>
                    <span class="pagination__label">
                        {move || format!("Page {} of {}", browse.get().page, pages.get())}
                    </span>
                    <button
                        class="btn btn--secondary"
                        disabled=move || !browse.get().has_next(pages.get())
                        on:click=move |_| browse.update(|b| b.next_page(pages.get()))
                    >
                        "Next"
                    </button>
                </nav>
            </Show>

            <BrowseModals/>
        </div>
    }
}
