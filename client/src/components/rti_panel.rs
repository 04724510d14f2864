//! Right-to-Information request panel on the claim detail sidebar.
//!
//! Display only. RTI requests are drafted and filed by an external workflow;
//! this panel explains the option and links to the about page.

use leptos::prelude::*;

#[component]
pub fn RtiPanel(claim_content: String) -> impl IntoView {
    view! {
        <aside class="rti-panel card">
            <h3 class="rti-panel__title">"Request Official Verification"</h3>
            <p class="rti-panel__body">
                "For government-related claims, a Right to Information (RTI) request can ask the responsible authority to confirm or refute the facts."
            </p>
            <blockquote class="rti-panel__claim">{claim_content}</blockquote>
            <a class="btn btn--secondary rti-panel__link" href="/about#learn-more">
                "Learn about RTI requests"
            </a>
        </aside>
    }
}
