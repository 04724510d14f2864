//! Home page strip of recently analyzed sample claims.

use leptos::prelude::*;

use crate::components::claim_card::ClaimCard;
use crate::state::samples::FEATURED_CLAIMS;

#[component]
pub fn FeaturedClaims() -> impl IntoView {
    view! {
        <section class="featured">
            <div class="section-heading">
                <h2>"Recently Analyzed Claims"</h2>
                <p>"See what the community is fact-checking and join the discussion on important topics."</p>
            </div>
            <div class="claim-grid claim-grid--three">
                {FEATURED_CLAIMS.iter().map(|claim| view! { <ClaimCard claim=claim/> }).collect_view()}
            </div>
            <div class="featured__more">
                <a class="btn btn--primary" href="/browse">"Browse All Claims"</a>
            </div>
        </section>
    }
}
