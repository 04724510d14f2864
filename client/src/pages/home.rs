//! Landing page: hero with the submission bar, feature overview, counters,
//! featured claims, and a call to action.

use leptos::prelude::*;

use crate::components::featured_claims::FeaturedClaims;
use crate::components::search_bar::SearchBar;
use crate::components::stats_section::StatsSection;

const FEATURES: [(&str, &str); 3] = [
    (
        "Submit & Analyze",
        "Submit any claim, URL, image, or video. Our AI extracts content using OCR and transcription, then analyzes it against verified sources.",
    ),
    (
        "Community Discussion",
        "Engage with others in fact-checking discussions. Vote on comments, share evidence, and learn from verified experts in the field.",
    ),
    (
        "Take Action",
        "For government-related claims, generate automated RTI requests to seek official verification from relevant authorities.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <div class="hero__logo" aria-hidden="true">"🛡"</div>
                <h1 class="hero__title">
                    "Combat Misinformation with "
                    <span class="text-gradient">"AI-Powered Truth"</span>
                </h1>
                <p class="hero__lead">
                    "Submit claims, URLs, or media files for instant AI-powered fact-checking. Get detailed analysis, community insights, and take action with automated verification requests."
                </p>
                <SearchBar/>
                <p class="hero__note">"Supports text claims, URLs, images, and videos"</p>
            </section>

            <section class="features">
                <h2>"How TruthGuard AI Works"</h2>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|(title, text)| view! {
                            <div class="card features__item">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <StatsSection/>
            <FeaturedClaims/>

            <section class="cta">
                <h2>"Ready to Fight Misinformation?"</h2>
                <p>
                    "Join thousands of users who trust TruthGuard AI to verify information and promote truth in the digital age."
                </p>
                <div class="cta__actions">
                    <a class="btn btn--primary" href="/">"Start Fact-Checking"</a>
                    <a class="btn btn--secondary" href="/about">"Learn More"</a>
                </div>
            </section>
        </div>
    }
}
