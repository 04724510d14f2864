//! Static about page. Section ids are link targets from the footer.

use leptos::prelude::*;

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("AI-Powered Verification", "Advanced LLMs and retrieval augmentations analyze claims with transparent reasoning."),
    ("Community Wisdom", "Expert and community feedback improve accuracy and context over time."),
    ("Open Sources", "Evidence links to verifiable sources so you can inspect everything yourself."),
    ("Trust by Design", "Bias controls, source ratings, and transparent confidence scores."),
];

const TIMELINE: [(&str, &str, &str); 2] = [
    ("2024", "Concept & Prototype", "Built the first version to combat misinformation at scale."),
    ("2025", "Community Launch", "Introduced open discussions, expert badges, and RTI workflows."),
];

const FAQS: [(&str, &str); 3] = [
    (
        "How does TruthGuard AI verify claims?",
        "We combine AI analysis with citation retrieval and community review. Each claim shows a verdict, confidence, sources, and reasoning.",
    ),
    (
        "Are sources peer-reviewed?",
        "We rank sources by credibility and indicate verification status. You can see and evaluate the links yourself.",
    ),
    (
        "Is my data private?",
        "We store only what is necessary and provide clear privacy controls. See Privacy in the footer.",
    ),
];

const POLICIES: [(&str, &str, &str); 3] = [
    (
        "trust",
        "Trust & Transparency",
        "We publish how verdicts are reached and expose source credibility scoring. Feedback loops improve results safely.",
    ),
    ("privacy", "Privacy", "We minimize data collection and provide controls. Contact us for data requests."),
    (
        "terms",
        "Terms",
        "By using TruthGuard AI, you agree to use content responsibly and respect community guidelines.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <section class="about__hero">
                <h1>"🛡 About TruthGuard AI"</h1>
                <p>"We help people navigate misinformation using transparent AI analysis and community-driven verification."</p>
                <div class="about__actions">
                    <a class="btn btn--primary" href="/browse">"Explore Claims →"</a>
                    <a class="btn btn--secondary" href="#learn-more">"Learn More"</a>
                </div>
            </section>

            <section id="how-it-works">
                <h2>"How it works"</h2>
                <div class="about__grid about__grid--four">
                    {HIGHLIGHTS
                        .iter()
                        .map(|(title, text)| view! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="mission" class="about__mission">
                <div>
                    <h2>"Our Mission"</h2>
                    <p>"Empower everyone to evaluate claims quickly with transparent, evidence-backed analysis."</p>
                    <ul class="about__checks">
                        <li>"Transparent AI reasoning and confidence"</li>
                        <li>"Verifiable sources with credibility indicators"</li>
                        <li>"Community discussion to challenge and refine"</li>
                    </ul>
                </div>
                <div class="card">
                    <h3>"What makes us different?"</h3>
                    <p>
                        "TruthGuard focuses on transparency. We show not just verdicts, but also evidence, sources, and reasoning used by the AI and the community."
                    </p>
                </div>
            </section>

            <section>
                <h2>"Journey"</h2>
                <ol class="about__timeline">
                    {TIMELINE
                        .iter()
                        .map(|(year, title, text)| view! {
                            <li class="card">
                                <div class="about__year">{*year}</div>
                                <div class="about__milestone">{*title}</div>
                                <p>{*text}</p>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </section>

            <section id="faq">
                <h2>"FAQ"</h2>
                <div class="about__grid about__grid--two">
                    {FAQS
                        .iter()
                        .map(|(q, a)| view! {
                            <div class="card">
                                <div class="about__question">{*q}</div>
                                <p>{*a}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="learn-more" class="card">
                <h2>"Learn More"</h2>
                <p>"Dive into our methodology, models, and data practices."</p>
                <div class="about__actions">
                    <a class="btn btn--secondary" href="/browse">"Browse Latest Claims"</a>
                    <a class="btn btn--secondary" href="#trust">"Trust & Transparency"</a>
                    <a class="btn btn--secondary" href="#privacy">"Privacy"</a>
                    <a class="btn btn--secondary" href="#terms">"Terms"</a>
                </div>
            </section>

            {POLICIES
                .iter()
                .map(|(id, title, text)| view! {
                    <section id=*id class="card">
                        <h2>{*title}</h2>
                        <p>{*text}</p>
                    </section>
                })
                .collect_view()}
        </div>
    }
}
