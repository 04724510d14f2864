//! Site footer with quick links, about-page anchors, and a newsletter field.

use leptos::prelude::*;

use crate::util::dates::{now_ms, year};

const QUICK_LINKS: [(&str, &str); 4] =
    [("Home", "/"), ("Browse Claims", "/browse"), ("About", "/about"), ("Dashboard", "/dashboard")];

const KNOW_MORE_LINKS: [(&str, &str); 4] = [
    ("Our Mission", "/about#mission"),
    ("How It Works", "/about#how-it-works"),
    ("FAQ", "/about#faq"),
    ("Trust & Transparency", "/about#trust"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {} TruthGuard AI. All rights reserved.", year(now_ms()));

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <div class="footer__title">"🛡 TruthGuard AI"</div>
                    <p class="footer__blurb">
                        "AI-powered fact-checking with community verification. Building trust through transparency."
                    </p>
                    <div class="footer__social">
                        <a href="#" aria-label="GitHub">"GitHub"</a>
                        <a href="#" aria-label="Twitter">"Twitter"</a>
                        <a href="mailto:team@truthguard.ai" aria-label="Email">"Email"</a>
                    </div>
                </div>

                <div>
                    <h4 class="footer__heading">"Quick Links"</h4>
                    <ul class="footer__list">
                        {QUICK_LINKS
                            .iter()
                            .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Know More"</h4>
                    <ul class="footer__list">
                        {KNOW_MORE_LINKS
                            .iter()
                            .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                    <a class="footer__more" href="/about#learn-more">"Know More ↗"</a>
                </div>

                <div>
                    <h4 class="footer__heading">"Stay Updated"</h4>
                    <p class="footer__blurb">"Get product updates and research highlights."</p>
                    <div class="footer__newsletter">
                        <input class="input" type="email" placeholder="Your email"/>
                        <button class="btn btn--primary">"Subscribe"</button>
                    </div>
                    <p class="footer__fine">"We respect your privacy. Unsubscribe anytime."</p>
                </div>
            </div>

            <div class="footer__bottom">
                <p>{copyright}</p>
                <div class="footer__legal">
                    <a href="/about#privacy">"Privacy"</a>
                    <a href="/about#terms">"Terms"</a>
                </div>
            </div>
        </footer>
    }
}
