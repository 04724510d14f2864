//! Verdict pill shown on claim cards and the detail header.

use leptos::prelude::*;

use crate::net::types::Verdict;
use crate::state::claim::confidence_percent;

/// Badge with the verdict label and, when known, a confidence percentage.
#[component]
pub fn VerdictBadge(
    #[prop(default = None)] verdict: Option<Verdict>,
    #[prop(default = None)] confidence: Option<f64>,
    #[prop(optional)] processing: bool,
    #[prop(optional)] small: bool,
) -> impl IntoView {
    let (label, modifier) = match (processing, verdict) {
        (true, _) => ("Processing", "processing"),
        (false, Some(v)) => (v.label(), v.css_modifier()),
        (false, None) => ("Pending", "pending"),
    };
    let percent = confidence.filter(|_| !processing && verdict.is_some()).map(confidence_percent);

    view! {
        <span class=format!("verdict-badge verdict-badge--{modifier}") class:verdict-badge--sm=small>
            <span class="verdict-badge__label">{label}</span>
            {percent.map(|p| view! { <span class="verdict-badge__confidence">{format!("{p}%")}</span> })}
        </span>
    }
}
