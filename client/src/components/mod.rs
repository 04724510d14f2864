//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and site chrome while reading/writing
//! shared state from Leptos context providers.

pub mod activity_chart;
pub mod browse_modals;
pub mod claim_card;
pub mod comment_section;
pub mod featured_claims;
pub mod footer;
pub mod navigation;
pub mod rti_panel;
pub mod search_bar;
pub mod stats_section;
pub mod verdict_badge;
