//! Hardcoded sample claims and comments for the browse and home pages.
//!
//! These pages render curated examples rather than live backend data; the
//! claim detail page is the only one that fetches a claim by id.

#[cfg(test)]
#[path = "samples_test.rs"]
mod samples_test;

use crate::net::types::{ContentType, Verdict};

/// A display-only claim record.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleClaim {
    pub id: &'static str,
    pub content: &'static str,
    pub verdict: Verdict,
    /// Confidence in `0.0..=1.0`.
    pub confidence: f64,
    pub comment_count: u32,
    /// Relative age label, e.g. `"2 hours ago"`.
    pub time_ago: &'static str,
    pub content_type: ContentType,
}

/// A display-only discussion comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleComment {
    pub user: String,
    pub text: String,
    /// `YYYY-MM-DD`.
    pub date: String,
}

const fn claim(
    id: &'static str,
    content: &'static str,
    verdict: Verdict,
    confidence: f64,
    comment_count: u32,
    time_ago: &'static str,
    content_type: ContentType,
) -> SampleClaim {
    SampleClaim { id, content, verdict, confidence, comment_count, time_ago, content_type }
}

/// Browse page catalogue, newest first.
pub static BROWSE_CLAIMS: [SampleClaim; 12] = [
    claim("101", "New climate report shows unprecedented warming trends affecting global weather patterns.", Verdict::True, 0.92, 24, "2 hours ago", ContentType::Url),
    claim("102", "Recent vaccine study claims 98% effectiveness against new variant strains.", Verdict::Misleading, 0.76, 18, "4 hours ago", ContentType::Text),
    claim("103", "Government announces new economic policy affecting small businesses nationwide.", Verdict::Uncertain, 0.65, 31, "6 hours ago", ContentType::Url),
    claim("104", "Photo shows a shark swimming on a flooded city street during recent storms.", Verdict::False, 0.89, 45, "1 day ago", ContentType::Image),
    claim("105", "Video claims a new engine runs entirely on water without external power.", Verdict::False, 0.94, 52, "1 day ago", ContentType::Video),
    claim("106", "Experts say global inflation is expected to cool over the next two quarters.", Verdict::True, 0.81, 12, "3 days ago", ContentType::Text),
    claim("107", "A common kitchen spice cures chronic diseases in 48 hours.", Verdict::Misleading, 0.71, 39, "3 days ago", ContentType::Url),
    claim("108", "Satellite images show new deforestation hotspots emerging this month.", Verdict::True, 0.84, 21, "4 days ago", ContentType::Image),
    claim("109", "Celebrity interview claims a complete ban on all social media platforms next year.", Verdict::Uncertain, 0.52, 11, "5 days ago", ContentType::Video),
    claim("110", "New study finds no evidence of microchips in any vaccines tested.", Verdict::True, 0.97, 64, "1 week ago", ContentType::Text),
    claim("111", "Image shows a historic building supposedly moved 10 miles without damage.", Verdict::Misleading, 0.61, 7, "1 week ago", ContentType::Image),
    claim("112", "Short clip claims a city banned all bicycles overnight.", Verdict::False, 0.90, 26, "2 weeks ago", ContentType::Video),
];

/// Home page "Recently Analyzed Claims" strip.
pub static FEATURED_CLAIMS: [SampleClaim; 3] = [
    claim("1", "New climate report shows unprecedented warming trends affecting global weather patterns.", Verdict::True, 0.92, 24, "2 hours ago", ContentType::Url),
    claim("2", "Recent vaccine study claims 98% effectiveness against new variant strains.", Verdict::Misleading, 0.76, 18, "4 hours ago", ContentType::Text),
    claim("3", "Government announces new economic policy affecting small businesses nationwide.", Verdict::Uncertain, 0.65, 31, "6 hours ago", ContentType::Url),
];

fn comment(user: &str, text: &str, date: &str) -> SampleComment {
    SampleComment { user: user.to_owned(), text: text.to_owned(), date: date.to_owned() }
}

/// Sample discussion for a browse claim.
///
/// Claims without curated comments get one placeholder from `guest` dated
/// `today` (`YYYY-MM-DD`).
pub fn sample_comments(claim_id: &str, today: &str) -> Vec<SampleComment> {
    match claim_id {
        "101" => vec![
            comment("alice", "Link to the IPCC summary backs this up.", "2025-09-01"),
            comment("bob", "Also covered by NOAA monthly report.", "2025-09-02"),
        ],
        "102" => vec![comment(
            "chris",
            "Effectiveness depends on the cohort size; title is overstated.",
            "2025-09-05",
        )],
        _ => vec![comment(
            "guest",
            "No comments yet. Be the first to comment on the detail page.",
            today,
        )],
    }
}

/// Look up a browse sample by id.
pub fn find_browse_claim(claim_id: &str) -> Option<&'static SampleClaim> {
    BROWSE_CLAIMS.iter().find(|c| c.id == claim_id)
}
