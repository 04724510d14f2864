//! Claim detail view state and polling rules.
//!
//! DESIGN
//! ======
//! The detail page refetches on a fixed interval only while the backend
//! reports the claim as `processing`; this module decides which panel to
//! show for each combination of fetch outcome and claim status.

#[cfg(test)]
#[path = "claim_test.rs"]
mod claim_test;

use crate::net::error::ApiError;
use crate::net::types::{Analysis, ClaimDetail, ClaimStatus, EvidenceItem};

/// Seconds between refetches while a claim is processing.
pub const POLL_INTERVAL_SECS: u64 = 3;

/// Claim detail page state.
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimViewState {
    pub detail: Option<ClaimDetail>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ClaimViewState {
    fn default() -> Self {
        Self { detail: None, loading: true, error: None }
    }
}

/// Which body the analysis card renders.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisPanel<'a> {
    Loading,
    NotFound(String),
    InProgress,
    Ready(&'a Analysis),
    Failed,
}

/// Top-level layout of the detail page. Refetches that only change the
/// analysis keep it at `Loaded`, so the discussion column stays mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimPage {
    Loading,
    NotFound(String),
    Loaded,
}

impl ClaimViewState {
    /// Record the outcome of a fetch. A failed refetch keeps the last good
    /// detail (so polling continues) but surfaces the error until the next
    /// successful fetch.
    pub fn apply_fetch_result(&mut self, result: Result<ClaimDetail, ApiError>) {
        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(fetch_error_message(&err));
            }
        }
        self.loading = false;
    }

    /// Whether the page should keep polling.
    pub fn should_poll(&self) -> bool {
        self.detail.as_ref().is_some_and(|d| d.claim.status == ClaimStatus::Processing)
    }

    pub fn page(&self) -> ClaimPage {
        match self.panel() {
            AnalysisPanel::Loading => ClaimPage::Loading,
            AnalysisPanel::NotFound(message) => ClaimPage::NotFound(message),
            AnalysisPanel::InProgress | AnalysisPanel::Ready(_) | AnalysisPanel::Failed => ClaimPage::Loaded,
        }
    }

    pub fn claim_content(&self) -> Option<String> {
        self.detail.as_ref().map(|d| d.claim.content.clone())
    }

    /// Panel to render for the current state.
    pub fn panel(&self) -> AnalysisPanel<'_> {
        if self.loading {
            return AnalysisPanel::Loading;
        }
        if let Some(err) = &self.error {
            return AnalysisPanel::NotFound(err.clone());
        }
        let Some(detail) = self.detail.as_ref() else {
            return AnalysisPanel::NotFound(NOT_FOUND_MESSAGE.to_owned());
        };
        if detail.claim.status == ClaimStatus::Processing {
            return AnalysisPanel::InProgress;
        }
        match &detail.analysis {
            Some(analysis) => AnalysisPanel::Ready(analysis),
            None => AnalysisPanel::Failed,
        }
    }
}

const NOT_FOUND_MESSAGE: &str = "The claim you are looking for does not exist or has been removed.";

/// Inline message for a failed claim fetch.
pub fn fetch_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } | ApiError::Decode(_) => "Failed to fetch claim".to_owned(),
        other => other.user_message(),
    }
}

/// Credibility as a whole percentage; `None` when absent or zero.
pub fn credibility_percent(evidence: &EvidenceItem) -> Option<u32> {
    let score = evidence.credibility_score.filter(|s| *s > 0.0)?;
    Some(confidence_percent(score))
}

/// Round a `0..=1` score to a whole percentage.
pub fn confidence_percent(score: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (score.clamp(0.0, 1.0) * 100.0).round() as u32;
    pct
}
