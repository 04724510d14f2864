//! Dashboard statistics state, mock fallback, and activity bucketing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard fetches aggregate stats once per visit. Any failure swaps in
//! a fixed mock object so the page always has something to render, flagged
//! by `using_mock` for the "Showing sample data" hint.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::error::ApiError;
use crate::net::types::{ClaimStatus, DashboardStats, RecentClaim};
use crate::util::dates::{DAY_MS, iso_timestamp, parse_timestamp_ms};

/// Number of day buckets in the activity chart.
pub const ACTIVITY_DAYS: usize = 7;

/// Dashboard page state.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub using_mock: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { stats: None, loading: true, using_mock: false }
    }
}

impl DashboardState {
    /// Store fetched stats, or fall back to [`mock_stats`] on any error.
    pub fn apply_fetch_result(&mut self, result: Result<DashboardStats, ApiError>, now_ms: f64) {
        match result {
            Ok(stats) => {
                self.stats = Some(stats);
                self.using_mock = false;
            }
            Err(_) => {
                self.stats = Some(mock_stats(now_ms));
                self.using_mock = true;
            }
        }
        self.loading = false;
    }

    /// Whether there are recent claims to list.
    pub fn has_claims(&self) -> bool {
        self.stats.as_ref().is_some_and(|s| !s.recent_claims.is_empty())
    }
}

fn recent(id: &str, content: &str, status: ClaimStatus, created_ms: f64) -> RecentClaim {
    RecentClaim {
        id: id.to_owned(),
        content: content.to_owned(),
        status,
        created_at: iso_timestamp(created_ms),
    }
}

/// Sample stats shown when the backend is unreachable.
pub fn mock_stats(now_ms: f64) -> DashboardStats {
    DashboardStats {
        total_claims: 128,
        pending_claims: 7,
        completed_claims: 111,
        rti_requests: 10,
        recent_claims: vec![
            recent("112", "City plans to ban bicycles overnight.", ClaimStatus::Processing, now_ms - DAY_MS),
            recent("110", "No evidence of microchips in vaccines.", ClaimStatus::Completed, now_ms - 2.0 * DAY_MS),
            recent("104", "Shark swimming on flooded city street photo.", ClaimStatus::Failed, now_ms - 3.0 * DAY_MS),
            recent(
                "101",
                "Unprecedented warming trends affect weather patterns.",
                ClaimStatus::Completed,
                now_ms - 4.0 * DAY_MS,
            ),
        ],
    }
}

/// Count claims per day over the last week, oldest bucket first.
///
/// A claim `d` whole days old lands in bucket `6 - d`; claims in the future,
/// older than a week, or with unparseable timestamps are skipped.
pub fn activity_series(recent: &[RecentClaim], now_ms: f64) -> [u32; ACTIVITY_DAYS] {
    let mut counts = [0_u32; ACTIVITY_DAYS];
    for claim in recent {
        let Some(created) = parse_timestamp_ms(&claim.created_at) else {
            continue;
        };
        let age_days = ((now_ms - created) / DAY_MS).floor();
        if !(0.0..7.0).contains(&age_days) {
            continue;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let age = age_days as usize;
        counts[ACTIVITY_DAYS - 1 - age] += 1;
    }
    counts
}

/// Bar height as a percentage of the tallest bucket (minimum scale of one).
pub fn bar_height_percent(value: u32, series: &[u32]) -> f64 {
    let max = series.iter().copied().max().unwrap_or(0).max(1);
    f64::from(value) / f64::from(max) * 100.0
}

/// CSS modifier for a claim status pill.
pub fn status_modifier(status: &ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Completed => "completed",
        ClaimStatus::Processing => "processing",
        ClaimStatus::Failed => "failed",
        ClaimStatus::Pending | ClaimStatus::Other(_) => "neutral",
    }
}
