//! Scroll-boosted marketing counters for the home page stats section.
//!
//! DESIGN
//! ======
//! Values are pure functions of page scroll progress in `[0, 1]`; the
//! component only measures the document and re-renders.

#[cfg(test)]
#[path = "stats_counter_test.rs"]
mod stats_counter_test;

/// Growth factor used when a stat does not set one.
const DEFAULT_FACTOR: f64 = 0.3;

/// Share of the remaining gap to 100 a percent stat closes at full scroll.
const PERCENT_GAP_SHARE: f64 = 0.8;

/// One marketing statistic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub base: f64,
    pub factor: Option<f64>,
    pub is_percent: bool,
    pub decimals: usize,
    /// Month-over-month change, display only.
    pub change: u32,
}

pub static STATS: [Stat; 4] = [
    Stat { label: "Claims Analyzed", base: 10_247.0, factor: Some(0.35), is_percent: false, decimals: 0, change: 12 },
    Stat { label: "Community Members", base: 5891.0, factor: Some(0.3), is_percent: false, decimals: 0, change: 8 },
    Stat { label: "RTI Requests", base: 342.0, factor: Some(0.5), is_percent: false, decimals: 0, change: 23 },
    Stat { label: "Accuracy Rate", base: 94.2, factor: None, is_percent: true, decimals: 1, change: 2 },
];

/// Fraction of the document scrolled, clamped to `[0, 1]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let max = (scroll_height - client_height).max(1.0);
    (scroll_top / max).clamp(0.0, 1.0)
}

/// Stat value after applying the scroll boost.
pub fn display_value(stat: &Stat, progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    if stat.is_percent {
        let extra = (100.0 - stat.base) * progress * PERCENT_GAP_SHARE;
        return (stat.base + extra).min(100.0);
    }
    let factor = stat.factor.unwrap_or(DEFAULT_FACTOR);
    stat.base + stat.base * factor * progress
}

/// Fixed-decimal rendering, optionally with comma thousands separators.
pub fn format_number(value: f64, decimals: usize, group: bool) -> String {
    let fixed = format!("{value:.decimals$}");
    if !group {
        return fixed;
    }
    let (sign, unsigned) = fixed.strip_prefix('-').map_or(("", fixed.as_str()), |rest| ("-", rest));
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Counter text for a stat at a scroll position, e.g. `"10,247"` or `"94.2%"`.
pub fn format_stat(stat: &Stat, progress: f64) -> String {
    let value = display_value(stat, progress);
    if stat.is_percent {
        format!("{}%", format_number(value, stat.decimals, false))
    } else {
        format_number(value, stat.decimals, true)
    }
}
