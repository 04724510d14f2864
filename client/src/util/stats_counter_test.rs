use super::*;

fn stat(label: &str) -> Stat {
    *STATS.iter().find(|s| s.label == label).unwrap()
}

#[test]
fn scroll_progress_clamps_and_guards_short_pages() {
    assert!((scroll_progress(500.0, 2000.0, 1000.0) - 0.5).abs() < f64::EPSILON);
    assert!((scroll_progress(5000.0, 2000.0, 1000.0) - 1.0).abs() < f64::EPSILON);
    assert!(scroll_progress(-20.0, 2000.0, 1000.0).abs() < f64::EPSILON);
    // Page shorter than the viewport divides by one.
    assert!(scroll_progress(0.0, 600.0, 900.0).abs() < f64::EPSILON);
}

#[test]
fn values_start_at_base() {
    for s in &STATS {
        assert!((display_value(s, 0.0) - s.base).abs() < 1e-9, "{}", s.label);
    }
}

#[test]
fn full_scroll_applies_factor() {
    let claims = stat("Claims Analyzed");
    assert!((display_value(&claims, 1.0) - 13_833.45).abs() < 1e-6);
    let rti = stat("RTI Requests");
    assert!((display_value(&rti, 1.0) - 513.0).abs() < 1e-9);
}

#[test]
fn missing_factor_defaults() {
    let custom = Stat { label: "x", base: 100.0, factor: None, is_percent: false, decimals: 0, change: 0 };
    assert!((display_value(&custom, 1.0) - 130.0).abs() < 1e-9);
}

#[test]
fn percent_stat_closes_most_of_gap_and_caps() {
    let accuracy = stat("Accuracy Rate");
    let full = display_value(&accuracy, 1.0);
    assert!((full - 98.84).abs() < 1e-9);
    assert!(full <= 100.0);
    let near_hundred = Stat { base: 99.9, ..accuracy };
    assert!(display_value(&near_hundred, 1.0) <= 100.0);
}

#[test]
fn values_are_monotonic_in_progress() {
    for s in &STATS {
        let mut last = f64::MIN;
        for step in 0..=10 {
            let v = display_value(s, f64::from(step) / 10.0);
            assert!(v >= last, "{} not monotonic", s.label);
            last = v;
        }
    }
}

#[test]
fn format_number_groups_thousands() {
    assert_eq!(format_number(10_247.0, 0, true), "10,247");
    assert_eq!(format_number(1_234_567.891, 2, true), "1,234,567.89");
    assert_eq!(format_number(342.0, 0, true), "342");
    assert_eq!(format_number(-4321.0, 0, true), "-4,321");
    assert_eq!(format_number(1234.5, 1, false), "1234.5");
}

#[test]
fn format_stat_renders_counter_text() {
    assert_eq!(format_stat(&stat("Claims Analyzed"), 0.0), "10,247");
    assert_eq!(format_stat(&stat("Community Members"), 0.0), "5,891");
    assert_eq!(format_stat(&stat("Accuracy Rate"), 0.0), "94.2%");
    assert_eq!(format_stat(&stat("Claims Analyzed"), 1.0), "13,833");
}
