use super::*;
use crate::state::samples::BROWSE_CLAIMS;

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matches_case_insensitively() {
    let hits = filter_claims(&BROWSE_CLAIMS, "VACCINE");
    let ids: Vec<_> = hits.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["102", "110"]);
}

#[test]
fn filter_trims_query() {
    assert_eq!(filter_claims(&BROWSE_CLAIMS, "  shark  ").len(), 1);
}

#[test]
fn filter_results_all_contain_query() {
    for q in ["new", "claims", "city", "zzz"] {
        for c in filter_claims(&BROWSE_CLAIMS, q) {
            assert!(c.content.to_lowercase().contains(q), "{} should contain {q}", c.id);
        }
    }
}

#[test]
fn empty_query_keeps_everything_in_order() {
    let all = filter_claims(&BROWSE_CLAIMS, "   ");
    assert_eq!(all.len(), BROWSE_CLAIMS.len());
    assert_eq!(all[0].id, "101");
}

#[test]
fn no_match_returns_empty() {
    assert!(filter_claims(&BROWSE_CLAIMS, "quantum teleportation").is_empty());
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn discussed_sort_is_non_increasing() {
    let mut list = filter_claims(&BROWSE_CLAIMS, "");
    sort_claims(&mut list, SortMode::Discussed);
    assert!(list.windows(2).all(|w| w[0].comment_count >= w[1].comment_count));
    assert_eq!(list[0].id, "110");
}

#[test]
fn confidence_sort_is_non_increasing() {
    let mut list = filter_claims(&BROWSE_CLAIMS, "");
    sort_claims(&mut list, SortMode::Confidence);
    assert!(list.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    assert_eq!(list[0].id, "110");
    assert_eq!(list.last().unwrap().id, "109");
}

#[test]
fn newest_sort_keeps_catalogue_order() {
    let mut list = filter_claims(&BROWSE_CLAIMS, "");
    sort_claims(&mut list, SortMode::Newest);
    let ids: Vec<_> = list.iter().map(|c| c.id).collect();
    let expected: Vec<_> = BROWSE_CLAIMS.iter().map(|c| c.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn sort_is_stable_for_ties() {
    let mut a = BROWSE_CLAIMS[0].clone();
    let mut b = BROWSE_CLAIMS[1].clone();
    a.comment_count = 5;
    b.comment_count = 5;
    let items = [a, b];
    let mut list = filter_claims(&items, "");
    sort_claims(&mut list, SortMode::Discussed);
    assert_eq!(list[0].id, "101");
    assert_eq!(list[1].id, "102");
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn total_pages_rounds_up_and_never_zero() {
    assert_eq!(total_pages(0, PAGE_SIZE), 1);
    assert_eq!(total_pages(9, PAGE_SIZE), 1);
    assert_eq!(total_pages(10, PAGE_SIZE), 2);
    assert_eq!(total_pages(12, PAGE_SIZE), 2);
    assert_eq!(total_pages(19, PAGE_SIZE), 3);
}

#[test]
fn page_slice_returns_expected_windows() {
    let items: Vec<u32> = (1..=12).collect();
    assert_eq!(page_slice(&items, 1, 9), &items[0..9]);
    assert_eq!(page_slice(&items, 2, 9), &items[9..12]);
    assert!(page_slice(&items, 3, 9).is_empty());
}

#[test]
fn page_slice_treats_page_zero_as_first() {
    let items = [1, 2, 3];
    assert_eq!(page_slice(&items, 0, 2), &[1, 2]);
}

#[test]
fn navigation_clamps_to_bounds() {
    let mut state = BrowseState::default();
    assert!(!state.has_prev());
    assert!(state.has_next(2));

    state.prev_page();
    assert_eq!(state.page, 1);

    state.next_page(2);
    assert_eq!(state.page, 2);
    assert!(state.has_prev());
    assert!(!state.has_next(2));

    state.next_page(2);
    assert_eq!(state.page, 2);
}

#[test]
fn single_page_disables_both_directions() {
    let state = BrowseState::default();
    assert!(!state.has_prev());
    assert!(!state.has_next(1));
}

#[test]
fn query_and_sort_changes_reset_page() {
    let mut state = BrowseState::default();
    state.next_page(2);
    state.set_query("city".to_owned());
    assert_eq!(state.page, 1);

    state.next_page(2);
    state.set_sort(SortMode::Confidence);
    assert_eq!(state.page, 1);
    assert_eq!(state.sort, SortMode::Confidence);
}

#[test]
fn results_combine_filter_and_sort() {
    let mut state = BrowseState::default();
    state.set_query("claims".to_owned());
    state.set_sort(SortMode::Discussed);
    let results = state.results(&BROWSE_CLAIMS);
    assert!(results.iter().all(|c| c.content.to_lowercase().contains("claims")));
    assert!(results.windows(2).all(|w| w[0].comment_count >= w[1].comment_count));
}

#[test]
fn full_catalogue_spans_two_pages() {
    let state = BrowseState::default();
    let results = state.results(&BROWSE_CLAIMS);
    let pages = total_pages(results.len(), PAGE_SIZE);
    assert_eq!(pages, 2);
    assert_eq!(page_slice(&results, 1, PAGE_SIZE).len(), 9);
    assert_eq!(page_slice(&results, pages, PAGE_SIZE).len(), 3);
}
