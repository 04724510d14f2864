use super::*;
use std::collections::HashSet;

#[test]
fn browse_claim_ids_are_unique() {
    let ids: HashSet<_> = BROWSE_CLAIMS.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), BROWSE_CLAIMS.len());
}

#[test]
fn sample_confidences_are_probabilities() {
    for c in BROWSE_CLAIMS.iter().chain(FEATURED_CLAIMS.iter()) {
        assert!((0.0..=1.0).contains(&c.confidence), "{} out of range", c.id);
    }
}

#[test]
fn curated_comments_are_returned_for_known_claims() {
    let comments = sample_comments("101", "2030-01-01");
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].user, "alice");
    assert_eq!(sample_comments("102", "2030-01-01")[0].user, "chris");
}

#[test]
fn unknown_claim_gets_guest_placeholder_dated_today() {
    let comments = sample_comments("999", "2030-01-01");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].user, "guest");
    assert_eq!(comments[0].date, "2030-01-01");
}

#[test]
fn find_browse_claim_matches_id() {
    assert_eq!(find_browse_claim("105").map(|c| c.id), Some("105"));
    assert!(find_browse_claim("1").is_none());
}
