use super::*;
use crate::net::types::CommentAuthor;

fn comment(id: &str, up: i64, down: i64) -> Comment {
    Comment {
        id: id.to_owned(),
        content: format!("comment {id}"),
        user: CommentAuthor { full_name: None, email: "dana@example.com".to_owned(), is_expert: false },
        upvotes: up,
        downvotes: down,
        is_expert_response: false,
        created_at: "2025-09-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn fetch_success_replaces_items() {
    let mut state = CommentsState::default();
    assert!(state.loading);
    state.apply_fetch_result(Ok(vec![comment("a", 1, 0), comment("b", 0, 0)]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.heading(), "Discussion (2)");
}

#[test]
fn fetch_error_keeps_previous_items() {
    let mut state = CommentsState::default();
    state.apply_fetch_result(Ok(vec![comment("a", 0, 0)]));
    state.apply_fetch_result(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("request failed: offline"));
}

#[test]
fn blank_or_in_flight_drafts_are_not_posted() {
    let mut state = CommentsState::default();
    state.draft = "   ".to_owned();
    assert_eq!(state.pending_post(), None);
    state.draft = "  Source? ".to_owned();
    assert_eq!(state.pending_post().as_deref(), Some("Source?"));
    state.posting = true;
    assert_eq!(state.pending_post(), None);
}

#[test]
fn posted_comment_goes_first_and_clears_draft() {
    let mut state = CommentsState::default();
    state.apply_fetch_result(Ok(vec![comment("old", 0, 0)]));
    state.draft = "new one".to_owned();
    state.posting = true;
    state.apply_post_result(Ok(comment("new", 0, 0)));
    assert_eq!(state.items[0].id, "new");
    assert!(state.draft.is_empty());
    assert!(!state.posting);
}

#[test]
fn failed_post_keeps_draft() {
    let mut state = CommentsState::default();
    state.draft = "keep me".to_owned();
    state.posting = true;
    state.apply_post_result(Err(ApiError::Status { status: 401, message: Some("Not authenticated".to_owned()) }));
    assert_eq!(state.draft, "keep me");
    assert_eq!(state.error.as_deref(), Some("Not authenticated"));
    assert!(!state.posting);
}

#[test]
fn votes_adjust_local_score() {
    let mut state = CommentsState::default();
    state.apply_fetch_result(Ok(vec![comment("a", 2, 1)]));
    state.apply_vote("a", VoteType::Up);
    assert_eq!(state.items[0].score(), 2);
    state.apply_vote("missing", VoteType::Up);
    assert_eq!(state.items[0].upvotes, 3);
    assert!(!state.my_votes.contains_key("missing"));
}

#[test]
fn repeated_vote_counts_once() {
    let mut state = CommentsState::default();
    state.apply_fetch_result(Ok(vec![comment("a", 0, 0)]));
    for _ in 0..3 {
        state.apply_vote("a", VoteType::Up);
    }
    assert_eq!(state.items[0].score(), 1);
    assert!(state.is_repeat_vote("a", VoteType::Up));
    assert!(!state.is_repeat_vote("a", VoteType::Down));
}

#[test]
fn switched_vote_moves_the_count() {
    let mut state = CommentsState::default();
    state.apply_fetch_result(Ok(vec![comment("a", 2, 1)]));
    state.apply_vote("a", VoteType::Up);
    state.apply_vote("a", VoteType::Down);
    assert_eq!((state.items[0].upvotes, state.items[0].downvotes), (2, 2));
    state.apply_vote("a", VoteType::Down);
    assert_eq!(state.items[0].score(), 0);
}

#[test]
fn switched_vote_never_goes_negative() {
    let mut state = CommentsState::default();
    state.apply_fetch_result(Ok(vec![comment("a", 0, 0)]));
    state.apply_vote("a", VoteType::Down);
    state.apply_fetch_result(Ok(vec![comment("a", 0, 0)]));
    state.apply_vote("a", VoteType::Up);
    assert_eq!((state.items[0].upvotes, state.items[0].downvotes), (1, 0));
}
