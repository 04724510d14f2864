//! Discussion thread state for the claim detail page.
//!
//! DESIGN
//! ======
//! Votes are applied locally right after the backend accepts them; the
//! backend recalculates counts asynchronously, so the next fetch may differ.
//! The backend keeps one vote per user and comment, so the local counters do
//! the same: a repeated vote is a no-op and a switched vote moves one count.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use std::collections::HashMap;

use crate::net::error::ApiError;
use crate::net::types::{Comment, VoteType};

/// Comment list plus the compose box.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentsState {
    pub items: Vec<Comment>,
    pub loading: bool,
    pub error: Option<String>,
    pub draft: String,
    pub posting: bool,
    /// Votes cast from this page, by comment id.
    pub my_votes: HashMap<String, VoteType>,
}

impl Default for CommentsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, draft: String::new(), posting: false, my_votes: HashMap::new() }
    }
}

impl CommentsState {
    pub fn apply_fetch_result(&mut self, result: Result<Vec<Comment>, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.user_message()),
        }
        self.loading = false;
    }

    /// Trimmed draft, or `None` when there is nothing to post.
    pub fn pending_post(&self) -> Option<String> {
        if self.posting {
            return None;
        }
        let text = self.draft.trim();
        (!text.is_empty()).then(|| text.to_owned())
    }

    /// Record the outcome of posting the draft. A new comment goes to the top.
    pub fn apply_post_result(&mut self, result: Result<Comment, ApiError>) {
        match result {
            Ok(comment) => {
                self.items.insert(0, comment);
                self.draft.clear();
                self.error = None;
            }
            Err(err) => self.error = Some(err.user_message()),
        }
        self.posting = false;
    }

    /// True when this page already cast `vote` on the comment.
    pub fn is_repeat_vote(&self, comment_id: &str, vote: VoteType) -> bool {
        self.my_votes.get(comment_id) == Some(&vote)
    }

    /// Adjust the local counters after an accepted vote.
    pub fn apply_vote(&mut self, comment_id: &str, vote: VoteType) {
        if self.is_repeat_vote(comment_id, vote) {
            return;
        }
        let Some(comment) = self.items.iter_mut().find(|c| c.id == comment_id) else {
            return;
        };
        if let Some(previous) = self.my_votes.insert(comment_id.to_owned(), vote) {
            match previous {
                VoteType::Up => comment.upvotes = (comment.upvotes - 1).max(0),
                VoteType::Down => comment.downvotes = (comment.downvotes - 1).max(0),
            }
        }
        match vote {
            VoteType::Up => comment.upvotes += 1,
            VoteType::Down => comment.downvotes += 1,
        }
    }

    pub fn heading(&self) -> String {
        format!("Discussion ({})", self.items.len())
    }
}
