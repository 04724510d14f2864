//! Search, sort, and pagination state for the browse page.
//!
//! DESIGN
//! ======
//! The list logic is plain functions over slices so the page component only
//! wires signals; every rule about ordering and page bounds lives here.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use std::cmp::Ordering;

use super::samples::SampleClaim;

/// Claims shown per page.
pub const PAGE_SIZE: usize = 9;

/// Ordering applied to the filtered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Catalogue order, which is already newest first.
    #[default]
    Newest,
    /// Most comments first.
    Discussed,
    /// Highest confidence first.
    Confidence,
}

impl SortMode {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Discussed, Self::Confidence];

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Discussed => "Most Discussed",
            Self::Confidence => "High Confidence",
        }
    }
}

/// Keep claims whose content contains `query`, ignoring case and surrounding
/// whitespace.
pub fn filter_claims<'a>(items: &'a [SampleClaim], query: &str) -> Vec<&'a SampleClaim> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|c| c.content.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by the chosen mode.
pub fn sort_claims(items: &mut [&SampleClaim], mode: SortMode) {
    match mode {
        SortMode::Newest => {}
        SortMode::Discussed => items.sort_by(|a, b| b.comment_count.cmp(&a.comment_count)),
        SortMode::Confidence => {
            items.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal));
        }
    }
}

/// Number of pages for `len` items; never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Items on 1-based `page`, clamped to the list bounds.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current browse controls. Resets to defaults on navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseState {
    pub query: String,
    pub sort: SortMode,
    /// 1-based page number.
    pub page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self { query: String::new(), sort: SortMode::Newest, page: 1 }
    }
}

impl BrowseState {
    /// Change the search text and return to the first page.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 1;
    }

    /// Change the ordering and return to the first page.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total: usize) {
        self.page = (self.page + 1).min(total.max(1));
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < total
    }

    /// Filter and sort `items` with the current query and ordering.
    pub fn results<'a>(&self, items: &'a [SampleClaim]) -> Vec<&'a SampleClaim> {
        let mut list = filter_claims(items, &self.query);
        sort_claims(&mut list, self.sort);
        list
    }
}
