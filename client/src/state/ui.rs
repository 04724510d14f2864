//! Local UI chrome state (mobile menu, browse overlays).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`browse`,
//! `claim`) so rendering controls can evolve independently of fetched data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Overlay opened from a browse card. Holds the sample claim id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseModal {
    Comments(String),
    Preview(String),
}

/// UI state for the navigation bar and browse overlays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub mobile_menu_open: bool,
    pub modal: Option<BrowseModal>,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Following any navigation link collapses the mobile menu.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn open_comments(&mut self, claim_id: &str) {
        self.modal = Some(BrowseModal::Comments(claim_id.to_owned()));
    }

    pub fn open_preview(&mut self, claim_id: &str) {
        self.modal = Some(BrowseModal::Preview(claim_id.to_owned()));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Apply a keyboard key. Escape closes any overlay; returns whether the
    /// key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.modal.is_some() {
            self.modal = None;
            return true;
        }
        false
    }
}
