//! Claim submission form state for the home page search bar.
//!
//! DESIGN
//! ======
//! The browser `File` handle stays in the component; this module only sees
//! its name, MIME type, and size, which is all validation and the multipart
//! text fields need.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::net::types::ContentType;

/// Inline message shown when the backend rejects a submission.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit claim. Please try again.";

/// Which input the search bar shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Text,
    Url,
    File,
}

impl InputMode {
    pub const ALL: [Self; 3] = [Self::Text, Self::Url, Self::File];

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Url => "URL",
            Self::File => "File",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Text => "Enter a claim to fact-check...",
            Self::Url => "Enter a URL to analyze...",
            Self::File => "",
        }
    }

    pub fn helper_text(self) -> &'static str {
        match self {
            Self::Text => "Paste any claim or statement you want to verify",
            Self::Url => "Submit news articles, social media posts, or any web content",
            Self::File => "Upload images with text or videos with spoken content",
        }
    }
}

/// Metadata of the file picked in file mode.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    /// Size in bytes.
    pub size: f64,
}

/// Text fields of the multipart claim submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimForm {
    pub content: String,
    pub content_type: ContentType,
    pub original_url: Option<String>,
}

/// Search bar state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitState {
    pub mode: InputMode,
    pub content: String,
    pub file: Option<SelectedFile>,
    pub submitting: bool,
    pub error: Option<String>,
}

impl SubmitState {
    /// Switch input mode, clearing any typed content and picked file.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.content.clear();
        self.file = None;
        self.error = None;
    }

    /// Record a picked file; its name doubles as the content placeholder.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.content.clone_from(&file.name);
        self.file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.file = None;
        self.content.clear();
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && (!self.content.trim().is_empty() || self.file.is_some())
    }

    /// Build the form fields, or `None` if there is nothing to submit.
    pub fn build_form(&self) -> Option<ClaimForm> {
        build_submission(self.mode, &self.content, self.file.as_ref())
    }
}

/// Content type sent for a mode; file uploads are classified by MIME type.
pub fn content_type_for(mode: InputMode, mime: Option<&str>) -> ContentType {
    match mode {
        InputMode::Text => ContentType::Text,
        InputMode::Url => ContentType::Url,
        InputMode::File => {
            if mime.is_some_and(|m| m.starts_with("image/")) {
                ContentType::Image
            } else {
                ContentType::Video
            }
        }
    }
}

/// Assemble multipart text fields. Returns `None` when both the trimmed
/// content and the file are empty.
pub fn build_submission(mode: InputMode, content: &str, file: Option<&SelectedFile>) -> Option<ClaimForm> {
    if content.trim().is_empty() && file.is_none() {
        return None;
    }
    let body = match (mode, file) {
        (InputMode::File, Some(f)) => format!("File submission: {}", f.name),
        _ => content.to_owned(),
    };
    Some(ClaimForm {
        content: body,
        content_type: content_type_for(mode, file.map(|f| f.mime.as_str())),
        original_url: (mode == InputMode::Url).then(|| content.to_owned()),
    })
}

/// File size in megabytes with two decimals, e.g. `"1.50 MB"`.
pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}
