use super::*;

fn picked(name: &str, mime: &str) -> SelectedFile {
    SelectedFile { name: name.to_owned(), mime: mime.to_owned(), size: 2_097_152.0 }
}

#[test]
fn content_type_follows_mode() {
    assert_eq!(content_type_for(InputMode::Text, None), ContentType::Text);
    assert_eq!(content_type_for(InputMode::Url, None), ContentType::Url);
}

#[test]
fn file_content_type_is_image_or_video_by_mime() {
    assert_eq!(content_type_for(InputMode::File, Some("image/png")), ContentType::Image);
    assert_eq!(content_type_for(InputMode::File, Some("video/mp4")), ContentType::Video);
    assert_eq!(content_type_for(InputMode::File, None), ContentType::Video);
}

#[test]
fn blank_submission_is_rejected() {
    assert_eq!(build_submission(InputMode::Text, "   ", None), None);
    assert_eq!(build_submission(InputMode::File, "", None), None);
}

#[test]
fn text_submission_has_no_url() {
    let form = build_submission(InputMode::Text, "The earth is flat", None).unwrap();
    assert_eq!(form.content, "The earth is flat");
    assert_eq!(form.content_type, ContentType::Text);
    assert_eq!(form.original_url, None);
}

#[test]
fn url_submission_copies_content_into_original_url() {
    let form = build_submission(InputMode::Url, "https://news.example/story", None).unwrap();
    assert_eq!(form.content_type, ContentType::Url);
    assert_eq!(form.original_url.as_deref(), Some("https://news.example/story"));
}

#[test]
fn file_submission_uses_placeholder_content() {
    let file = picked("storm.jpg", "image/jpeg");
    let form = build_submission(InputMode::File, "storm.jpg", Some(&file)).unwrap();
    assert_eq!(form.content, "File submission: storm.jpg");
    assert_eq!(form.content_type, ContentType::Image);
    assert_eq!(form.original_url, None);
}

#[test]
fn switching_mode_clears_input() {
    let mut state = SubmitState::default();
    state.content = "draft".to_owned();
    state.error = Some("old".to_owned());
    state.set_mode(InputMode::Url);
    assert_eq!(state.mode, InputMode::Url);
    assert!(state.content.is_empty());
    assert!(state.error.is_none());
    assert!(!state.can_submit());
}

#[test]
fn selecting_and_clearing_file() {
    let mut state = SubmitState::default();
    state.set_mode(InputMode::File);
    state.select_file(picked("clip.mp4", "video/mp4"));
    assert_eq!(state.content, "clip.mp4");
    assert!(state.can_submit());
    assert_eq!(state.build_form().unwrap().content_type, ContentType::Video);

    state.clear_file();
    assert!(state.file.is_none());
    assert!(!state.can_submit());
}

#[test]
fn submitting_disables_button() {
    let mut state = SubmitState::default();
    state.content = "claim".to_owned();
    assert!(state.can_submit());
    state.submitting = true;
    assert!(!state.can_submit());
}

#[test]
fn file_size_formats_megabytes() {
    assert_eq!(format_file_size(2_097_152.0), "2.00 MB");
    assert_eq!(format_file_size(1_572_864.0), "1.50 MB");
    assert_eq!(format_file_size(0.0), "0.00 MB");
}
