use super::*;
use crate::net::types::ContentType;

#[test]
fn endpoints_format_expected_paths() {
    let base = "https://api.example.com";
    assert_eq!(claim_detail_endpoint(base, "c-1"), "https://api.example.com/api/v1/claims/c-1");
    assert_eq!(submit_claim_endpoint(base), "https://api.example.com/api/v1/claims/submit");
    assert_eq!(dashboard_stats_endpoint(base), "https://api.example.com/api/v1/dashboard/stats");
    assert_eq!(claim_comments_endpoint(base, "c-1"), "https://api.example.com/api/v1/comments/c-1");
    assert_eq!(create_comment_endpoint(base), "https://api.example.com/api/v1/comments/");
    assert_eq!(comment_vote_endpoint(base, "m-9"), "https://api.example.com/api/v1/comments/m-9/vote");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn backend_base_requires_configuration() {
    assert_eq!(backend_base(&ClientConfig::default()), Err(ApiError::MissingBackendUrl));
    let cfg = ClientConfig::new(Some("http://localhost:8000".to_owned()), None, None);
    assert_eq!(backend_base(&cfg), Ok("http://localhost:8000"));
}

#[test]
fn claim_form_fields_include_url_only_when_present() {
    let text = ClaimForm {
        content: "Water is wet".to_owned(),
        content_type: ContentType::Text,
        original_url: None,
    };
    assert_eq!(
        claim_form_fields(&text),
        vec![("content", "Water is wet".to_owned()), ("content_type", "text".to_owned())]
    );

    let url = ClaimForm {
        content: "https://news.example/a".to_owned(),
        content_type: ContentType::Url,
        original_url: Some("https://news.example/a".to_owned()),
    };
    let fields = claim_form_fields(&url);
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[2], ("original_url", "https://news.example/a".to_owned()));
}

#[test]
fn error_message_from_body_reads_known_shapes() {
    assert_eq!(error_message_from_body(r#"{"detail":"Claim not found"}"#), Some("Claim not found".to_owned()));
    assert_eq!(
        error_message_from_body(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
        Some("Invalid login credentials".to_owned())
    );
    assert_eq!(error_message_from_body(r#"{"msg":"User already registered"}"#), Some("User already registered".to_owned()));
}

#[test]
fn error_message_from_body_ignores_unknown_or_invalid() {
    assert_eq!(error_message_from_body("not json"), None);
    assert_eq!(error_message_from_body(r#"{"detail":[{"loc":["body"]}]}"#), None);
    assert_eq!(error_message_from_body("{}"), None);
}

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 404, message: Some("Claim not found".to_owned()) };
    assert_eq!(err.user_message(), "Claim not found");
    let bare = ApiError::Status { status: 500, message: None };
    assert_eq!(bare.user_message(), "HTTP 500");
}
