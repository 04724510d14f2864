use super::*;

// =============================================================
// Enumerations
// =============================================================

#[test]
fn verdict_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_string(&Verdict::True).unwrap(), "\"true\"");
    assert_eq!(serde_json::to_string(&Verdict::False).unwrap(), "\"false\"");
    let parsed: Verdict = serde_json::from_str("\"misleading\"").unwrap();
    assert_eq!(parsed, Verdict::Misleading);
}

#[test]
fn unknown_verdict_falls_back_to_uncertain() {
    let parsed: Verdict = serde_json::from_str("\"satire\"").unwrap();
    assert_eq!(parsed, Verdict::Uncertain);
    assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"uncertain\"");
}

#[test]
fn content_type_as_str_matches_wire_name() {
    for kind in [ContentType::Text, ContentType::Url, ContentType::Image, ContentType::Video] {
        let wire = serde_json::to_string(&kind).unwrap();
        assert_eq!(wire, format!("\"{}\"", kind.as_str()));
    }
}

#[test]
fn claim_status_known_values_parse() {
    let status: ClaimStatus = serde_json::from_str("\"processing\"").unwrap();
    assert_eq!(status, ClaimStatus::Processing);
    assert_eq!(serde_json::to_string(&ClaimStatus::Completed).unwrap(), "\"completed\"");
}

#[test]
fn claim_status_unknown_value_is_preserved() {
    let status: ClaimStatus = serde_json::from_str("\"archived\"").unwrap();
    assert_eq!(status, ClaimStatus::Other("archived".to_owned()));
    assert_eq!(status.as_str(), "archived");
    assert_eq!(serde_json::to_string(&status).unwrap(), "\"archived\"");
}

// =============================================================
// Claim detail
// =============================================================

#[test]
fn claim_detail_parses_backend_payload() {
    let json = serde_json::json!({
        "claim": {
            "id": "c-1",
            "user_id": "u-1",
            "content": "The moon is made of cheese",
            "content_type": "text",
            "original_url": null,
            "file_path": null,
            "status": "completed",
            "created_at": "2025-09-01T10:00:00+00:00",
            "updated_at": "2025-09-01T10:01:00+00:00"
        },
        "analysis": {
            "id": "a-1",
            "claim_id": "c-1",
            "verdict": "false",
            "confidence_score": 0.97,
            "summary": "No.",
            "evidence": [
                { "source": "NASA", "excerpt": "Rock.", "credibility_score": 0.9, "url": "https://nasa.gov" }
            ],
            "sources": [
                { "title": "Lunar geology", "type": "academic", "verified": true }
            ],
            "ai_reasoning": "Samples are basalt.",
            "created_at": "2025-09-01T10:01:00+00:00"
        },
        "comment_count": 3
    });
    let detail: ClaimDetail = serde_json::from_value(json).unwrap();
    assert_eq!(detail.claim.status, ClaimStatus::Completed);
    assert_eq!(detail.comment_count, 3);
    let analysis = detail.analysis.unwrap();
    assert_eq!(analysis.verdict, Verdict::False);
    assert_eq!(analysis.evidence[0].credibility_score, Some(0.9));
    assert_eq!(analysis.sources[0].kind, "academic");
    assert!(analysis.sources[0].verified);
    assert_eq!(analysis.sources[0].url, None);
}

#[test]
fn claim_detail_with_unknown_verdict_still_decodes() {
    let json = serde_json::json!({
        "claim": {
            "id": "c-9",
            "content": "parody headline",
            "content_type": "text",
            "status": "completed",
            "created_at": "2025-09-01T10:00:00Z"
        },
        "analysis": {
            "verdict": "satire",
            "confidence_score": 0.6,
            "summary": "A parody.",
            "created_at": "2025-09-01T10:01:00Z"
        },
        "comment_count": 0
    });
    let detail: ClaimDetail = serde_json::from_value(json).unwrap();
    assert_eq!(detail.analysis.unwrap().verdict, Verdict::Uncertain);
}

#[test]
fn claim_detail_without_analysis_defaults() {
    let json = serde_json::json!({
        "claim": {
            "id": "c-2",
            "content": "pending one",
            "content_type": "url",
            "original_url": "https://example.com",
            "status": "processing",
            "created_at": "2025-09-01T10:00:00Z"
        },
        "comment_count": 0
    });
    let detail: ClaimDetail = serde_json::from_value(json).unwrap();
    assert!(detail.analysis.is_none());
    assert_eq!(detail.claim.original_url.as_deref(), Some("https://example.com"));
}

#[test]
fn comment_count_accepts_integral_float() {
    let json = serde_json::json!({
        "claim": {
            "id": "c-3",
            "content": "x",
            "content_type": "text",
            "status": "pending",
            "created_at": "2025-09-01T10:00:00Z"
        },
        "comment_count": 4.0
    });
    let detail: ClaimDetail = serde_json::from_value(json).unwrap();
    assert_eq!(detail.comment_count, 4);
}

#[test]
fn dashboard_stats_rejects_negative_counts() {
    let json = serde_json::json!({
        "total_claims": -1,
        "pending_claims": 0,
        "completed_claims": 0,
        "rti_requests": 0,
        "recent_claims": []
    });
    assert!(serde_json::from_value::<DashboardStats>(json).is_err());
}

// =============================================================
// Comments and sessions
// =============================================================

#[test]
fn comment_score_and_author_fallback() {
    let comment = Comment {
        id: "m-1".to_owned(),
        content: "Good catch".to_owned(),
        user: CommentAuthor { full_name: None, email: "dana@example.com".to_owned(), is_expert: false },
        upvotes: 5,
        downvotes: 7,
        is_expert_response: false,
        created_at: "2025-09-02T00:00:00Z".to_owned(),
    };
    assert_eq!(comment.score(), -2);
    assert_eq!(comment.user.display_name(), "dana");
}

#[test]
fn comment_author_prefers_full_name() {
    let author = CommentAuthor {
        full_name: Some("Dana Scully".to_owned()),
        email: "dana@example.com".to_owned(),
        is_expert: true,
    };
    assert_eq!(author.display_name(), "Dana Scully");
}

#[test]
fn session_handle_is_email_local_part() {
    let session = Session {
        access_token: "tok".to_owned(),
        user: SessionUser { id: "u-1".to_owned(), email: "fox@fbi.gov".to_owned() },
    };
    assert_eq!(session.handle(), "fox");
    assert_eq!(email_local_part(""), "");
}
