//! REST helpers for the fact-checking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch degrades
//! into an inline message or mock data without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ClaimDetail, Comment, DashboardStats, SubmittedClaim, VoteType};
use crate::config::ClientConfig;
use crate::state::submit::ClaimForm;

/// File payload attached to a claim submission.
#[cfg(feature = "hydrate")]
pub type FilePart = web_sys::File;
/// File payload attached to a claim submission (no files outside the browser).
#[cfg(not(feature = "hydrate"))]
pub type FilePart = ();

fn claim_detail_endpoint(base: &str, claim_id: &str) -> String {
    format!("{base}/api/v1/claims/{claim_id}")
}

fn submit_claim_endpoint(base: &str) -> String {
    format!("{base}/api/v1/claims/submit")
}

fn dashboard_stats_endpoint(base: &str) -> String {
    format!("{base}/api/v1/dashboard/stats")
}

fn claim_comments_endpoint(base: &str, claim_id: &str) -> String {
    format!("{base}/api/v1/comments/{claim_id}")
}

fn create_comment_endpoint(base: &str) -> String {
    format!("{base}/api/v1/comments/")
}

fn comment_vote_endpoint(base: &str, comment_id: &str) -> String {
    format!("{base}/api/v1/comments/{comment_id}/vote")
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn backend_base(config: &ClientConfig) -> Result<&str, ApiError> {
    config.backend_url.as_deref().ok_or(ApiError::MissingBackendUrl)
}

/// Multipart text fields for a claim submission, in send order.
fn claim_form_fields(form: &ClaimForm) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("content", form.content.clone()),
        ("content_type", form.content_type.as_str().to_owned()),
    ];
    if let Some(url) = &form.original_url {
        fields.push(("original_url", url.clone()));
    }
    fields
}

/// Pull a human-readable message out of an error body, if one is present.
///
/// Understands FastAPI (`detail`) and GoTrue (`error_description`, `msg`)
/// error shapes.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "error_description", "msg", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_owned)
}

#[cfg(feature = "hydrate")]
pub(crate) async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp.text().await.ok().and_then(|body| error_message_from_body(&body));
    log::warn!("request to {} failed with status {status}", resp.url());
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
pub(crate) fn network(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Fetch a claim with its analysis and comment count.
///
/// # Errors
///
/// Returns an error if the backend is unconfigured, unreachable, answers
/// with a non-OK status, or returns an unexpected body.
pub async fn fetch_claim_detail(config: &ClientConfig, claim_id: &str) -> Result<ClaimDetail, ApiError> {
    let base = backend_base(config)?;
    let url = claim_detail_endpoint(base, claim_id);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Submit a claim as multipart form data and return the created claim id.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// backend rejects the submission.
pub async fn submit_claim(
    config: &ClientConfig,
    access_token: &str,
    form: &ClaimForm,
    file: Option<FilePart>,
) -> Result<SubmittedClaim, ApiError> {
    let base = backend_base(config)?;
    let url = submit_claim_endpoint(base);
    let fields = claim_form_fields(form);
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::FormData::new().map_err(|e| network(format!("{e:?}")))?;
        for (name, value) in &fields {
            body.append_with_str(name, value).map_err(|e| network(format!("{e:?}")))?;
        }
        if let Some(file) = file {
            body.append_with_blob_and_filename("file", &file, &file.name())
                .map_err(|e| network(format!("{e:?}")))?;
        }
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(access_token))
            .body(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, fields, access_token, file);
        Err(ApiError::Unavailable)
    }
}

/// Fetch aggregate dashboard statistics for the signed-in user.
///
/// # Errors
///
/// Returns an error on any configuration, transport, status, or decode
/// failure; the dashboard substitutes mock data in that case.
pub async fn fetch_dashboard_stats(config: &ClientConfig, access_token: &str) -> Result<DashboardStats, ApiError> {
    let base = backend_base(config)?;
    let url = dashboard_stats_endpoint(base);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(access_token))
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, access_token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the discussion thread for a claim, newest first.
///
/// # Errors
///
/// Returns an error if the backend is unconfigured or the request fails.
pub async fn fetch_comments(config: &ClientConfig, claim_id: &str) -> Result<Vec<Comment>, ApiError> {
    let base = backend_base(config)?;
    let url = claim_comments_endpoint(base, claim_id);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Post a new top-level comment on a claim.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn post_comment(
    config: &ClientConfig,
    access_token: &str,
    claim_id: &str,
    content: &str,
) -> Result<Comment, ApiError> {
    let base = backend_base(config)?;
    let url = create_comment_endpoint(base);
    let payload = serde_json::json!({ "content": content, "claim_id": claim_id });
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(access_token))
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload, access_token);
        Err(ApiError::Unavailable)
    }
}

/// Cast or change the current user's vote on a comment.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn vote_comment(
    config: &ClientConfig,
    access_token: &str,
    comment_id: &str,
    vote: VoteType,
) -> Result<(), ApiError> {
    let base = backend_base(config)?;
    let url = comment_vote_endpoint(base, comment_id);
    let payload = serde_json::json!({ "vote_type": vote });
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(access_token))
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload, access_token);
        Err(ApiError::Unavailable)
    }
}
