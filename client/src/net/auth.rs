//! Auth-provider calls (GoTrue-compatible REST).
//!
//! SYSTEM CONTEXT
//! ==============
//! Sessions are issued by an external provider. The UI only signs in, signs
//! up, signs out, and keeps the resulting [`Session`] in `localStorage`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::types::Session;
use crate::config::ClientConfig;

fn password_token_endpoint(auth_url: &str) -> String {
    format!("{auth_url}/auth/v1/token?grant_type=password")
}

fn signup_endpoint(auth_url: &str) -> String {
    format!("{auth_url}/auth/v1/signup")
}

fn logout_endpoint(auth_url: &str) -> String {
    format!("{auth_url}/auth/v1/logout")
}

fn credentials_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

/// Interpret a signup response: a session when the provider auto-confirms,
/// `None` when the user must confirm their email first.
fn session_from_signup(body: serde_json::Value) -> Option<Session> {
    serde_json::from_value(body).ok()
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns an error if the provider is unconfigured, unreachable, or rejects
/// the credentials.
pub async fn sign_in_with_password(config: &ClientConfig, email: &str, password: &str) -> Result<Session, ApiError> {
    let (auth_url, anon_key) = config.auth_endpoint().ok_or(ApiError::MissingAuthConfig)?;
    let url = password_token_endpoint(auth_url);
    let payload = credentials_payload(email, password);
    #[cfg(feature = "hydrate")]
    {
        use super::api::{decode, network};
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", anon_key)
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload, anon_key);
        Err(ApiError::Unavailable)
    }
}

/// Register a new account.
///
/// Returns `Some(session)` when the provider signs the user in immediately.
///
/// # Errors
///
/// Returns an error if the provider is unconfigured, unreachable, or rejects
/// the registration.
pub async fn sign_up(config: &ClientConfig, email: &str, password: &str) -> Result<Option<Session>, ApiError> {
    let (auth_url, anon_key) = config.auth_endpoint().ok_or(ApiError::MissingAuthConfig)?;
    let url = signup_endpoint(auth_url);
    let payload = credentials_payload(email, password);
    #[cfg(feature = "hydrate")]
    {
        use super::api::{decode, network};
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", anon_key)
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let body: serde_json::Value = decode(resp).await?;
        Ok(session_from_signup(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload, anon_key, session_from_signup);
        Err(ApiError::Unavailable)
    }
}

/// Revoke the session at the provider. Failures are ignored; the caller
/// clears local state regardless.
pub async fn sign_out(config: &ClientConfig, access_token: &str) {
    let Some((auth_url, anon_key)) = config.auth_endpoint() else {
        return;
    };
    let url = logout_endpoint(auth_url);
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&url)
            .header("apikey", anon_key)
            .header("Authorization", &super::api::bearer(access_token))
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("sign-out request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, anon_key, access_token);
    }
}
