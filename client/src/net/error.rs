//! Error type shared by backend and auth-provider HTTP helpers.

/// Failure modes of an outbound HTTP call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// `BACKEND_URL` was not provided to the client.
    #[error("backend URL is not configured")]
    MissingBackendUrl,

    /// The auth provider URL or public key was not provided.
    #[error("sign-in is not configured")]
    MissingAuthConfig,

    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for inline display next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
