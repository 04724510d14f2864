//! Runtime endpoints for the external backend and auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders these values into `<meta>` tags in the page shell; the
//! hydrated client reads them back so one WASM bundle can target any backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `<meta name=...>` carrying the backend base URL.
pub const META_BACKEND_URL: &str = "truthguard:backend-url";
/// `<meta name=...>` carrying the auth provider base URL.
pub const META_AUTH_URL: &str = "truthguard:auth-url";
/// `<meta name=...>` carrying the auth provider's public (anon) key.
pub const META_AUTH_ANON_KEY: &str = "truthguard:auth-anon-key";

/// Endpoints the UI talks to. Missing values disable the matching features.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: Option<String>,
    pub auth_url: Option<String>,
    pub auth_anon_key: Option<String>,
}

impl ClientConfig {
    /// Build a config, dropping blank values and trailing slashes on URLs.
    pub fn new(backend_url: Option<String>, auth_url: Option<String>, auth_anon_key: Option<String>) -> Self {
        Self {
            backend_url: normalize_url(backend_url),
            auth_url: normalize_url(auth_url),
            auth_anon_key: non_blank(auth_anon_key),
        }
    }

    /// Read the config from the `<meta>` tags rendered by the server shell.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        Self::new(read_meta(META_BACKEND_URL), read_meta(META_AUTH_URL), read_meta(META_AUTH_ANON_KEY))
    }

    /// Base URL and key for the auth provider, when both are configured.
    pub fn auth_endpoint(&self) -> Option<(&str, &str)> {
        Some((self.auth_url.as_deref()?, self.auth_anon_key.as_deref()?))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn normalize_url(value: Option<String>) -> Option<String> {
    non_blank(value).map(|v| v.trim_end_matches('/').to_owned()).filter(|v| !v.is_empty())
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
    element.get_attribute("content")
}
