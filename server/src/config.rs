//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) before calling [`AppConfig::from_env`].
//! The endpoint values are forwarded to the browser through the page shell;
//! the server itself never calls the backend or the auth provider.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::ClientConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors surfaced at startup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: expected 1-65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub backend_url: Option<String>,
    pub auth_url: Option<String>,
    pub auth_anon_key: Option<String>,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `BACKEND_URL`: fact-checking API base URL
    /// - `AUTH_URL`: auth provider base URL
    /// - `AUTH_ANON_KEY`: auth provider public key
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let endpoints = ClientConfig::new(lookup("BACKEND_URL"), lookup("AUTH_URL"), lookup("AUTH_ANON_KEY"));
        Ok(Self {
            port,
            backend_url: endpoints.backend_url,
            auth_url: endpoints.auth_url,
            auth_anon_key: endpoints.auth_anon_key,
        })
    }

    /// Endpoint settings handed to the page shell.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            backend_url: self.backend_url.clone(),
            auth_url: self.auth_url.clone(),
            auth_anon_key: self.auth_anon_key.clone(),
        }
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}
