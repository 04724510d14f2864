//! Browser localStorage persistence for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads under a single key. These helpers centralize
//! hydrate-only read/write behavior so pages do not repeat web-sys glue; on
//! the server they are no-ops.

use crate::net::types::Session;

/// `localStorage` key holding the serialized session.
pub const SESSION_KEY: &str = "truthguard_session";

/// Parse a stored session, dropping values with an empty access token.
pub fn decode_session(raw: &str) -> Option<Session> {
    serde_json::from_str::<Session>(raw).ok().filter(|s| !s.access_token.is_empty())
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the persisted session, if any.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
        decode_session(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session.
pub fn save_session(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        if storage.set_item(SESSION_KEY, &raw).is_err() {
            log::warn!("failed to persist session");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove the persisted session.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
