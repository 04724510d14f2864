//! Networking modules for the external backend and auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles backend REST calls, `auth` talks to the session provider,
//! `error` is their shared failure type, and `types` defines the wire schema.

pub mod api;
pub mod auth;
pub mod error;
pub mod types;
