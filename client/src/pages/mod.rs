//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod browse;
pub mod claim_detail;
pub mod dashboard;
pub mod home;
pub mod login;
