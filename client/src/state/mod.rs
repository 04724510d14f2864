//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each module holds plain data plus the rules that change it. Pages wrap
//! these structs in `RwSignal`s; nothing here touches the DOM or the network.

pub mod auth;
pub mod browse;
pub mod claim;
pub mod comments;
pub mod dashboard;
pub mod samples;
pub mod submit;
pub mod ui;
