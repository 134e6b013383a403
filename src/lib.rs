//! Wargame map viewers (workspace facade crate).
//!
//! The viewport, terrain and loading logic live in `wargame-core`; this
//! package re-exports the member crates and hosts the shared terminal event
//! loop used by the `wargame-viewer`, `hex-map` and `image-viewer` binaries.

pub mod app;
pub mod logging;

pub use wargame_core as core;
pub use wargame_input as input;
pub use wargame_term as term;
pub use wargame_types as types;
