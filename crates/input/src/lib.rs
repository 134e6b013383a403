//! Terminal input module (viewer-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` key events into [`crate::types::ViewerAction`] and mouse events
//! into screen-space [`crate::types::Gesture`]s that a viewport can consume.

pub mod map;
pub mod pointer;

pub use wargame_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::PointerMapper;
