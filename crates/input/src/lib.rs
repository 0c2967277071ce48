//! Terminal input module (engine-facing).
//!
//! This crate is independent of any rendering. It maps `crossterm` key events into
//! [`crate::types::GameAction`] and front-end [`Control`]s, and turns the stream of
//! press/repeat/release events into a per-frame "held keys" sample, which also works
//! on terminals that never report key release.

pub mod handler;
pub mod map;

pub use mehrstein_types as types;

pub use handler::HeldKeys;
pub use map::{control_key, handle_key_event, Control};
