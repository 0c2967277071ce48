//! Terminal front-end for the falling-block game.
//!
//! A small, game-oriented rendering layer: the view draws a
//! [`mehrstein_core::GameSnapshot`] into a framebuffer, and the renderer flushes
//! that framebuffer to the terminal through crossterm. No widget toolkit, no layout
//! engine.
//!
//! Goals:
//! - Keep `core` free of any terminal concern
//! - Keep drawing pure so it can be unit-tested
//! - Draw board cells 2 characters wide to offset the glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use mehrstein_core as core;
pub use mehrstein_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
