//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and the state around them. It has no
//! dependencies on terminals, input devices or timers, which makes it:
//!
//! - **Deterministic**: the engine draws all randomness from an injected [`PieceRng`]
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: any front-end can poll it once per frame
//!
//! # Module Structure
//!
//! - [`board`]: `columns x rows` grid with collision queries and row clearing
//! - [`pieces`]: the seven shape templates and pivot rotation
//! - [`rng`]: the [`PieceRng`] capability and a seeded LCG
//! - [`engine`]: the falling-block state machine (`step`, `apply_input`, queries)
//! - [`session`]: pause, gravity cadence, fail line and restart around an engine
//! - [`snapshot`]: owned per-frame copy of the observable state
//! - [`config`]: board size and timing
//!
//! # Game Rules
//!
//! - A new game starts with a horizontal I-piece centered on row 0
//! - Later pieces are one of seven templates at a random column, in a random color
//! - Gravity moves the piece one row per tick; a piece that cannot move locks
//! - Full rows are removed and empty rows enter at the top
//! - Scoring: 100 per cleared row plus 10 per locked piece
//! - The game is over once the top row holds a locked cell
//!
//! # Example
//!
//! ```
//! use mehrstein_core::Engine;
//! use mehrstein_types::GameAction;
//!
//! let mut engine = Engine::with_seed(20, 30, 12345);
//!
//! engine.apply_input(GameAction::MoveRight);
//! engine.apply_input(GameAction::RotateCw);
//! engine.step();
//!
//! // Drop until the first piece locks.
//! while engine.pieces_locked() == 0 {
//!     engine.apply_input(GameAction::SoftDrop);
//! }
//! assert_eq!(engine.score(), 10);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use mehrstein_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use engine::{Engine, Piece};
pub use pieces::{get_shape, identify};
pub use rng::{PieceRng, SimpleRng};
pub use session::Session;
pub use snapshot::GameSnapshot;
