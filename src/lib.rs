//! Mehrstein falling-block game (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the integration
//! tests and the benches share a single import path.

pub use mehrstein_core as core;
pub use mehrstein_input as input;
pub use mehrstein_term as term;
pub use mehrstein_types as types;
