//! Gridfall: a terminal falling-block puzzle game.
//!
//! The crate splits into a pure core (`core`, `types`) and the terminal host
//! around it (`term`, `input`). The core never touches I/O; the host pushes
//! key events and elapsed time into it and renders snapshots back out.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
