//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use board::Board;
pub use pieces::{canonical_shape, Piece, ShapeMatrix};
pub use rng::{PieceFactory, SimpleRng};
pub use session::{FallingPiece, Session};
