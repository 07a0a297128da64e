//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_COLS: u8 = 10;
pub const BOARD_ROWS: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
/// Fixed gravity period; the speed never changes with score or lines.
pub const GRAVITY_INTERVAL_MS: u32 = 1000;

/// Points per simultaneous line clear, indexed by number of lines (1..=4).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Every 10 cumulative cleared lines bumps the score multiplier by one.
pub const MULTIPLIER_LINE_STEP: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Top-left anchor of a shape matrix in board coordinates.
///
/// `row` may be negative while a freshly spawned piece is still partially
/// above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn shifted(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Horizontal/vertical move directions for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Commands the host can issue into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Rotate,
    HardDrop,
    Start,
    Pause,
}

/// Outcome of a single move attempt.
///
/// `Landed` means a blocked downward move locked the piece; `Rejected` covers
/// blocked lateral moves and commands issued while not Running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Landed,
    Rejected,
}
