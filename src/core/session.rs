//! Session module - composes the board, active piece and piece factory
//!
//! The session owns the whole game: the grid of locked cells, the falling
//! piece, the pre-drawn next piece, score/line counters and the
//! Idle -> Running -> {Paused <-> Running} -> GameOver state machine.
//!
//! Time is pushed in by the host: call [`Session::tick`] with elapsed
//! milliseconds and the session fires one downward gravity move per elapsed
//! [`GRAVITY_INTERVAL_MS`] period. Nothing here blocks or schedules.

use crate::core::pieces::{Piece, ShapeMatrix};
use crate::core::rng::PieceFactory;
use crate::core::Board;
use crate::types::{
    Command, Direction, MoveOutcome, PieceKind, Position, Status, BOARD_COLS, GRAVITY_INTERVAL_MS,
    LINE_SCORES, MULTIPLIER_LINE_STEP,
};

/// The falling piece: current matrix, kind, and board anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    pub shape: ShapeMatrix,
    pub kind: PieceKind,
    pub pos: Position,
}

impl FallingPiece {
    /// Place a drawn piece at the spawn position: row 0, centered by columns.
    fn spawn(piece: Piece) -> Self {
        let col = (BOARD_COLS as i8 - piece.shape.cols() as i8) / 2;
        Self {
            shape: piece.shape,
            kind: piece.kind,
            pos: Position::new(0, col),
        }
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Option<FallingPiece>,
    next: Option<Piece>,
    factory: PieceFactory,
    score: u32,
    lines: u32,
    status: Status,
    gravity_timer_ms: u32,
}

impl Session {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            factory: PieceFactory::new(seed),
            score: 0,
            lines: 0,
            status: Status::Idle,
            gravity_timer_ms: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&FallingPiece> {
        self.active.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    /// Start (or restart) the game: wipe all state, draw pieces, run.
    ///
    /// Valid from any status; a running game is simply reset.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.gravity_timer_ms = 0;
        self.active = None;
        self.next = Some(self.factory.draw());
        self.status = Status::Running;
        self.spawn();
    }

    /// Running -> Paused. No state is reset; out-of-phase calls are no-ops.
    pub fn pause(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Paused;
        }
    }

    /// Paused -> Running.
    pub fn resume(&mut self) {
        if self.status == Status::Paused {
            self.status = Status::Running;
        }
    }

    /// Try to move the active piece one cell.
    ///
    /// A blocked downward move is a landing event and runs the
    /// lock-and-advance sequence; blocked lateral moves leave all state
    /// untouched. Anything outside Running is rejected.
    pub fn move_piece(&mut self, direction: Direction) -> MoveOutcome {
        if self.status != Status::Running {
            return MoveOutcome::Rejected;
        }
        let Some(active) = self.active else {
            return MoveOutcome::Rejected;
        };

        let candidate = match direction {
            Direction::Left => active.pos.shifted(0, -1),
            Direction::Right => active.pos.shifted(0, 1),
            Direction::Down => active.pos.shifted(1, 0),
        };

        if !self.board.collides(&active.shape, candidate) {
            self.active = Some(FallingPiece {
                pos: candidate,
                ..active
            });
            return MoveOutcome::Moved;
        }

        if direction == Direction::Down {
            self.lock_and_advance();
            return MoveOutcome::Landed;
        }

        MoveOutcome::Rejected
    }

    /// Rotate the active piece clockwise with a two-kick fallback.
    ///
    /// The rotated matrix is tried in place, then one column right, then one
    /// column left. If all three collide the rotation is rejected and the
    /// previous matrix stays (the rotated copy is discarded, nothing to undo).
    pub fn rotate(&mut self) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated();
        for kick in [0i8, 1, -1] {
            let pos = active.pos.shifted(0, kick);
            if !self.board.collides(&rotated, pos) {
                self.active = Some(FallingPiece {
                    shape: rotated,
                    pos,
                    ..active
                });
                return true;
            }
        }

        false
    }

    /// Drop the piece straight down until it lands and locks.
    ///
    /// Terminates because each iteration either advances the row or locks.
    pub fn hard_drop(&mut self) {
        while self.move_piece(Direction::Down) == MoveOutcome::Moved {}
    }

    /// Advance game time. One downward move fires per full gravity period.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.status != Status::Running {
            return;
        }

        self.gravity_timer_ms += elapsed_ms;
        while self.gravity_timer_ms >= GRAVITY_INTERVAL_MS {
            self.gravity_timer_ms -= GRAVITY_INTERVAL_MS;
            self.move_piece(Direction::Down);
            if self.status != Status::Running {
                break;
            }
        }
    }

    /// Apply a host command. Out-of-phase commands fall through as no-ops.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Move(direction) => {
                self.move_piece(direction);
            }
            Command::Rotate => {
                self.rotate();
            }
            Command::HardDrop => {
                self.hard_drop();
            }
            Command::Start => self.start(),
            Command::Pause => match self.status {
                Status::Running => self.pause(),
                Status::Paused => self.resume(),
                Status::Idle | Status::GameOver => {}
            },
        }
    }

    /// Lock the landed piece, clear rows, score, and spawn the next piece.
    fn lock_and_advance(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(&active.shape, active.pos, active.kind);

        // A piece whose anchor never entered the board means the stack has
        // reached the top.
        if active.pos.row < 0 {
            self.status = Status::GameOver;
            return;
        }

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            // The multiplier uses the cumulative count from before this batch.
            let multiplier = self.lines / MULTIPLIER_LINE_STEP + 1;
            self.score += LINE_SCORES[cleared as usize] * multiplier;
            self.lines += cleared;
        }

        self.spawn();
    }

    /// Promote the pre-drawn next piece to active and draw a new preview.
    ///
    /// If the fresh piece collides at its spawn position the board is too
    /// full to admit it: game over immediately, without waiting for a tick.
    fn spawn(&mut self) {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => self.factory.draw(),
        };
        self.next = Some(self.factory.draw());

        let falling = FallingPiece::spawn(piece);
        let blocked = self.board.collides(&falling.shape, falling.pos);
        self.active = Some(falling);

        if blocked {
            self.status = Status::GameOver;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
