//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{FallingPiece, Session};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Status, BOARD_COLS, BOARD_ROWS};

/// Side length of the next-piece preview box, in board cells.
const PREVIEW_SIZE: u16 = 4;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view of the game session.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the session into the framebuffer, resizing it to the viewport.
    pub fn render_into(&self, fb: &mut FrameBuffer, session: &Session, viewport: Viewport) {
        fb.reset(viewport.width, viewport.height);

        let board_px_w = (BOARD_COLS as u16) * self.cell_w;
        let board_px_h = (BOARD_ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 28),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for row in 0..BOARD_ROWS as i8 {
            for col in 0..BOARD_COLS as i8 {
                if let Some(Some(kind)) = session.board().get(row, col) {
                    self.draw_board_cell(fb, start_x, start_y, row as u16, col as u16, kind);
                }
            }
        }

        // Active piece; cells above the board top are simply not drawn.
        if let Some(active) = session.active() {
            self.draw_falling_piece(fb, start_x, start_y, active);
        }

        self.draw_side_panel(fb, session, viewport, start_x, start_y, frame_w);

        match session.status() {
            Status::Idle => draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER"),
            Status::Paused => draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED"),
            Status::GameOver => {
                draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Status::Running => {}
        }
    }

    fn draw_falling_piece(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        piece: &FallingPiece,
    ) {
        for (r, c) in piece.shape.filled_cells() {
            let row = piece.pos.row + r as i8;
            let col = piece.pos.col + c as i8;
            if row >= 0 && row < BOARD_ROWS as i8 && col >= 0 && col < BOARD_COLS as i8 {
                self.draw_board_cell(fb, start_x, start_y, row as u16, col as u16, piece.kind);
            }
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: piece_color(kind),
            bg: Rgb::new(20, 20, 28),
            bold: true,
        };
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", session.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", session.lines()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, session, panel_x, y);
    }

    /// Next-piece preview: the shape centered inside a 4x4 box.
    fn draw_preview(&self, fb: &mut FrameBuffer, session: &Session, x: u16, y: u16) {
        let Some(piece) = session.next_piece() else {
            return;
        };

        let style = CellStyle {
            fg: piece_color(piece.kind),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        let offset_r = (PREVIEW_SIZE - piece.shape.rows() as u16) / 2;
        let offset_c = (PREVIEW_SIZE - piece.shape.cols() as u16) / 2;
        for (r, c) in piece.shape.filled_cells() {
            let px = x + (offset_c + c as u16) * self.cell_w;
            let py = y + (offset_r + r as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16, text: &str) {
    let mid_y = y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
    };
    fb.put_str(tx, mid_y, text, style);
}

/// Color bound one-to-one with the piece kind.
fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0x00, 0xFF, 0xFF),
        PieceKind::O => Rgb::new(0xFF, 0xFF, 0x00),
        PieceKind::T => Rgb::new(0x80, 0x00, 0x80),
        PieceKind::L => Rgb::new(0xFF, 0xA5, 0x00),
        PieceKind::J => Rgb::new(0x00, 0x00, 0xFF),
        PieceKind::S => Rgb::new(0x00, 0x80, 0x00),
        PieceKind::Z => Rgb::new(0xFF, 0x00, 0x00),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;

    fn find_char(fb: &FrameBuffer, needle: char) -> bool {
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some(needle) {
                    return true;
                }
            }
        }
        false
    }

    fn find_text(fb: &FrameBuffer, needle: &str) -> bool {
        let first = needle.chars().next().unwrap();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) != Some(first) {
                    continue;
                }
                let mut ok = true;
                for (i, ch) in needle.chars().enumerate() {
                    if fb.get(x + i as u16, y).map(|c| c.ch) != Some(ch) {
                        ok = false;
                        break;
                    }
                }
                if ok {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn idle_session_shows_start_hint() {
        let session = Session::new(1);
        let view = GameView::default();
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(&mut fb, &session, Viewport::new(80, 30));

        assert!(find_text(&fb, "PRESS ENTER"));
        assert!(find_char(&fb, '┌'));
    }

    #[test]
    fn running_session_draws_piece_and_panel() {
        let mut session = Session::new(1);
        session.start();

        let view = GameView::default();
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(&mut fb, &session, Viewport::new(80, 30));

        assert!(find_char(&fb, '█'));
        assert!(find_text(&fb, "SCORE"));
        assert!(find_text(&fb, "NEXT"));
        assert!(!find_text(&fb, "PAUSED"));
    }

    #[test]
    fn paused_session_shows_overlay() {
        let mut session = Session::new(1);
        session.start();
        session.pause();

        let view = GameView::default();
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(&mut fb, &session, Viewport::new(80, 30));

        assert!(find_text(&fb, "PAUSED"));
    }
}
