//! GameView: maps game state into a terminal framebuffer.
//!
//! Pure (no I/O), so the view can be unit-tested by inspecting the
//! framebuffer it produces.

use crate::core::{Board, Player};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Text shown around the board: who is playing, the score line, and an
/// optional blocking banner (the game-over announcement).
#[derive(Debug, Clone, Copy)]
pub struct Hud<'a> {
    pub player_name: &'a str,
    pub score_line: &'a str,
    pub banner: Option<&'a str>,
}

/// Display color for each piece kind (the classic palette).
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0x00, 0xf0, 0xf0),
        PieceKind::J => Rgb::new(0x00, 0x00, 0xf0),
        PieceKind::L => Rgb::new(0xf0, 0xa0, 0x00),
        PieceKind::O => Rgb::new(0xf0, 0xf0, 0x00),
        PieceKind::S => Rgb::new(0x00, 0xf0, 0x00),
        PieceKind::T => Rgb::new(0xa0, 0x00, 0xf0),
        PieceKind::Z => Rgb::new(0xf0, 0x00, 0x00),
    }
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render board, active piece, and HUD into an existing framebuffer.
    pub fn render_into(
        &self,
        board: &Board,
        player: Option<&Player>,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(17, 17, 17),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if let Some(Some(kind)) = board.get(x, y) {
                    self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, kind);
                }
            }
        }

        // Active piece, clipped to the visible grid.
        if let Some(player) = player {
            for (lx, ly, kind) in player.shape.occupied() {
                let x = player.x + lx;
                let y = player.y + ly;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, kind);
                }
            }
        }

        self.draw_side_panel(fb, hud, start_x, start_y, frame_w);

        if let Some(banner) = hud.banner {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, banner);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        board: &Board,
        player: Option<&Player>,
        hud: &Hud,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, player, hud, viewport, &mut fb);
        fb
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let color = piece_color(kind);
        let style = CellStyle {
            fg: color,
            bg: color,
            bold: false,
        };
        fb.fill_rect(
            start_x + 1 + x * self.cell_w,
            start_y + 1 + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ' ',
            style,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        hud: &Hud,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x + frame_w + 2;
        let text = CellStyle::default();
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };

        fb.put_str(panel_x, start_y + 1, hud.player_name, label);
        fb.put_str(panel_x, start_y + 3, hud.score_line, text);
        fb.put_str(panel_x, start_y + 5, "←/→ move", text);
        fb.put_str(panel_x, start_y + 6, "↓ drop", text);
        fb.put_str(panel_x, start_y + 7, "↑ rotate", text);
        fb.put_str(panel_x, start_y + 8, "q quit", text);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 20, 20),
            bold: true,
        };
        let len = text.chars().count() as u16 + 2;
        let x = start_x + frame_w.saturating_sub(len) / 2;
        let y = start_y + frame_h / 2;
        fb.fill_rect(x, y.saturating_sub(1), len, 3, ' ', style);
        fb.put_str(x + 1, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn renders_hud_text_and_banner() {
        let board = Board::new();
        let hud = Hud {
            player_name: "Ada",
            score_line: "Score : 150",
            banner: Some("Game Over, Ada! Score: 150"),
        };
        let view = GameView::default();
        let fb = view.render(&board, None, &hud, Viewport::new(80, 30));

        let all: String = (0..fb.height()).map(|y| row_text(&fb, y) + "\n").collect();
        assert!(all.contains("Ada"));
        assert!(all.contains("Score : 150"));
        assert!(all.contains("Game Over, Ada! Score: 150"));
    }

    #[test]
    fn locked_cells_get_their_piece_color() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::Z));

        let hud = Hud {
            player_name: "p",
            score_line: "Score : 0",
            banner: None,
        };
        let view = GameView::default();
        let fb = view.render(&board, None, &hud, Viewport::new(80, 30));

        let z = piece_color(PieceKind::Z);
        let found = (0..fb.height()).any(|y| {
            (0..fb.width()).any(|x| fb.get(x, y).map(|c| c.style.bg) == Some(z))
        });
        assert!(found, "Z-colored cell rendered somewhere in the frame");
    }
}
