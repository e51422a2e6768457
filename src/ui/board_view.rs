//! Board rendering for the dots and boxes GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::board::{Board, Move, Player};

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked line if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        last_move: Option<Move>,
        suggested_move: Option<Move>,
        interactive: bool,
    ) -> Option<Move> {
        let available_size = ui.available_size();

        // Fit the larger box dimension into the available square
        let board_size = available_size.x.min(available_size.y) - 20.0;
        let cells = board.box_rows().max(board.box_cols()) as f32;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / cells;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_boxes(&painter, board);
        self.draw_lines(&painter, board);
        self.draw_coordinates(&painter, board);

        if let Some(mv) = suggested_move {
            self.draw_line(&painter, mv, Stroke::new(LINE_WIDTH, hint_line()));
        }
        if let Some(mv) = last_move {
            self.draw_line(&painter, mv, Stroke::new(LINE_WIDTH, LAST_LINE));
        }

        let mut clicked = None;
        if interactive {
            if let Some(mv) = response
                .hover_pos()
                .and_then(|p| self.screen_to_line(board, p))
            {
                let accent = player_color(current_turn);
                let preview = Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 140);
                self.draw_line(&painter, mv, Stroke::new(LINE_WIDTH, preview));
                if response.clicked() {
                    clicked = Some(mv);
                }
            }
        }

        self.draw_dots(&painter, board);
        clicked
    }

    /// Fill claimed boxes with their owner's color
    fn draw_boxes(&self, painter: &Painter, board: &Board) {
        for r in 0..board.box_rows() {
            for c in 0..board.box_cols() {
                if let Some(fill) = box_fill(board.owner(r, c)) {
                    let rect = Rect::from_two_pos(self.dot_to_screen(r, c), self.dot_to_screen(r + 1, c + 1));
                    painter.rect_filled(rect.shrink(LINE_WIDTH), CornerRadius::same(2), fill);
                }
            }
        }
    }

    /// Faint guides for open lines, solid strokes for drawn ones
    fn draw_lines(&self, painter: &Painter, board: &Board) {
        let ghost = Stroke::new(GHOST_LINE_WIDTH, GHOST_LINE);
        let drawn = Stroke::new(LINE_WIDTH, DRAWN_LINE);

        for mv in all_lines(board) {
            let stroke = if board.is_drawn(mv) { drawn } else { ghost };
            self.draw_line(painter, mv, stroke);
        }
    }

    fn draw_line(&self, painter: &Painter, mv: Move, stroke: Stroke) {
        let (r, c) = (mv.row as usize, mv.col as usize);
        let start = self.dot_to_screen(r, c);
        let end = if mv.is_horizontal() {
            self.dot_to_screen(r, c + 1)
        } else {
            self.dot_to_screen(r + 1, c)
        };
        painter.line_segment([start, end], stroke);
    }

    fn draw_dots(&self, painter: &Painter, board: &Board) {
        for r in 0..board.rows() {
            for c in 0..board.columns() {
                painter.circle_filled(self.dot_to_screen(r, c), DOT_RADIUS, DOT);
            }
        }
    }

    /// Column letters above, row numbers counted from the bottom on the left
    fn draw_coordinates(&self, painter: &Painter, board: &Board) {
        let font = egui::FontId::proportional(12.0);
        let half = self.cell_size * 0.5;

        for col in 0..board.box_cols() {
            let letter = (b'A' + col as u8) as char;
            let x = self.dot_to_screen(0, col).x + half;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.4);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL);
        }

        for row in 0..board.box_rows() {
            let num = board.box_rows() - row;
            let y = self.dot_to_screen(row, 0).y + half;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.4, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), LABEL);
        }
    }

    /// Nearest open line to the pointer, if close enough
    pub fn screen_to_line(&self, board: &Board, screen_pos: Pos2) -> Option<Move> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;
        if x < -PICK_TOLERANCE || y < -PICK_TOLERANCE {
            return None;
        }

        let horizontal = (x >= 0.0)
            .then(|| (Move::horizontal(y.round() as u8, x.floor() as u8), (y - y.round()).abs()));
        let vertical = (y >= 0.0)
            .then(|| (Move::vertical(y.floor() as u8, x.round() as u8), (x - x.round()).abs()));

        [horizontal, vertical]
            .into_iter()
            .flatten()
            .filter(|&(mv, dist)| dist <= PICK_TOLERANCE && board.contains(mv) && !board.is_drawn(mv))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(mv, _)| mv)
    }

    /// Screen position of the dot at intersection `(row, col)`
    pub fn dot_to_screen(&self, row: usize, col: usize) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Every line of the board, drawn or not
fn all_lines(board: &Board) -> impl Iterator<Item = Move> + '_ {
    let horizontal = (0..board.rows())
        .flat_map(move |r| (0..board.box_cols()).map(move |c| Move::horizontal(r as u8, c as u8)));
    let vertical = (0..board.box_rows())
        .flat_map(move |r| (0..board.columns()).map(move |c| Move::vertical(r as u8, c as u8)));
    horizontal.chain(vertical)
}
