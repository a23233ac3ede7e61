//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone};

use super::theme::*;

/// Star points for a board of `size`: the center plus four points a few
/// lines in from each corner.
pub fn star_points(size: usize) -> Vec<Pos> {
    let inset = if size >= 13 { 3 } else { 2 };
    if size < 2 * inset + 3 {
        return Vec::new();
    }
    #[allow(clippy::cast_possible_truncation)]
    let (near, far, mid) = (inset as u8, (size - 1 - inset) as u8, (size / 2) as u8);
    vec![
        Pos::new(near, near),
        Pos::new(near, far),
        Pos::new(mid, mid),
        Pos::new(far, near),
        Pos::new(far, far),
    ]
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Lines per side of the board being drawn
    lines: usize,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            lines: crate::DEFAULT_BOARD_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Stone,
        winning_line: Option<&[Pos]>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Fit the board to the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.lines = board.size();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (self.lines.max(2) as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(last) = board.last_move() {
            self.draw_last_move_marker(&painter, last.pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if !accepts_input {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = board.is_empty(board_pos);
        self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    fn span(&self) -> f32 {
        (self.lines as f32 - 1.0) * self.cell_size
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);

        for i in 0..self.lines {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + self.span());
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + self.span(), offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for pos in star_points(self.lines) {
            painter.circle_filled(self.board_to_screen(pos), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw 1-based row and column numbers, matching the console input
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..self.lines {
            let label = (i + 1).to_string();
            let along = BOARD_MARGIN + i as f32 * self.cell_size;

            // Columns, top and bottom
            let x = self.board_rect.min.x + along;
            for y in [self.board_rect.min.y + 12.0, self.board_rect.max.y - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            }

            // Rows, left and right
            let y = self.board_rect.min.y + along;
            for x in [self.board_rect.min.x + 14.0, self.board_rect.max.x - 14.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for mv in board.history() {
            self.draw_stone(painter, mv.pos, mv.stone);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Connect the winning stones and ring each of them
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(self.board_to_screen(pos), radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;
        let lines = self.lines as i32;

        if (0..lines).contains(&col) && (0..lines).contains(&row) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + f32::from(pos.col) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + f32::from(pos.row) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_points_by_size() {
        let points = star_points(15);
        assert_eq!(points.len(), 5);
        assert!(points.contains(&Pos::new(3, 3)));
        assert!(points.contains(&Pos::new(7, 7)));
        assert!(points.contains(&Pos::new(11, 11)));

        assert!(star_points(9).contains(&Pos::new(6, 2)));
        assert!(star_points(19).contains(&Pos::new(15, 3)));
        assert!(star_points(5).is_empty());
    }

    #[test]
    fn test_screen_round_trip() {
        let view = BoardView {
            cell_size: 20.0,
            lines: 9,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(240.0)),
        };
        let pos = Pos::new(2, 6);
        assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        assert_eq!(view.screen_to_board(Pos2::new(1.0, 1.0)), None);
    }
}
