//! Board rendering for the GUI

use crate::{Mark, Pos, BOARD_SIZE, WIN_LENGTH};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::display::BoardDisplay;
use super::theme::*;

/// Board view handles rendering and input for the grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area (inside the margin)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        display: &BoardDisplay,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; WIN_LENGTH]>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);

        let hovered = if accepting_input {
            response.hover_pos().and_then(|p| self.screen_to_board(p))
        } else {
            None
        };

        if let Some(pos) = hovered.filter(|&p| display.get(p) == Mark::Empty) {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::same(0), CELL_HOVER);
        }

        if let Some(line) = winning_line {
            for pos in line {
                painter.rect_filled(self.cell_rect(pos), CornerRadius::same(0), WIN_HIGHLIGHT);
            }
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, display);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the 10x10 cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = self.grid_rect.min + Vec2::new(offset, 0.0);
            painter.line_segment([start, start + Vec2::new(0.0, span)], stroke);

            // Horizontal line
            let start = self.grid_rect.min + Vec2::new(0.0, offset);
            painter.line_segment([start, start + Vec2::new(span, 0.0)], stroke);
        }
    }

    /// Draw every displayed mark
    fn draw_marks(&self, painter: &Painter, display: &BoardDisplay) {
        let font = egui::FontId::proportional(self.cell_size * MARK_FONT_RATIO);

        for pos in Pos::all() {
            let color = match display.get(pos) {
                Mark::X => X_COLOR,
                Mark::O => O_COLOR,
                Mark::Empty => continue,
            };
            painter.text(
                self.cell_rect(pos).center(),
                egui::Align2::CENTER_CENTER,
                display.get(pos).symbol(),
                font.clone(),
                color,
            );
        }
    }

    /// Small dot in the corner of the most recent move
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).right_top() + Vec2::new(-6.0, 6.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(row, col)
    }
}
