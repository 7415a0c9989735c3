//! Board rendering for the Pentago GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{to_quadrant, Board, Marble, Move, Rotation, QUADRANTS, QUADRANT_CELLS};

use super::theme::*;

/// Input produced by a click on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Click on a cell
    Place { quadrant: usize, cell: usize },
    /// Click on a rotation arrow
    Rotate { quadrant: usize, rotation: Rotation },
}

/// What the view needs to know about the game besides the board
pub struct BoardViewState<'a> {
    pub board: &'a Board,
    pub current_turn: Marble,
    /// Placement waiting for its rotation
    pub pending: Option<(usize, usize)>,
    pub last_move: Option<Move>,
    pub winning_line: Option<[(u8, u8); 5]>,
    /// Whether clicks are accepted
    pub interactive: bool,
}

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
    /// Render the board and return the clicked action if any
    pub fn show(&mut self, ui: &mut egui::Ui, view: &BoardViewState<'_>) -> Option<BoardAction> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN - QUADRANT_GAP) / 6.0;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        // Draw tray and quadrant plates
        painter.rect_filled(self.quadrants_bounds().expand(8.0), CornerRadius::same(10), BOARD_BG);
        for quadrant in 0..QUADRANTS {
            self.draw_quadrant(&painter, view.board, quadrant);
        }

        if let Some((quadrant, cell)) = view.pending {
            self.draw_pending(&painter, quadrant, cell, view.current_turn);
        }

        if let Some(mv) = view.last_move {
            self.draw_last_move(&painter, mv);
        }

        if let Some(line) = view.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !view.interactive {
            return None;
        }

        // Arrows are live only once a placement is staged
        let arrows_active = view.pending.is_some();
        let hover = response.hover_pos();
        for quadrant in 0..QUADRANTS {
            for rotation in Rotation::ALL {
                let hovered = arrows_active
                    && hover.is_some_and(|p| p.distance(self.arrow_center(quadrant, rotation)) <= ARROW_RADIUS);
                self.draw_arrow(&painter, quadrant, rotation, arrows_active, hovered);
            }
        }

        let pointer = hover?;

        if arrows_active {
            if let Some((quadrant, rotation)) = self.screen_to_arrow(pointer) {
                if response.clicked() {
                    return Some(BoardAction::Rotate { quadrant, rotation });
                }
                return None;
            }
        }

        let (quadrant, cell) = self.screen_to_cell(pointer)?;
        let is_valid = view.board.get(quadrant, cell) == Marble::Empty && view.pending.is_none();
        if view.pending != Some((quadrant, cell)) {
            let hover_color = if is_valid { hover_valid() } else { hover_invalid() };
            self.draw_hover_preview(&painter, quadrant, cell, view.current_turn, is_valid, hover_color);
        }

        if response.clicked() {
            return Some(BoardAction::Place { quadrant, cell });
        }
        None
    }

    /// Bounding box of the four quadrant plates
    fn quadrants_bounds(&self) -> Rect {
        Rect::from_min_max(self.quadrant_rect(0).min, self.quadrant_rect(3).max)
    }

    /// Screen rectangle of one quadrant
    fn quadrant_rect(&self, quadrant: usize) -> Rect {
        let span = 3.0 * self.cell_size + QUADRANT_GAP;
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + (quadrant % 2) as f32 * span,
                BOARD_MARGIN + (quadrant / 2) as f32 * span,
            );
        Rect::from_min_size(min, Vec2::splat(3.0 * self.cell_size))
    }

    /// Convert (quadrant, cell) to screen coordinates of the cell center
    pub fn cell_center(&self, quadrant: usize, cell: usize) -> Pos2 {
        let rect = self.quadrant_rect(quadrant);
        rect.min
            + Vec2::new(
                (cell % 3) as f32 * self.cell_size + self.cell_size * 0.5,
                (cell / 3) as f32 * self.cell_size + self.cell_size * 0.5,
            )
    }

    /// Convert screen coordinates to (quadrant, cell)
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<(usize, usize)> {
        (0..QUADRANTS).find_map(|quadrant| {
            let rect = self.quadrant_rect(quadrant);
            if !rect.contains(screen_pos) {
                return None;
            }
            let col = (((screen_pos.x - rect.min.x) / self.cell_size) as usize).min(2);
            let row = (((screen_pos.y - rect.min.y) / self.cell_size) as usize).min(2);
            Some((quadrant, row * 3 + col))
        })
    }

    /// Arrow position: clockwise on the quadrant's outer horizontal edge,
    /// counter-clockwise on its outer vertical edge.
    fn arrow_center(&self, quadrant: usize, rotation: Rotation) -> Pos2 {
        let rect = self.quadrant_rect(quadrant);
        let top = quadrant < 2;
        let left = quadrant % 2 == 0;
        let corner = Pos2::new(
            if left { rect.left() } else { rect.right() },
            if top { rect.top() } else { rect.bottom() },
        );
        let inward = self.cell_size * 0.5;
        let outward = BOARD_MARGIN * 0.5;

        match rotation {
            Rotation::Clockwise => Pos2::new(
                corner.x + if left { inward } else { -inward },
                corner.y + if top { -outward } else { outward },
            ),
            Rotation::CounterClockwise => Pos2::new(
                corner.x + if left { -outward } else { outward },
                corner.y + if top { inward } else { -inward },
            ),
        }
    }

    fn screen_to_arrow(&self, screen_pos: Pos2) -> Option<(usize, Rotation)> {
        (0..QUADRANTS).find_map(|quadrant| {
            Rotation::ALL
                .into_iter()
                .find(|&rotation| screen_pos.distance(self.arrow_center(quadrant, rotation)) <= ARROW_RADIUS)
                .map(|rotation| (quadrant, rotation))
        })
    }

    /// Draw one quadrant plate with its holes and marbles
    fn draw_quadrant(&self, painter: &Painter, board: &Board, quadrant: usize) {
        let rect = self.quadrant_rect(quadrant);
        painter.rect_filled(rect, CornerRadius::same(8), QUADRANT_BG);
        painter.rect_stroke(rect, CornerRadius::same(8), Stroke::new(2.0, QUADRANT_BORDER), egui::StrokeKind::Inside);

        for cell in 0..QUADRANT_CELLS {
            let center = self.cell_center(quadrant, cell);
            match board.get(quadrant, cell) {
                Marble::Empty => {
                    painter.circle_filled(center, self.cell_size * HOLE_RADIUS_RATIO, HOLE);
                }
                marble => self.draw_marble(painter, center, marble),
            }
        }
    }

    /// Draw a single marble with visual polish
    fn draw_marble(&self, painter: &Painter, center: Pos2, marble: Marble) {
        let radius = self.cell_size * MARBLE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match marble {
            Marble::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_MARBLE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_MARBLE_HIGHLIGHT);
            }
            Marble::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_MARBLE);

                // Inner shadow for depth
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_MARBLE_SHADOW));
            }
            Marble::Empty => {}
        }
    }

    /// Staged placement, drawn translucent until the rotation is chosen
    fn draw_pending(&self, painter: &Painter, quadrant: usize, cell: usize, turn: Marble) {
        let center = self.cell_center(quadrant, cell);
        let radius = self.cell_size * MARBLE_RADIUS_RATIO;
        let color = match turn {
            Marble::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 170),
            Marble::White => Color32::from_rgba_unmultiplied(240, 240, 240, 170),
            Marble::Empty => return,
        };
        painter.circle_filled(center, radius, color);
        painter.circle_stroke(center, radius + 3.0, Stroke::new(2.0, ARROW_ACTIVE));
    }

    /// Mark the rotated quadrant of the last move
    fn draw_last_move(&self, painter: &Painter, mv: Move) {
        let rect = self.quadrant_rect(mv.rotate_quadrant as usize);
        painter.rect_stroke(rect.expand(3.0), CornerRadius::same(9), Stroke::new(2.0, LAST_MOVE_MARKER), egui::StrokeKind::Outside);

        let arrow = self.arrow_center(mv.rotate_quadrant as usize, mv.rotation);
        painter.circle_filled(arrow, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[(u8, u8); 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        let centers: Vec<Pos2> = line
            .iter()
            .map(|&(row, col)| {
                let (quadrant, cell) = to_quadrant(row as usize, col as usize);
                self.cell_center(quadrant, cell)
            })
            .collect();

        for pair in centers.windows(2) {
            painter.line_segment([pair[0], pair[1]], stroke);
        }

        // Draw circles around winning marbles
        let radius = self.cell_size * MARBLE_RADIUS_RATIO + 3.0;
        for center in centers {
            painter.circle_stroke(center, radius, stroke);
        }
    }

    fn draw_arrow(&self, painter: &Painter, quadrant: usize, rotation: Rotation, active: bool, hovered: bool) {
        let center = self.arrow_center(quadrant, rotation);
        let fill = match (active, hovered) {
            (true, true) => ARROW_ACTIVE,
            (true, false) => ARROW_BG,
            (false, _) => ARROW_BG.gamma_multiply(0.4),
        };
        painter.circle_filled(center, ARROW_RADIUS, fill);

        let symbol = match rotation {
            Rotation::Clockwise => "↻",
            Rotation::CounterClockwise => "↺",
        };
        let text_color = if active { ARROW_TEXT } else { TEXT_MUTED };
        painter.text(center, egui::Align2::CENTER_CENTER, symbol, egui::FontId::proportional(18.0), text_color);
    }

    /// Draw hover preview
    fn draw_hover_preview(
        &self,
        painter: &Painter,
        quadrant: usize,
        cell: usize,
        turn: Marble,
        is_valid: bool,
        hover_color: Color32,
    ) {
        let center = self.cell_center(quadrant, cell);
        let radius = self.cell_size * MARBLE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Marble::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Marble::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Marble::Empty => return,
            }
        } else {
            hover_color
        };

        painter.circle_filled(center, radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at_origin() -> BoardView {
        BoardView {
            cell_size: 60.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(500.0)),
        }
    }

    #[test]
    fn test_cell_center_round_trip() {
        let view = view_at_origin();
        for quadrant in 0..QUADRANTS {
            for cell in 0..QUADRANT_CELLS {
                let center = view.cell_center(quadrant, cell);
                assert_eq!(view.screen_to_cell(center), Some((quadrant, cell)));
            }
        }
    }

    #[test]
    fn test_gap_and_margin_hit_nothing() {
        let view = view_at_origin();
        assert_eq!(view.screen_to_cell(Pos2::new(5.0, 5.0)), None);

        // Middle of the gap between quadrants 0 and 1
        let gap_x = BOARD_MARGIN + 3.0 * view.cell_size + QUADRANT_GAP * 0.5;
        assert_eq!(view.screen_to_cell(Pos2::new(gap_x, BOARD_MARGIN + 10.0)), None);
    }

    #[test]
    fn test_arrows_sit_outside_quadrants() {
        let view = view_at_origin();
        for quadrant in 0..QUADRANTS {
            for rotation in Rotation::ALL {
                let center = view.arrow_center(quadrant, rotation);
                assert_eq!(view.screen_to_cell(center), None);
                assert_eq!(view.screen_to_arrow(center), Some((quadrant, rotation)));
            }
        }
    }
}
