//! Theme constants for the Pentago GUI

use egui::Color32;

// Board colors - red lacquer tray with darker quadrant plates
pub const BOARD_BG: Color32 = Color32::from_rgb(150, 40, 40);
pub const QUADRANT_BG: Color32 = Color32::from_rgb(178, 52, 48);
pub const QUADRANT_BORDER: Color32 = Color32::from_rgb(110, 25, 25);
pub const HOLE: Color32 = Color32::from_rgb(120, 30, 30);

// Marble colors with better contrast
pub const BLACK_MARBLE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_MARBLE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_MARBLE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_MARBLE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const ARROW_BG: Color32 = Color32::from_rgb(60, 62, 66);
pub const ARROW_ACTIVE: Color32 = Color32::from_rgb(80, 200, 120);
pub const ARROW_TEXT: Color32 = Color32::from_rgb(240, 240, 245);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 56.0;
pub const QUADRANT_GAP: f32 = 10.0;
pub const MARBLE_RADIUS_RATIO: f32 = 0.38;
pub const HOLE_RADIUS_RATIO: f32 = 0.16;
pub const ARROW_RADIUS: f32 = 15.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
