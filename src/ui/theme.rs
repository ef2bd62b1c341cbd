//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 228);
pub const CELL_HOVER: Color32 = Color32::from_rgb(232, 222, 200);
pub const GRID_LINE: Color32 = Color32::from_rgb(120, 110, 95);

// Marks
pub const X_COLOR: Color32 = Color32::from_rgb(52, 101, 164);
pub const O_COLOR: Color32 = Color32::from_rgb(204, 64, 64);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 210, 90);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(140, 220, 140);

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_ACTIVE: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_OVER: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const MARK_FONT_RATIO: f32 = 0.6;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 3.0;

// Window
pub const WINDOW_SIZE: [f32; 2] = [860.0, 620.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [640.0, 480.0];
