use crate::view::palette::PaintColor;

pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:3030";

pub const WINDOW_WIDTH: i32 = 720;
pub const WINDOW_HEIGHT: i32 = 720;

// Largest on-screen size of one grid cell; small fields get scaled up to
// this, big fields get shrunk to fit the window.
pub const CELL_PX: f32 = 24.0;
pub const CELL_GAP_PX: f32 = 1.0;

// One entry per simultaneously visible player. Entities past this count go
// unpainted until a color is reclaimed.
pub const ENTITY_PALETTE: [PaintColor; 6] = [
    PaintColor::rgb(255, 140, 90),
    PaintColor::rgb(110, 220, 255),
    PaintColor::rgb(170, 255, 130),
    PaintColor::rgb(255, 120, 200),
    PaintColor::rgb(220, 220, 255),
    PaintColor::rgb(255, 210, 120),
];

// Reserved for the apple, never handed out to players.
pub const APPLE_COLOR: PaintColor = PaintColor::rgb(220, 60, 50);
