//! Layer Pong - A two-paddle ball game for a small bitmap display
//!
//! Core modules:
//! - `sim`: Deterministic game core (shapes, layers, physics, scoring)
//! - `renderer`: Layer compositor and in-memory frame buffer
//! - `platform`: Narrow interfaces to the display, switches, power and interrupts
//! - `game`: Tick handler and cooperative main loop
//! - `settings`: Timing and host-harness settings

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::Game;
pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// A 16-bit RGB565 display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const BLUE: Color = Color(0x001F);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const ORANGE: Color = Color(0xFD20);
    pub const VIOLET: Color = Color(0x901A);
}

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    use crate::Color;

    /// Display dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 160;

    /// Background color for pixels no layer claims
    pub const BACKGROUND: Color = Color::BLUE;

    /// Playing field outline, 10px in from every screen edge
    pub const FIELD_CENTER: IVec2 = IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);
    pub const FIELD_HALF_SIZE: IVec2 = IVec2::new(SCREEN_WIDTH / 2 - 10, SCREEN_HEIGHT / 2 - 10);
    /// Width of the hollow band drawn by a rectangle outline
    pub const OUTLINE_THICKNESS: i32 = 1;

    /// Paddles share one 30x10 rectangle
    pub const PADDLE_HALF_SIZE: IVec2 = IVec2::new(15, 5);
    pub const TOP_PADDLE_START: IVec2 = IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 8 - 5);
    pub const BOTTOM_PADDLE_START: IVec2 = IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT - 16);
    /// Pixels a paddle moves per tick while its switch is held
    pub const PADDLE_STEP: i32 = 2;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 4;
    pub const BALL_START_VELOCITY: IVec2 = IVec2::new(2, 1);

    /// Layer colors
    pub const BALL_COLOR: Color = Color::ORANGE;
    pub const FIELD_COLOR: Color = Color::BLACK;
    pub const TOP_PADDLE_COLOR: Color = Color::VIOLET;
    pub const BOTTOM_PADDLE_COLOR: Color = Color::RED;

    /// Score text placement (5x7 font)
    pub const SCORE_LABEL: &str = "score: ";
    pub const SCORE_LABEL_X: i32 = 5;
    pub const SCORE_DIGIT_X: i32 = 45;
    pub const UPPER_SCORE_Y: i32 = 0;
    pub const LOWER_SCORE_Y: i32 = 150;
    pub const SCORE_FG: Color = Color::GREEN;
    pub const SCORE_BG: Color = Color::BLACK;
}
