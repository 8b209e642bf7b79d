//! Layer compositor
//!
//! Each pixel takes the color of the first layer, in scene order, whose
//! shape covers it, or the background when none does. Only the boxes of
//! layers that moved are repainted each frame.

use crate::Color;
use crate::consts::*;
use crate::platform::{Interrupts, PixelSink, TextRenderer};
use crate::sim::{GameState, Layer, Player, Region, Scene, Vec2};

/// The whole display
pub const SCREEN: Region = Region {
    top_left: Vec2::ZERO,
    bot_right: Vec2::new(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1),
};

/// Promote every moving layer's pending position to its visible one
///
/// Runs with the timer interrupt masked so the tick handler can never see,
/// or write into, a half-committed frame.
pub fn commit<I: Interrupts>(scene: &mut Scene, interrupts: &mut I) {
    interrupts.without_interrupts(|| {
        let Scene { layers, moving, .. } = scene;
        for mover in moving.iter() {
            layers[mover.layer.0].commit();
        }
    });
}

/// Color of one pixel given the committed layer positions
pub fn resolve_color(layers: &[Layer], pixel: Vec2, background: Color) -> Color {
    layers
        .iter()
        .find(|layer| layer.covers(pixel))
        .map_or(background, |layer| layer.color)
}

/// Repaint one region, clipped to the screen
pub fn render_region<S: PixelSink>(layers: &[Layer], region: Region, sink: &mut S) {
    let Some(window) = region.intersect(&SCREEN) else {
        return;
    };
    sink.set_window(window);
    for pixel in window.pixels() {
        sink.write_color(resolve_color(layers, pixel, BACKGROUND));
    }
}

/// Repaint the current box of every moving layer
pub fn render_moved<S: PixelSink>(scene: &Scene, sink: &mut S) {
    for mover in &scene.moving {
        let bounds = scene.layer(mover.layer).bounds();
        render_region(&scene.layers, bounds, sink);
    }
}

/// Draw the full screen: background, then every layer's box
pub fn render_all<S: PixelSink>(scene: &Scene, sink: &mut S) {
    sink.set_window(SCREEN);
    for _ in 0..SCREEN.area() {
        sink.write_color(BACKGROUND);
    }
    for layer in &scene.layers {
        render_region(&scene.layers, layer.bounds(), sink);
    }
}

/// Text shown for a score
pub fn score_text(score: u8) -> String {
    score.to_string()
}

/// Draw both score lines
pub fn draw_scores<T: TextRenderer>(state: &GameState, text: &mut T) {
    for (player, y) in [(Player::Upper, UPPER_SCORE_Y), (Player::Lower, LOWER_SCORE_Y)] {
        text.draw_text(Vec2::new(SCORE_LABEL_X, y), SCORE_LABEL, SCORE_FG, SCORE_BG);
        text.draw_text(
            Vec2::new(SCORE_DIGIT_X, y),
            &score_text(state.score(player)),
            SCORE_FG,
            SCORE_BG,
        );
    }
}
