//! Layer Pong headless driver
//!
//! Runs the game against in-memory peripherals: a frame buffer display, a
//! seeded switch script and a paced (or unpaced) tick source.
//!
//! Usage: `layer-pong [settings.json]`

use std::process::ExitCode;

use layer_pong::Color;
use layer_pong::consts::*;
use layer_pong::platform::{Hardware, HostInterrupts, HostPower, RecordingText, ScriptedSwitches};
use layer_pong::renderer::FrameBuffer;
use layer_pong::sim::Player;
use layer_pong::{Game, Settings};

fn glyph(color: Color) -> char {
    match color {
        BALL_COLOR => 'o',
        FIELD_COLOR => '#',
        TOP_PADDLE_COLOR => 'T',
        BOTTOM_PADDLE_COLOR => 'B',
        _ => '.',
    }
}

fn main() -> ExitCode {
    let path = std::env::args().nth(1);
    let settings = match &path {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("layer-pong: {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_filter.as_str()),
    )
    .init();
    log::info!("Layer Pong (headless) starting...");
    match &path {
        Some(path) => log::info!("Using settings from {path}"),
        None => log::info!("Using default settings"),
    }
    log::info!(
        "{} Hz hardware tick, {:.1} physics ticks/s, demo seed {:#x}",
        settings.hardware_tick_hz,
        settings.logical_tick_hz(),
        settings.demo_seed
    );

    let hardware_ticks = settings.demo_ticks * u64::from(settings.tick_divisor);
    let mut hw = Hardware {
        display: FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        switches: ScriptedSwitches::new(settings.demo_seed),
        text: RecordingText::new(),
        power: HostPower::new(settings.hardware_tick_hz, settings.realtime)
            .with_tick_limit(hardware_ticks),
        interrupts: HostInterrupts::new(),
    };

    let mut game = Game::new(&settings);
    game.draw_initial(&mut hw.display, &mut hw.text);
    let stats = game.run(&mut hw, None);

    log::info!(
        "Final score: upper {} - lower {} ({} ticks, {} frames, {} idles)",
        stats.scores[Player::Upper.index()],
        stats.scores[Player::Lower.index()],
        stats.ticks,
        stats.frames,
        hw.power.idle_count()
    );
    log::debug!("Final frame:\n{}", hw.display.to_ascii(glyph));

    ExitCode::SUCCESS
}
