//! Tick handler and main loop
//!
//! Two contexts share the game:
//! - the timer interrupt runs [`Game::on_hardware_tick`], which does physics
//!   on every `tick_divisor`-th interrupt and raises the redraw flag
//! - the main loop sleeps until that flag is up, then commits and redraws
//!
//! The tick handler only writes `pos_next`, scores and the pause state. The
//! main loop only writes `pos`/`pos_last` (inside a critical section) and the
//! paddle regions.

use crate::platform::{Hardware, Interrupts, PixelSink, Power, SwitchInput, TextRenderer};
use crate::renderer::{commit, draw_scores, render_all, render_moved};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, PauseTiming, Scene, TickDivider, TickInput, tick};

/// Counters reported when the main loop returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub frames: u64,
    pub scores: [u8; 2],
}

#[derive(Debug, Clone)]
pub struct Game {
    pub scene: Scene,
    pub state: GameState,
    divider: TickDivider,
    timing: PauseTiming,
    redraw_pending: bool,
    ticks: u64,
    frames: u64,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let mut scene = Scene::classic();
        scene.init_positions();
        let state = GameState::new(&scene);
        Self {
            scene,
            state,
            divider: TickDivider::new(settings.tick_divisor),
            timing: settings.pause_timing(),
            redraw_pending: true,
            ticks: 0,
            frames: 0,
        }
    }

    /// Logical ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Frames redrawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            ticks: self.ticks,
            frames: self.frames,
            scores: self.state.scores,
        }
    }

    /// Paint the whole screen once, before the first tick
    pub fn draw_initial<D: PixelSink, T: TextRenderer>(&self, display: &mut D, text: &mut T) {
        render_all(&self.scene, display);
        draw_scores(&self.state, text);
    }

    /// Timer interrupt body; true when a logical tick ran
    pub fn on_hardware_tick<S: SwitchInput>(&mut self, switches: &mut S) -> bool {
        if !self.divider.hardware_tick() {
            return false;
        }
        let input = TickInput::new(switches.read_switches());
        self.on_tick(&input);
        true
    }

    /// One logical physics step, then request a redraw
    pub fn on_tick(&mut self, input: &TickInput) {
        if input.switches != Default::default() {
            log::trace!("switches {}", input.switches.describe());
        }
        tick(&mut self.scene, &mut self.state, input, &self.timing);
        self.ticks += 1;
        self.redraw_pending = true;
    }

    /// Commit pending positions and repaint what moved
    pub fn redraw<D, T, I>(&mut self, display: &mut D, text: &mut T, interrupts: &mut I)
    where
        D: PixelSink,
        T: TextRenderer,
        I: Interrupts,
    {
        self.redraw_pending = false;
        commit(&mut self.scene, interrupts);
        render_moved(&self.scene, display);
        self.state.update_paddle_regions(&self.scene);
        draw_scores(&self.state, text);
        self.frames += 1;
        self.log_events();
    }

    fn log_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Scored { player, score } => {
                    log::info!("{:?} player scores ({})", player, score);
                }
                GameEvent::PauseStarted => log::debug!("scoring pause"),
                GameEvent::BallReset => log::debug!("ball re-served from center"),
                GameEvent::WallBounce { .. } | GameEvent::PaddleBounce => {}
            }
        }
    }

    /// Main loop: sleep until a redraw is due, redraw, repeat
    ///
    /// Returns when the power source stops delivering ticks or after
    /// `frame_limit` frames.
    pub fn run<D, S, T, P, I>(
        &mut self,
        hw: &mut Hardware<D, S, T, P, I>,
        frame_limit: Option<u64>,
    ) -> RunStats
    where
        D: PixelSink,
        S: SwitchInput,
        T: TextRenderer,
        P: Power,
        I: Interrupts,
    {
        loop {
            while !self.redraw_pending {
                if !hw.power.idle() {
                    log::info!(
                        "tick source stopped after {} ticks, {} frames",
                        self.ticks,
                        self.frames
                    );
                    return self.stats();
                }
                hw.power.wake();
                self.on_hardware_tick(&mut hw.switches);
            }
            hw.power.wake();
            self.redraw(&mut hw.display, &mut hw.text, &mut hw.interrupts);

            if frame_limit.is_some_and(|limit| self.frames >= limit) {
                return self.stats();
            }
        }
    }
}
