//! In-process stand-ins for the board peripherals

use std::collections::HashMap;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Interrupts, Power, SwitchInput, TextRenderer};
use crate::Color;
use crate::sim::{SwitchMask, Vec2};

/// Delivers hardware ticks from a (possibly paced) counter
///
/// Also tracks whether the CPU is awake, the way the board's green LED does.
#[derive(Debug, Clone)]
pub struct HostPower {
    period: Option<Duration>,
    remaining: Option<u64>,
    awake: bool,
    idle_count: u64,
}

impl HostPower {
    pub fn new(hardware_tick_hz: u32, realtime: bool) -> Self {
        let period = realtime.then(|| Duration::from_secs(1) / hardware_tick_hz.max(1));
        Self {
            period,
            remaining: None,
            awake: true,
            idle_count: 0,
        }
    }

    /// Stop delivering ticks after `ticks` more hardware ticks
    pub fn with_tick_limit(mut self, ticks: u64) -> Self {
        self.remaining = Some(ticks);
        self
    }

    pub fn is_awake(&self) -> bool {
        self.awake
    }

    /// Number of times the CPU was put to sleep
    pub fn idle_count(&self) -> u64 {
        self.idle_count
    }
}

impl Power for HostPower {
    fn idle(&mut self) -> bool {
        self.awake = false;
        self.idle_count += 1;
        match self.remaining {
            Some(0) => return false,
            Some(n) => self.remaining = Some(n - 1),
            None => {}
        }
        if let Some(period) = self.period {
            std::thread::sleep(period);
        }
        true
    }

    fn wake(&mut self) {
        self.awake = true;
    }
}

/// Interrupt mask flag with a count of critical sections entered
#[derive(Debug, Clone, Default)]
pub struct HostInterrupts {
    masked: bool,
    critical_sections: u64,
}

impl HostInterrupts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn critical_sections(&self) -> u64 {
        self.critical_sections
    }
}

impl Interrupts for HostInterrupts {
    fn without_interrupts<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let was_masked = self.masked;
        self.masked = true;
        self.critical_sections += 1;
        let result = f();
        self.masked = was_masked;
        result
    }
}

/// A fixed switch state, handy for tests
impl SwitchInput for SwitchMask {
    fn read_switches(&mut self) -> SwitchMask {
        *self
    }
}

/// Seeded pseudo-random switch presses for the headless demo
///
/// Holds a random switch (or none) for a random number of reads, then picks
/// again. The same seed always produces the same presses.
#[derive(Debug, Clone)]
pub struct ScriptedSwitches {
    rng: Pcg32,
    held: SwitchMask,
    hold_reads: u32,
}

impl ScriptedSwitches {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: SwitchMask::RELEASED,
            hold_reads: 0,
        }
    }
}

impl SwitchInput for ScriptedSwitches {
    fn read_switches(&mut self) -> SwitchMask {
        if self.hold_reads == 0 {
            self.held = if self.rng.random_bool(0.3) {
                SwitchMask::RELEASED
            } else {
                SwitchMask::pressed(&[self.rng.random_range(0..SwitchMask::COUNT)])
            };
            self.hold_reads = self.rng.random_range(1..=8);
        }
        self.hold_reads -= 1;
        self.held
    }
}

/// Keeps the latest string drawn at each position
#[derive(Debug, Clone, Default)]
pub struct RecordingText {
    latest: HashMap<(i32, i32), String>,
    draw_calls: usize,
}

impl RecordingText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_at(&self, at: Vec2) -> Option<&str> {
        self.latest.get(&(at.x, at.y)).map(String::as_str)
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }
}

impl TextRenderer for RecordingText {
    fn draw_text(&mut self, at: Vec2, text: &str, _fg: Color, _bg: Color) {
        self.latest.insert((at.x, at.y), text.to_string());
        self.draw_calls += 1;
    }
}
