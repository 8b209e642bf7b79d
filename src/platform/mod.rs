//! Platform abstraction layer
//!
//! The game core talks to the board only through these traits:
//! - Display pixel writes (window + row-major color stream)
//! - Switch reads
//! - Score text drawing
//! - Low-power idle until the next timer interrupt
//! - Masking the timer interrupt around shared-state updates
//!
//! `host` provides in-process implementations for the headless driver and
//! tests.

pub mod host;

pub use host::{HostInterrupts, HostPower, RecordingText, ScriptedSwitches};

use crate::Color;
use crate::sim::{Region, SwitchMask, Vec2};

/// Write-only pixel stream into a rectangular window of the display
pub trait PixelSink {
    /// Select the window that following writes fill, row by row
    fn set_window(&mut self, window: Region);
    fn write_color(&mut self, color: Color);
}

/// The board's four push switches
pub trait SwitchInput {
    fn read_switches(&mut self) -> SwitchMask;
}

/// Text drawing, used for the score lines
pub trait TextRenderer {
    fn draw_text(&mut self, at: Vec2, text: &str, fg: Color, bg: Color);
}

/// Processor power control
///
/// On hardware `idle` sleeps the CPU and the timer interrupt wakes it; the
/// caller then runs the tick handler for that interrupt.
pub trait Power {
    /// Sleep until the next hardware tick. False once no more ticks will come.
    fn idle(&mut self) -> bool;
    /// Mark the CPU as running again
    fn wake(&mut self);
}

/// Interrupt masking
pub trait Interrupts {
    /// Run `f` with the timer interrupt held off
    fn without_interrupts<R>(&mut self, f: impl FnOnce() -> R) -> R;
}

/// Everything the main loop drives
#[derive(Debug)]
pub struct Hardware<D, S, T, P, I> {
    pub display: D,
    pub switches: S,
    pub text: T,
    pub power: P,
    pub interrupts: I,
}
