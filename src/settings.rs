//! Runtime settings
//!
//! Timing and host-harness knobs only. Game rules are fixed in
//! [`crate::consts`] and cannot be configured.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::PauseTiming;

/// Settings, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Hardware timer interrupts per logical physics tick
    pub tick_divisor: u16,
    /// Hardware timer rate, used to pace the host driver
    pub hardware_tick_hz: u32,
    /// Busy-wait spins before the ball is re-served after a point
    pub pause_reset_at: u32,
    /// Total busy-wait spins of a scoring pause
    pub pause_spins: u32,

    // === Host driver ===
    /// Sleep between hardware ticks instead of running flat out
    pub realtime: bool,
    /// Seed for the scripted demo input
    pub demo_seed: u64,
    /// Logical ticks to run before exiting
    pub demo_ticks: u64,
    /// `env_logger` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        let timing = PauseTiming::default();
        Self {
            tick_divisor: 15,
            hardware_tick_hz: 250,
            pause_reset_at: timing.reset_at,
            pause_spins: timing.total,

            realtime: false,
            demo_seed: 0x5eed,
            demo_ticks: 900,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_divisor == 0 {
            return Err(Error::Invalid {
                field: "tick_divisor",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.hardware_tick_hz == 0 {
            return Err(Error::Invalid {
                field: "hardware_tick_hz",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.pause_reset_at > self.pause_spins {
            return Err(Error::Invalid {
                field: "pause_reset_at",
                reason: format!("{} exceeds pause_spins ({})", self.pause_reset_at, self.pause_spins),
            });
        }
        Ok(())
    }

    pub fn pause_timing(&self) -> PauseTiming {
        PauseTiming {
            reset_at: self.pause_reset_at,
            total: self.pause_spins,
        }
    }

    /// Physics ticks per second
    pub fn logical_tick_hz(&self) -> f32 {
        self.hardware_tick_hz as f32 / self.tick_divisor as f32
    }
}
