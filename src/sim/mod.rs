//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Integer positions and velocities only
//! - Fixed tick, no wall-clock time
//! - Stable iteration order (layer lists never change shape)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layer;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{
    PaddleDirection, advance, move_paddle, paddle_collision, reset_ball, score_check,
};
pub use layer::{Layer, LayerId, MovingId, MovingLayer, Scene};
pub use shape::{Region, Shape, Vec2};
pub use state::{Axis, GameEvent, GamePhase, GameState, Player};
pub use tick::{PauseTiming, SwitchMask, TickDivider, TickInput, tick};
