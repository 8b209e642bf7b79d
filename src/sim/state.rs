//! Game state shared between the tick handler and the render loop
//!
//! Single-writer rules:
//! - `scores`, `phase`, `wait`, `events`: written by the tick handler only
//! - `top_paddle`, `bottom_paddle`: written by the render loop after each commit
//! - `fence`: written once at construction

use serde::{Deserialize, Serialize};

use super::layer::Scene;
use super::shape::Region;

/// The two players, named by where their paddle sits on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Owns the paddle near the top edge
    Upper,
    /// Owns the paddle near the bottom edge
    Lower,
}

impl Player {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Upper => 0,
            Player::Lower => 1,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    #[default]
    Playing,
    /// A point was just scored; the next tick stalls and re-serves the ball
    ScoringPause,
}

/// Which axis a wall bounce flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Things that happened during a tick, drained by the main loop for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce { axis: Axis },
    PaddleBounce,
    Scored { player: Player, score: u8 },
    PauseStarted,
    BallReset,
}

/// Scores, scoring pause and collision fences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Indexed by [`Player::index`]
    pub scores: [u8; 2],
    pub phase: GamePhase,
    /// Busy-wait counter, only non-zero while a pause is stalling
    pub wait: u32,
    /// Region the ball must stay inside
    pub fence: Region,
    /// Paddle regions as of the last redraw
    pub top_paddle: Region,
    pub bottom_paddle: Region,
    /// Events since the main loop last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Derive fences from a freshly built scene
    pub fn new(scene: &Scene) -> Self {
        Self {
            scores: [0; 2],
            phase: GamePhase::Playing,
            wait: 0,
            fence: scene.field_fence(),
            top_paddle: scene.paddle_bounds(scene.top_paddle),
            bottom_paddle: scene.paddle_bounds(scene.bottom_paddle),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn score(&self, player: Player) -> u8 {
        self.scores[player.index()]
    }

    /// Award a point; saturates instead of wrapping
    pub fn award(&mut self, player: Player) -> u8 {
        let slot = &mut self.scores[player.index()];
        *slot = slot.saturating_add(1);
        let score = *slot;
        self.events.push(GameEvent::Scored { player, score });
        score
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::ScoringPause
    }

    /// Refresh paddle regions from the committed paddle layers
    pub fn update_paddle_regions(&mut self, scene: &Scene) {
        self.top_paddle = scene.paddle_bounds(scene.top_paddle);
        self.bottom_paddle = scene.paddle_bounds(scene.bottom_paddle);
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::Vec2;

    #[test]
    fn test_new_state_fences() {
        let scene = Scene::classic();
        let state = GameState::new(&scene);
        assert_eq!(state.scores, [0, 0]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.fence, scene.field_fence());
        assert_eq!(state.top_paddle.bot_right.y, 20);
        assert_eq!(state.bottom_paddle.top_left.y, 139);
    }

    #[test]
    fn test_award_saturates() {
        let scene = Scene::classic();
        let mut state = GameState::new(&scene);
        state.scores[Player::Lower.index()] = u8::MAX;
        assert_eq!(state.award(Player::Lower), u8::MAX);
        assert_eq!(state.award(Player::Upper), 1);
        assert_eq!(state.drain_events().len(), 2);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_update_paddle_regions() {
        let mut scene = Scene::classic();
        let mut state = GameState::new(&scene);
        let top = scene.mover(scene.top_paddle).layer;
        scene.layer_mut(top).pos = Vec2::new(30, 15);
        state.update_paddle_regions(&scene);
        assert_eq!(state.top_paddle.top_left, Vec2::new(15, 10));
    }
}
