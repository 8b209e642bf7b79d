//! Fixed-rate physics tick
//!
//! One call to [`tick`] is one logical step of the game. Order matters:
//! the paddle check sees the pre-advance candidate, so a paddle bounce wins
//! over a wall bounce on the same tick.

use serde::{Deserialize, Serialize};

use super::collision::{
    PaddleDirection, advance, move_paddle, paddle_collision, reset_ball, score_check,
};
use super::layer::{MovingId, Scene};
use super::state::{GamePhase, GameState};
use crate::consts::PADDLE_STEP;

/// Raw switch bits, active low: a cleared bit means the switch is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchMask(pub u8);

impl SwitchMask {
    /// Number of switches on the board
    pub const COUNT: u8 = 4;
    /// Nothing held
    pub const RELEASED: SwitchMask = SwitchMask(0x0F);

    /// Mask with exactly the listed switches held
    pub fn pressed(switches: &[u8]) -> Self {
        let held = switches.iter().fold(0u8, |acc, &s| acc | (1 << s));
        SwitchMask(!held & Self::RELEASED.0)
    }

    #[inline]
    pub fn is_pressed(self, switch: u8) -> bool {
        self.0 & (1 << switch) == 0
    }

    /// `"0123"` with `-` in place of each released switch
    pub fn describe(self) -> String {
        (0..Self::COUNT)
            .map(|s| {
                if self.is_pressed(s) {
                    char::from(b'0' + s)
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl Default for SwitchMask {
    fn default() -> Self {
        Self::RELEASED
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub switches: SwitchMask,
}

impl TickInput {
    pub fn new(switches: SwitchMask) -> Self {
        Self { switches }
    }

    /// Paddle moves requested by the held switches, in switch order
    ///
    /// Switches 0/1 steer the bottom paddle, 2/3 the top paddle.
    pub fn paddle_moves(&self, scene: &Scene) -> Vec<(MovingId, PaddleDirection)> {
        let bindings = [
            (scene.bottom_paddle, PaddleDirection::Left),
            (scene.bottom_paddle, PaddleDirection::Right),
            (scene.top_paddle, PaddleDirection::Left),
            (scene.top_paddle, PaddleDirection::Right),
        ];
        bindings
            .into_iter()
            .zip(0..SwitchMask::COUNT)
            .filter(|&(_, switch)| self.switches.is_pressed(switch))
            .map(|(binding, _)| binding)
            .collect()
    }
}

/// Busy-wait lengths for the scoring pause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseTiming {
    /// Spin count at which the ball is re-served
    pub reset_at: u32,
    /// Spin count at which the pause ends
    pub total: u32,
}

impl Default for PauseTiming {
    fn default() -> Self {
        Self {
            reset_at: 10_000,
            total: 30_000,
        }
    }
}

/// Turns a fast hardware tick into the slower logical tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickDivider {
    divisor: u16,
    count: u16,
}

impl TickDivider {
    pub fn new(divisor: u16) -> Self {
        Self {
            divisor: divisor.max(1),
            count: 0,
        }
    }

    /// Count one hardware tick; true when a logical tick is due
    pub fn hardware_tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.divisor {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// Stall, re-serve the ball and resume play
fn scoring_pause(scene: &mut Scene, state: &mut GameState, timing: &PauseTiming) {
    while state.wait < timing.reset_at {
        state.wait += 1;
        std::hint::spin_loop();
    }
    reset_ball(scene, state);
    while state.wait < timing.total {
        state.wait += 1;
        std::hint::spin_loop();
    }
    state.wait = 0;
    state.phase = GamePhase::Playing;
}

/// Advance the game by one logical tick
pub fn tick(scene: &mut Scene, state: &mut GameState, input: &TickInput, timing: &PauseTiming) {
    match state.phase {
        GamePhase::ScoringPause => scoring_pause(scene, state, timing),
        GamePhase::Playing => {
            paddle_collision(scene, state);
            let fence = state.fence;
            advance(scene, &fence, &mut state.events);
            score_check(scene, state);
        }
    }

    let fence = state.fence;
    for (paddle, direction) in input.paddle_moves(scene) {
        move_paddle(scene, paddle, direction, &fence, PADDLE_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIELD_CENTER;
    use crate::sim::shape::Vec2;
    use crate::sim::state::{Axis, GameEvent, Player};

    fn setup() -> (Scene, GameState) {
        let scene = Scene::classic();
        let state = GameState::new(&scene);
        (scene, state)
    }

    #[test]
    fn test_switch_mask() {
        let mask = SwitchMask(0b1110);
        assert!(mask.is_pressed(0));
        assert!(!mask.is_pressed(1));
        assert_eq!(mask.describe(), "0---");
        assert_eq!(SwitchMask::pressed(&[0]), mask);
        assert_eq!(SwitchMask::pressed(&[1, 3]).describe(), "-1-3");
        assert_eq!(SwitchMask::default().describe(), "----");
    }

    #[test]
    fn test_tick_divider() {
        let mut divider = TickDivider::new(15);
        let fired: Vec<bool> = (0..30).map(|_| divider.hardware_tick()).collect();
        assert_eq!(fired.iter().filter(|&&f| f).count(), 2);
        assert!(fired[14]);
        assert!(fired[29]);
        assert!(!fired[0]);
    }

    #[test]
    fn test_first_wall_bounce() {
        let (mut scene, mut state) = setup();
        let input = TickInput::default();
        let timing = PauseTiming::default();

        // Right edge is 68 + 2k; it would pass 118 on tick 26
        for k in 1..=25 {
            tick(&mut scene, &mut state, &input, &timing);
            assert!(state.drain_events().is_empty(), "early event on tick {k}");
        }
        assert_eq!(scene.moving_layer(scene.ball).pos_next, Vec2::new(114, 105));

        tick(&mut scene, &mut state, &input, &timing);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::WallBounce { axis: Axis::X }]
        );
        assert_eq!(scene.moving_layer(scene.ball).pos_next, Vec2::new(112, 106));
        assert_eq!(scene.mover(scene.ball).velocity, Vec2::new(-2, 1));
    }

    #[test]
    fn test_ball_stays_in_fence() {
        let (mut scene, mut state) = setup();
        let input = TickInput::default();
        let timing = PauseTiming {
            reset_at: 1,
            total: 2,
        };
        for _ in 0..2_000 {
            tick(&mut scene, &mut state, &input, &timing);
            let layer = scene.moving_layer(scene.ball);
            let bounds = layer.shape.bounds(layer.pos_next);
            assert!(bounds.top_left.y >= state.fence.top_left.y);
            assert!(bounds.bot_right.y <= state.fence.bot_right.y);
            assert!(state.fence.encloses(&bounds));
        }
    }

    #[test]
    fn test_top_miss_scores_and_resets() {
        let (mut scene, mut state) = setup();
        let timing = PauseTiming::default();
        let input = TickInput::default();
        let id = scene.ball;
        {
            let (mover, layer) = scene.moving_pair(id);
            mover.velocity = Vec2::new(0, -1);
            layer.pos_next = Vec2::new(100, 15);
        }

        tick(&mut scene, &mut state, &input, &timing);
        assert_eq!(state.score(Player::Lower), 1);
        assert_eq!(state.score(Player::Upper), 0);
        assert!(state.is_paused());

        tick(&mut scene, &mut state, &input, &timing);
        assert!(!state.is_paused());
        assert_eq!(state.wait, 0);
        assert_eq!(scene.moving_layer(id).pos_next, FIELD_CENTER);
        assert_eq!(state.score(Player::Lower), 1);

        let (_, layer) = scene.moving_pair(id);
        layer.commit();
        assert_eq!(layer.pos, FIELD_CENTER);
    }

    #[test]
    fn test_bottom_miss_does_not_pause() {
        let (mut scene, mut state) = setup();
        let id = scene.ball;
        {
            let (mover, layer) = scene.moving_pair(id);
            mover.velocity = Vec2::new(0, 1);
            layer.pos_next = Vec2::new(100, 145);
        }
        tick(&mut scene, &mut state, &TickInput::default(), &PauseTiming::default());
        assert_eq!(state.score(Player::Upper), 1);
        assert!(!state.is_paused());
    }

    #[test]
    fn test_switch_zero_moves_bottom_paddle_left() {
        let (mut scene, mut state) = setup();
        let input = TickInput::new(SwitchMask(0b1110));
        tick(&mut scene, &mut state, &input, &PauseTiming::default());
        assert_eq!(scene.moving_layer(scene.bottom_paddle).pos_next.x, 62);
        assert_eq!(scene.moving_layer(scene.top_paddle).pos_next.x, 64);
    }

    #[test]
    fn test_paddles_move_during_pause() {
        let (mut scene, mut state) = setup();
        state.phase = GamePhase::ScoringPause;
        let input = TickInput::new(SwitchMask::pressed(&[3]));
        let timing = PauseTiming {
            reset_at: 0,
            total: 0,
        };
        tick(&mut scene, &mut state, &input, &timing);
        assert_eq!(scene.moving_layer(scene.top_paddle).pos_next.x, 66);
        assert_eq!(scene.moving_layer(scene.ball).pos_next, FIELD_CENTER);
    }

    #[test]
    fn test_paddle_bounce_feeds_advance() {
        let (mut scene, mut state) = setup();
        let id = scene.ball;
        {
            let (mover, layer) = scene.moving_pair(id);
            mover.velocity = Vec2::new(1, -2);
            layer.pos_next = Vec2::new(64, 26);
        }
        tick(&mut scene, &mut state, &TickInput::default(), &PauseTiming::default());
        assert_eq!(scene.mover(id).velocity, Vec2::new(1, 2));
        assert_eq!(scene.moving_layer(id).pos_next, Vec2::new(65, 28));
        assert_eq!(state.scores, [0, 0]);
    }
}
