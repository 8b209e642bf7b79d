//! Fence reflection, paddle bounces and miss detection
//!
//! Everything here works on `pos_next`, the position physics is building for
//! the next frame. The committed `pos` is never touched.

use super::layer::{MovingId, Scene};
use super::shape::{Region, Vec2};
use super::state::{Axis, GameEvent, GamePhase, GameState, Player};

/// Horizontal direction for a manual paddle move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleDirection {
    Left,
    Right,
}

impl PaddleDirection {
    #[inline]
    fn sign(self) -> i32 {
        match self {
            PaddleDirection::Left => -1,
            PaddleDirection::Right => 1,
        }
    }
}

/// Step every moving layer by its velocity, bouncing off the fence
///
/// An axis whose candidate box leaves the fence has its velocity negated and
/// the candidate pulled back by twice the new velocity, so the layer ends
/// the step on the legal side instead of lingering outside.
pub fn advance(scene: &mut Scene, fence: &Region, events: &mut Vec<GameEvent>) {
    let Scene { layers, moving, .. } = scene;
    for mover in moving.iter_mut() {
        let layer = &mut layers[mover.layer.0];
        let mut next = layer.pos_next + mover.velocity;
        let bounds = layer.shape.bounds(next);

        for axis in Axis::BOTH {
            let i = axis.index();
            if bounds.top_left[i] < fence.top_left[i] || bounds.bot_right[i] > fence.bot_right[i]
            {
                mover.velocity[i] = -mover.velocity[i];
                next[i] += 2 * mover.velocity[i];
                if mover.velocity[i] != 0 {
                    log::trace!("wall bounce on {:?}, velocity now {}", axis, mover.velocity);
                    events.push(GameEvent::WallBounce { axis });
                }
            }
        }

        layer.pos_next = next;
    }
}

/// Bounds the ball would have after one more step
fn ball_candidate(scene: &Scene) -> Region {
    let mover = scene.mover(scene.ball);
    let layer = scene.layer(mover.layer);
    layer.shape.bounds(layer.pos_next + mover.velocity)
}

/// Flip the ball's vertical velocity if its next step meets a paddle
///
/// Only the direction changes; unlike a wall bounce the position is left
/// alone. Returns true on a bounce.
pub fn paddle_collision(scene: &mut Scene, state: &mut GameState) -> bool {
    let ball = ball_candidate(scene);
    let top = &state.top_paddle;
    let bottom = &state.bottom_paddle;

    let hits_top = ball.top_left.y <= top.bot_right.y
        && ball.top_left.x > top.top_left.x
        && ball.top_left.x < top.bot_right.x;
    let hits_bottom = ball.bot_right.y >= bottom.top_left.y
        && ball.bot_right.x > bottom.top_left.x
        && ball.bot_right.x < bottom.bot_right.x;

    if hits_top || hits_bottom {
        let id = scene.ball;
        let mover = scene.mover_mut(id);
        mover.velocity.y = -mover.velocity.y;
        log::trace!("paddle bounce, velocity now {}", mover.velocity);
        state.events.push(GameEvent::PaddleBounce);
        true
    } else {
        false
    }
}

/// Detect a ball about to leave through the top or bottom of the fence
///
/// A top-edge miss scores for the lower player and starts the scoring pause.
/// A bottom-edge miss scores for the upper player and play simply continues.
pub fn score_check(scene: &Scene, state: &mut GameState) -> Option<Player> {
    let ball = ball_candidate(scene);

    if ball.top_left.y < state.fence.top_left.y {
        state.award(Player::Lower);
        state.phase = GamePhase::ScoringPause;
        state.events.push(GameEvent::PauseStarted);
        Some(Player::Lower)
    } else if ball.bot_right.y > state.fence.bot_right.y {
        state.award(Player::Upper);
        Some(Player::Upper)
    } else {
        None
    }
}

/// Re-serve the ball from the middle of the fence
///
/// The horizontal direction is reversed so consecutive serves alternate
/// sides; the vertical direction is kept.
pub fn reset_ball(scene: &mut Scene, state: &mut GameState) {
    let center = state.fence.center();
    let id = scene.ball;
    let (mover, layer) = scene.moving_pair(id);
    mover.velocity.x = -mover.velocity.x;
    layer.pos_next = center;
    state.events.push(GameEvent::BallReset);
}

/// Shift a paddle one step horizontally, keeping it inside the fence
///
/// The step is the fixed paddle step plus the paddle's own horizontal
/// velocity (normally zero).
pub fn move_paddle(
    scene: &mut Scene,
    paddle: MovingId,
    direction: PaddleDirection,
    fence: &Region,
    step: i32,
) {
    let (mover, layer) = scene.moving_pair(paddle);
    let mut next = layer.pos_next + mover.velocity;
    next.x += direction.sign() * (step + mover.velocity.x);

    let half_width = layer.shape.bounds(Vec2::ZERO).bot_right.x;
    let min_x = fence.top_left.x + half_width;
    let max_x = fence.bot_right.x - half_width;
    if min_x <= max_x {
        next.x = next.x.clamp(min_x, max_x);
    }

    layer.pos_next = next;
}
