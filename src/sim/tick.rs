//! Fixed-tick simulation
//!
//! Core game loop that advances the match one step at a time. Movement is
//! expressed in per-tick increments; nothing here looks at wall-clock time.

use glam::Vec2;

use super::collision::{bounce_angle, overlaps};
use super::input::InputTracker;
use super::state::{GameEvent, GameState, MatchPhase, Side};
use crate::consts::*;

/// Advance the game by one tick
///
/// Returns `true` once the match is over. A finished match is frozen: the
/// physics step is skipped and only the (idempotent) win check runs.
pub fn tick(state: &mut GameState, input: &InputTracker) -> bool {
    if check_win(state) {
        return true;
    }
    physics_step(state, input);
    // Re-check so a winning point is reported in the tick it was scored
    check_win(state)
}

/// Run one physics step. Order matters: later stages see earlier results.
pub fn physics_step(state: &mut GameState, input: &InputTracker) {
    state.time_ticks += 1;
    let bounds = state.bounds;

    // User paddle, clamped to the field. Up wins when both keys are held.
    let max_y = state.user.max_y(&bounds);
    if input.move_up && state.user.y > 0.0 {
        state.user.y = (state.user.y - PADDLE_STEP).max(0.0);
    } else if input.move_down && state.user.y < max_y {
        state.user.y = (state.user.y + PADDLE_STEP).min(max_y);
    }

    // Top and bottom walls. Overshoot is not corrected.
    let ball = &state.ball;
    if ball.pos.y - ball.radius <= 0.0 || ball.pos.y + ball.radius >= bounds.height {
        state.ball.vel.y = -state.ball.vel.y;
        state.emit(GameEvent::WallHit);
    }

    // Side walls. Right is checked first; the left check then sees the
    // ball as the right check left it (possibly already reset).
    if state.ball.pos.x + state.ball.radius >= bounds.width {
        award_point(state, Side::User);
    }
    if state.ball.pos.x - state.ball.radius <= 0.0 {
        award_point(state, Side::Ai);
    }

    let vel = state.ball.vel;
    state.ball.pos += vel;

    // AI closes a fixed fraction of the gap to the ball. Not clamped.
    let gap = state.ball.pos.y - state.ai.center_y();
    state.ai.y += gap * AI_DAMPING;

    let side = if state.ball.pos.x < bounds.width / 2.0 {
        Side::User
    } else {
        Side::Ai
    };
    let paddle = state.paddle(side);
    if overlaps(&state.ball.aabb(), &paddle.aabb()) {
        let angle = bounce_angle(state.ball.pos.y, paddle.center_y());
        let direction = match side {
            Side::User => 1.0,
            Side::Ai => -1.0,
        };

        let ball = &mut state.ball;
        ball.vel = Vec2::new(
            direction * ball.speed * angle.cos(),
            ball.speed * angle.sin(),
        );
        ball.speed += BALL_SPEED_INCREMENT;
        state.emit(GameEvent::PaddleHit);
    }
}

/// Put the ball back in the center and send it the other way
///
/// Speed returns to the start value but the velocity is only mirrored, so
/// its magnitude keeps whatever the last bounce gave it.
pub fn reset_ball(state: &mut GameState) {
    let center = state.bounds.center();
    let ball = &mut state.ball;
    ball.pos = center;
    ball.speed = BALL_START_SPEED;
    ball.vel = -ball.vel;
}

/// Evaluate the win condition, freezing the ball when a side has won
///
/// Safe to call every tick: once the match is won it only re-asserts the
/// idle ball and returns `true`.
pub fn check_win(state: &mut GameState) -> bool {
    let side = match state.phase {
        MatchPhase::Won(side) => side,
        MatchPhase::Playing => {
            if state.user.score >= WINNING_SCORE {
                Side::User
            } else if state.ai.score >= WINNING_SCORE {
                Side::Ai
            } else {
                return false;
            }
        }
    };

    let newly_won = state.phase == MatchPhase::Playing;

    reset_ball(state);
    state.ball.speed = 0.0;
    state.ball.vel = Vec2::ZERO;
    state.phase = MatchPhase::Won(side);

    if newly_won {
        log::info!(
            "Match over: {:?} wins {}-{}",
            side,
            state.paddle(side).score,
            state.paddle(side.opponent()).score
        );
        state.emit(GameEvent::MatchWon(side));
    }

    true
}

fn award_point(state: &mut GameState, side: Side) {
    state.paddle_mut(side).score += 1;
    state.last_point = Some(side);
    reset_ball(state);
    state.emit(GameEvent::Score(side));
    log::debug!(
        "{:?} scored ({} - {})",
        side,
        state.user.score,
        state.ai.score
    );
}
