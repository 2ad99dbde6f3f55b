//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Which player a paddle, point or win belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Keyboard-controlled paddle on the left
    User,
    /// Ball-tracking paddle on the right
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::User => Side::Ai,
            Side::Ai => Side::User,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Playing,
    /// Terminal: a side reached the winning score, physics is frozen
    Won(Side),
}

/// Fire-and-forget notifications emitted during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit,
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// A side scored a point
    Score(Side),
    /// A side reached the winning score
    MatchWon(Side),
}

/// Play-field extents, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed after construction)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// Paddle for `side`, vertically centered in `bounds`
    pub fn new(side: Side, bounds: &Bounds) -> Self {
        let x = match side {
            Side::User => PADDLE_MARGIN,
            Side::Ai => bounds.width - (PADDLE_WIDTH + PADDLE_MARGIN),
        };
        Self {
            x,
            y: bounds.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            score: 0,
        }
    }

    /// Vertical center of the paddle
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Lowest allowed `y` for a clamped paddle
    pub fn max_y(&self, bounds: &Bounds) -> f32 {
        bounds.height - self.height
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            left: self.x,
            top: self.y,
            right: self.x + self.width,
            bottom: self.y + self.height,
        }
    }
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed used for the next paddle bounce; grows with every hit
    pub speed: f32,
}

impl Ball {
    pub fn new(bounds: &Bounds) -> Self {
        Self {
            pos: bounds.center(),
            vel: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
        }
    }

    /// Bounding square of the ball
    pub fn aabb(&self) -> Aabb {
        Aabb {
            left: self.pos.x - self.radius,
            top: self.pos.y - self.radius,
            right: self.pos.x + self.radius,
            bottom: self.pos.y + self.radius,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub bounds: Bounds,
    /// Left, keyboard-controlled paddle
    pub user: Paddle,
    /// Right, ball-tracking paddle
    pub ai: Paddle,
    pub ball: Ball,
    /// Side that scored most recently
    pub last_point: Option<Side>,
    pub phase: MatchPhase,
    /// Simulation tick counter (physics steps actually run)
    pub time_ticks: u64,
    /// Events raised since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a new game on the default field
    pub fn new() -> Self {
        Self::with_bounds(Bounds::default())
    }

    /// Create a new game on a custom field
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            user: Paddle::new(Side::User, &bounds),
            ai: Paddle::new(Side::Ai, &bounds),
            ball: Ball::new(&bounds),
            last_point: None,
            phase: MatchPhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::User => &self.user,
            Side::Ai => &self.ai,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::User => &mut self.user,
            Side::Ai => &mut self.ai,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Won(side) => Some(side),
            MatchPhase::Playing => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn user_point(&self) -> bool {
        self.last_point == Some(Side::User)
    }

    pub fn ai_point(&self) -> bool {
        self.last_point == Some(Side::Ai)
    }

    pub fn user_is_winner(&self) -> bool {
        self.winner() == Some(Side::User)
    }

    pub fn ai_is_winner(&self) -> bool {
        self.winner() == Some(Side::Ai)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();
        assert_eq!(state.user.x, 40.0);
        assert_eq!(state.ai.x, 550.0);
        assert_eq!(state.user.y, 162.5);
        assert_eq!(state.user.center_y(), 200.0);
        assert_eq!(state.ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(state.ball.speed, 7.0);
        assert_eq!(state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_flag_views_are_exclusive() {
        let mut state = GameState::new();
        assert!(!state.user_point() && !state.ai_point());
        assert!(!state.user_is_winner() && !state.ai_is_winner());

        state.last_point = Some(Side::Ai);
        assert!(state.ai_point() && !state.user_point());

        state.phase = MatchPhase::Won(Side::User);
        assert!(state.user_is_winner() && !state.ai_is_winner());
        assert!(state.is_over());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new();
        state.emit(GameEvent::WallHit);
        state.emit(GameEvent::Score(Side::User));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::WallHit, GameEvent::Score(Side::User)]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_snapshot_skips_event_queue() {
        let mut state = GameState::new();
        state.emit(GameEvent::PaddleHit);
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("events"));
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.ball.pos, state.ball.pos);
    }
}
