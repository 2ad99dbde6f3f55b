//! Classic Pong - user paddle vs. a reactive AI paddle
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (input, physics, scoring, win check)
//! - `renderer`: Frame composition and the WebGPU pipeline
//! - `audio`: Sound cues for simulation events
//! - `settings`: Presentation preferences

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (host timer cadence)
    pub const TICK_RATE: u32 = 60;
    /// Milliseconds between ticks
    pub const TICK_INTERVAL_MS: i32 = 1000 / TICK_RATE as i32;

    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 40.0;
    /// User paddle movement per tick while a key is held
    pub const PADDLE_STEP: f32 = 8.0;
    /// Fraction of the vertical gap the AI closes each tick
    pub const AI_DAMPING: f32 = 0.1;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_START_SPEED: f32 = 7.0;
    pub const BALL_START_VEL: (f32, f32) = (5.0, 5.0);
    /// Added to the ball speed on every paddle hit (unbounded)
    pub const BALL_SPEED_INCREMENT: f32 = 0.2;

    /// First side to reach this wins the match
    pub const WINNING_SCORE: u32 = 20;
}
