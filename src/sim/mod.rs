//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-tick increments only (no wall-clock scaling)
//! - No rendering, audio or platform dependencies
//! - Side effects leave as queued `GameEvent`s

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Aabb, bounce_angle, overlaps};
pub use input::{InputTracker, Key};
pub use state::{Ball, Bounds, GameEvent, GameState, MatchPhase, Paddle, Side};
pub use tick::{check_win, physics_step, reset_ball, tick};
