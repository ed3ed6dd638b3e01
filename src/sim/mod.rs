//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit frame timestep only
//! - No hidden globals, all state lives in `GameState`
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Contact, DeflectionModel, ball_paddle_collision, deflect};
pub use state::{Ball, GameEvent, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
