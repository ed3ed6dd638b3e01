//! Canvas Pong - classic two-paddle Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring)
//! - `input`: Keyboard to paddle intent mapping
//! - `render`: Drawing-surface abstraction and frame rendering
//! - `settings`: Data-driven geometry and tuning

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use input::{InputState, Key};
pub use render::{Color, DrawCommand, DrawList, DrawSurface, render};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// These are part of the observable contract: they fix where the net is drawn,
/// where the ball bounces and how the AI feels. `Settings::default()` mirrors them.
pub mod consts {
    /// Logical surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle speed while a direction key is held (pixels per frame)
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Initial horizontal speed (pixels per frame)
    pub const BALL_START_DX: f32 = 5.0;
    /// Initial vertical speed (pixels per frame)
    pub const BALL_START_DY: f32 = 5.0;
    /// Vertical speed given to the ball on every serve
    pub const SERVE_DY: f32 = 5.0;

    /// Maximum deflection off a paddle (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Proportional gain of the AI paddle follower
    pub const AI_LEVEL: f32 = 0.1;

    /// One animation frame. Velocities are expressed per frame.
    pub const FRAME_DT: f32 = 1.0;
}
