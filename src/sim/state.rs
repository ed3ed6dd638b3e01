//! Game state and core simulation types
//!
//! Everything the step function reads or writes lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::settings::Settings;

/// Which end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left, human-controlled
    Player,
    /// Right, auto-controlled
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Horizontal direction pointing away from this side's paddle
    pub fn outward_sign(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Ai => -1.0,
        }
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle at the given deflection angle (radians)
    PaddleHit { side: Side, angle: f32 },
    /// A point was won by `side` and the ball was served again
    Scored { side: Side },
}

/// A paddle. `x` is fixed after creation; `y` is the top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (pixels per frame)
    pub dy: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            dy: 0.0,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }

    /// Move vertically, staying on the surface
    pub fn move_by(&mut self, delta: f32, surface_height: f32) {
        self.y = (self.y + delta).clamp(0.0, surface_height - self.height);
    }

    /// Proportional follower: close a fraction of the gap between the paddle
    /// center and `target_y` each frame.
    ///
    /// `gain * dt` is capped at 1 so a long frame lands on the target instead
    /// of overshooting it.
    pub fn track(&mut self, target_y: f32, gain: f32, dt: f32, surface_height: f32) {
        let step_gain = (gain * dt).min(1.0);
        let delta = (target_y - self.center_y()) * step_gain;
        self.move_by(delta, surface_height);
    }
}

/// The ball. `pos` is the center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity (dx, dy) in pixels per frame
    pub vel: Vec2,
    /// Diameter
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius()
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Put the ball back in the middle after a point.
    ///
    /// Horizontal speed is kept and its direction flipped; vertical speed is
    /// reset to `serve_dy`.
    pub fn serve(&mut self, center: Vec2, serve_dy: f32) {
        self.pos = center;
        self.vel.x = -self.vel.x;
        self.vel.y = serve_dy;
    }
}

/// Points won by each side. Never reset during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Geometry and tuning this state was built with
    pub settings: Settings,
    /// Left paddle
    pub player: Paddle,
    /// Right paddle
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh table: paddles centered, ball at the center
    pub fn new(settings: Settings) -> Self {
        let paddle_y = settings.paddle_start_y();
        let player = Paddle::new(
            settings.player_paddle_x(),
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
        );
        let ai = Paddle::new(
            settings.ai_paddle_x(),
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
        );
        let ball = Ball::new(
            settings.center(),
            Vec2::new(settings.ball_start_dx, settings.ball_start_dy),
            settings.ball_size,
        );

        Self {
            settings,
            player,
            ai,
            ball,
            score: Score::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
