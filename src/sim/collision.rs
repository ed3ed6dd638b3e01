//! Collision detection and response for ball and paddles
//!
//! Both shapes are treated as axis-aligned boxes. The response is the classic
//! angle deflection: where the ball meets the paddle decides how steeply it
//! leaves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Side};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Axis-aligned bounding box in surface coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Box from a top-left corner and a size
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Square box of side `size` around `center`
    pub fn from_center(center: Vec2, size: f32) -> Self {
        let half = size / 2.0;
        Self {
            left: center.x - half,
            top: center.y - half,
            right: center.x + half,
            bottom: center.y + half,
        }
    }

    /// Strict overlap test. Boxes that only touch along an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.top < other.bottom
            && self.right > other.left
            && self.bottom > other.top
    }
}

/// Result of a ball/paddle hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub ball_box: Aabb,
    pub paddle_box: Aabb,
    /// Ball center offset from paddle center, normalized to [-1, 1]
    pub collide_point: f32,
}

/// Check whether the ball overlaps a paddle. Pure: neither input is touched.
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> Option<Contact> {
    let ball_box = ball.bounds();
    let paddle_box = paddle.bounds();

    if !ball_box.overlaps(&paddle_box) {
        return None;
    }

    let half_height = paddle.height / 2.0;
    let collide_point = ((ball.pos.y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);

    Some(Contact {
        ball_box,
        paddle_box,
        collide_point,
    })
}

/// How a paddle hit changes the ball's speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeflectionModel {
    /// `dx = |dx|·cos(a)` then `dy = dx·sin(a)`: the new dy is derived from the
    /// already-reduced dx, so speed drifts with every return. Classic feel.
    #[default]
    Compounding,
    /// Keep the speed magnitude and only rotate the direction
    ConserveSpeed,
}

/// Send the ball away from the paddle on `side` at an angle set by
/// `collide_point`. Returns the deflection angle in radians.
pub fn deflect(ball: &mut Ball, collide_point: f32, side: Side, model: DeflectionModel) -> f32 {
    let angle = MAX_BOUNCE_ANGLE * collide_point.clamp(-1.0, 1.0);
    let sign = side.outward_sign();

    match model {
        DeflectionModel::Compounding => {
            let dx = sign * ball.vel.x.abs() * angle.cos();
            ball.vel = Vec2::new(dx, dx * angle.sin());
        }
        DeflectionModel::ConserveSpeed => {
            let speed = ball.vel.length();
            ball.vel = Vec2::new(sign * speed * angle.cos(), speed * angle.sin());
        }
    }

    angle
}
