//! Per-frame simulation tick
//!
//! Advances the table by one step. Collision checks run against the ball's
//! already-moved position.

use super::collision::{ball_paddle_collision, deflect};
use super::state::{GameEvent, GameState, Side};

/// Input commands for a single tick, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// -1 = up, 0 = hold, +1 = down
    pub vertical_intent: i8,
    /// Idle/demo mode - the player paddle tracks the ball on its own
    pub idle_mode: bool,
}

/// Advance the game state by `dt` frames (1.0 = one animation frame)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let GameState {
        settings,
        player,
        ai,
        ball,
        score,
        time_ticks,
        events,
    } = state;

    events.clear();
    *time_ticks += 1;

    player.dy = f32::from(input.vertical_intent.signum()) * settings.paddle_speed;

    // Ball movement
    ball.integrate(dt);

    // Top/bottom walls. No position correction: a fast ball may poke past the
    // wall for a frame before it comes back.
    if ball.top() <= 0.0 || ball.bottom() >= settings.surface_height {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Paddles, left then right
    for (side, paddle) in [(Side::Player, &*player), (Side::Ai, &*ai)] {
        if let Some(contact) = ball_paddle_collision(ball, paddle) {
            let angle = deflect(ball, contact.collide_point, side, settings.deflection);
            events.push(GameEvent::PaddleHit { side, angle });
        }
    }

    // Scoring
    let scorer = if ball.left() < 0.0 {
        Some(Side::Ai)
    } else if ball.right() > settings.surface_width {
        Some(Side::Player)
    } else {
        None
    };
    if let Some(side) = scorer {
        score.award(side);
        ball.serve(settings.center(), settings.serve_dy);
        events.push(GameEvent::Scored { side });
        log::debug!(
            "{:?} scored at tick {} (player {} - ai {})",
            side,
            time_ticks,
            score.player,
            score.ai
        );
    }

    // Player paddle
    if input.idle_mode {
        player.track(ball.pos.y, settings.ai_level, dt, settings.surface_height);
    } else {
        player.move_by(player.dy * dt, settings.surface_height);
    }

    // AI paddle: lagging proportional follower, not predictive
    ai.track(ball.pos.y, settings.ai_level, dt, settings.surface_height);
}
