//! Frame rendering onto a 2D drawing surface
//!
//! The backend only has to fill rectangles, circles and text. The browser
//! build draws on a canvas 2D context; the native runner and tests record
//! into a `DrawList`.

use crate::sim::GameState;

/// Score font (CSS shorthand)
pub const SCORE_FONT: &str = "75px Arial";

/// Center net dashes
pub const NET_DASH_WIDTH: f32 = 2.0;
pub const NET_DASH_LENGTH: f32 = 10.0;
pub const NET_DASH_SPACING: f32 = 15.0;

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// CSS color name
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Drawing primitives the renderer needs from a backend
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
    /// Draw `text` with its baseline-left corner at (x, y) in `SCORE_FONT`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
    },
}

/// Surface that records every call, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for DrawList {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            color,
        });
    }
}

/// Draw one frame: background, net, paddles, ball, scores. Read-only.
pub fn render<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) {
    let width = state.settings.surface_width;
    let height = state.settings.surface_height;

    surface.fill_rect(0.0, 0.0, width, height, Color::Black);

    draw_net(surface, width, height);

    for paddle in [&state.player, &state.ai] {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, Color::White);
    }

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius(), Color::White);

    surface.fill_text(
        &state.score.player.to_string(),
        width / 4.0,
        height / 5.0,
        Color::White,
    );
    surface.fill_text(
        &state.score.ai.to_string(),
        3.0 * width / 4.0,
        height / 5.0,
        Color::White,
    );
}

fn draw_net<S: DrawSurface + ?Sized>(surface: &mut S, width: f32, height: f32) {
    let x = width / 2.0 - NET_DASH_WIDTH / 2.0;
    let mut y = 0.0;
    while y < height {
        surface.fill_rect(x, y, NET_DASH_WIDTH, NET_DASH_LENGTH, Color::White);
        y += NET_DASH_SPACING;
    }
}
