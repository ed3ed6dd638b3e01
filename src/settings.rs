//! Game settings and tuning
//!
//! Geometry and tuning are data-driven so the native runner can load them from
//! a JSON file. Defaults reproduce the classic 800x600 table.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::DeflectionModel;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Table geometry and tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    /// Logical surface width (pixels)
    pub surface_width: f32,
    /// Logical surface height (pixels)
    pub surface_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Player paddle speed while a direction key is held (pixels per frame)
    pub paddle_speed: f32,

    // === Ball ===
    /// Ball diameter
    pub ball_size: f32,
    pub ball_start_dx: f32,
    pub ball_start_dy: f32,
    /// Vertical speed applied on every serve
    pub serve_dy: f32,

    // === AI ===
    /// Proportional gain of the AI follower, in (0, 1]
    pub ai_level: f32,

    // === Physics ===
    pub deflection: DeflectionModel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_start_dx: BALL_START_DX,
            ball_start_dy: BALL_START_DY,
            serve_dy: SERVE_DY,

            ai_level: AI_LEVEL,

            deflection: DeflectionModel::default(),
        }
    }
}

impl Settings {
    /// Center of the surface, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }

    /// Left edge of the player paddle
    pub fn player_paddle_x(&self) -> f32 {
        0.0
    }

    /// Left edge of the AI paddle
    pub fn ai_paddle_x(&self) -> f32 {
        self.surface_width - self.paddle_width
    }

    /// Paddle top edge that centers it vertically
    pub fn paddle_start_y(&self) -> f32 {
        (self.surface_height - self.paddle_height) / 2.0
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that the geometry keeps every simulation operation total
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        fn finite(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be finite",
                })
            }
        }

        positive("surface_width", self.surface_width)?;
        positive("surface_height", self.surface_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_size", self.ball_size)?;
        finite("paddle_speed", self.paddle_speed)?;
        finite("ball_start_dx", self.ball_start_dx)?;
        finite("ball_start_dy", self.ball_start_dy)?;
        finite("serve_dy", self.serve_dy)?;

        if self.paddle_height > self.surface_height {
            return Err(SettingsError::Invalid {
                field: "paddle_height",
                reason: "paddle must fit on the surface",
            });
        }
        if self.paddle_width * 2.0 >= self.surface_width {
            return Err(SettingsError::Invalid {
                field: "paddle_width",
                reason: "paddles must not meet in the middle",
            });
        }
        if self.ball_size >= self.surface_height {
            return Err(SettingsError::Invalid {
                field: "ball_size",
                reason: "ball must fit between the walls",
            });
        }
        if !(self.ai_level > 0.0 && self.ai_level <= 1.0) {
            return Err(SettingsError::Invalid {
                field: "ai_level",
                reason: "gain must be in (0, 1]",
            });
        }

        Ok(())
    }
}
