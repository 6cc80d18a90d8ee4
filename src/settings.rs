//! Run settings
//!
//! Loaded from a flat JSON object whose keys match the upper-case names used
//! by existing `config.json` files, e.g.
//!
//! ```json
//! {
//!     "WINDOW_WIDTH": 800, "WINDOW_HEIGHT": 600,
//!     "MIN_X_VEL": -10, "MAX_X_VEL": 10, "MIN_Y_VEL": -10, "MAX_Y_VEL": 10,
//!     "X_GRAVITY": 0.0, "Y_GRAVITY": 1.0,
//!     "MIN_RADIUS": 10, "MAX_RADIUS": 30,
//!     "NUM_FRAMES": 600, "FRAME_RATE": 60,
//!     "BALL_ELASTICITY": 0.9, "NUM_BALLS": 20
//! }
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Everything needed to start (or continue) a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Settings {
    // === Arena ===
    pub window_width: u32,
    pub window_height: u32,
    pub x_gravity: f32,
    pub y_gravity: f32,

    // === Random ball generation (inclusive ranges) ===
    pub min_x_vel: i32,
    pub max_x_vel: i32,
    pub min_y_vel: i32,
    pub max_y_vel: i32,
    pub min_radius: u32,
    pub max_radius: u32,
    /// Shared by every generated ball
    pub ball_elasticity: f32,
    pub num_balls: usize,

    // === Output ===
    /// Ticks to simulate (one frame each)
    pub num_frames: u64,
    /// Playback rate for whoever encodes the frames
    pub frame_rate: u32,

    /// Fixed seed; drawn from OS entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_ARENA_WIDTH,
            window_height: DEFAULT_ARENA_HEIGHT,
            x_gravity: DEFAULT_GRAVITY.0,
            y_gravity: DEFAULT_GRAVITY.1,

            min_x_vel: -10,
            max_x_vel: 10,
            min_y_vel: -10,
            max_y_vel: 10,
            min_radius: 10,
            max_radius: 30,
            ball_elasticity: 0.9,
            num_balls: 20,

            num_frames: 600,
            frame_rate: 60,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str, origin: impl AsRef<Path>) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| Error::json(origin.as_ref(), e))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.x_gravity, self.y_gravity)
    }

    /// Reject settings that cannot describe a run
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::invalid("arena must have a non-zero size"));
        }
        if self.min_radius == 0 {
            return Err(Error::invalid("MIN_RADIUS must be positive"));
        }
        if self.min_radius > self.max_radius {
            return Err(Error::invalid("MIN_RADIUS exceeds MAX_RADIUS"));
        }
        if self.min_x_vel > self.max_x_vel {
            return Err(Error::invalid("MIN_X_VEL exceeds MAX_X_VEL"));
        }
        if self.min_y_vel > self.max_y_vel {
            return Err(Error::invalid("MIN_Y_VEL exceeds MAX_Y_VEL"));
        }
        let diameter = self.max_radius.saturating_mul(2);
        if diameter > self.window_width || diameter > self.window_height {
            return Err(Error::invalid(format!(
                "a ball of radius {} does not fit in a {}x{} arena",
                self.max_radius, self.window_width, self.window_height
            )));
        }
        if !(0.0..=1.0).contains(&self.ball_elasticity) {
            return Err(Error::invalid(format!(
                "BALL_ELASTICITY must be within [0, 1], got {}",
                self.ball_elasticity
            )));
        }
        if !self.x_gravity.is_finite() || !self.y_gravity.is_finite() {
            return Err(Error::invalid("gravity must be finite"));
        }
        Ok(())
    }
}
