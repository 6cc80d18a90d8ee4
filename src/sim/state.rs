//! World state and core simulation types
//!
//! Everything that must survive a save/resume lives in [`World`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// A circular rigid body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre in arena coordinates
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    radius: u32,
    /// 0 = all kinetic energy lost on impact, 1 = none lost
    elasticity: f32,
    /// RGB, only used for rendering
    pub color: [u8; 3],
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: u32, elasticity: f32, color: [u8; 3]) -> Self {
        Self {
            pos,
            vel,
            radius,
            elasticity,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    #[inline]
    pub fn elasticity(&self) -> f32 {
        self.elasticity
    }

    /// Radius as a float, for geometry
    #[inline]
    pub fn radius_f(&self) -> f32 {
        self.radius as f32
    }

    /// Mass proxy used by the impulse response (area, not volume)
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius_f() * self.radius_f()
    }

    /// Factor applied to velocity on a lossy impact
    #[inline]
    pub fn restitution(&self) -> f32 {
        self.elasticity.sqrt()
    }

    /// Horizontal extent `[x - r, x + r]`
    #[inline]
    pub fn x_extent(&self) -> (f32, f32) {
        (self.pos.x - self.radius_f(), self.pos.x + self.radius_f())
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass() * self.vel.length_squared()
    }

    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass()
    }
}

/// Two ball indices that may be touching, produced fresh by every broad-phase pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidatePair {
    /// Ball whose interval opened first
    pub first: usize,
    /// Ball whose left endpoint produced the pair
    pub second: usize,
}

impl CandidatePair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Same pair regardless of orientation
    pub fn normalized(self) -> (usize, usize) {
        (self.first.min(self.second), self.first.max(self.second))
    }
}

/// Complete physical state between ticks (serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    width: u32,
    height: u32,
    /// Added to every ball's velocity once per tick
    pub gravity: Vec2,
    /// Dense ball store, addressed by index
    pub balls: Vec<Ball>,
}

impl World {
    pub fn new(width: u32, height: u32, gravity: Vec2, balls: Vec<Ball>) -> Self {
        Self {
            width,
            height,
            gravity,
            balls,
        }
    }

    /// Empty arena with default size and gravity
    pub fn empty() -> Self {
        Self::new(
            DEFAULT_ARENA_WIDTH,
            DEFAULT_ARENA_HEIGHT,
            Vec2::new(DEFAULT_GRAVITY.0, DEFAULT_GRAVITY.1),
            Vec::new(),
        )
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Arena size as floats `(width, height)`
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Reject a world that breaks the rules every tick relies on: a non-empty
    /// arena, finite state, and balls with a positive radius that fit the
    /// arena and an elasticity within `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid_snapshot("arena must have a non-zero size"));
        }
        if !self.gravity.is_finite() {
            return Err(Error::invalid_snapshot("gravity must be finite"));
        }
        for (i, ball) in self.balls.iter().enumerate() {
            if ball.radius == 0 {
                return Err(Error::invalid_snapshot(format!("ball {i} has zero radius")));
            }
            let diameter = u64::from(ball.radius) * 2;
            if diameter > u64::from(self.width) || diameter > u64::from(self.height) {
                return Err(Error::invalid_snapshot(format!(
                    "ball {i} of radius {} does not fit in a {}x{} arena",
                    ball.radius, self.width, self.height
                )));
            }
            if !(0.0..=1.0).contains(&ball.elasticity) {
                return Err(Error::invalid_snapshot(format!(
                    "ball {i} has elasticity {} outside [0, 1]",
                    ball.elasticity
                )));
            }
            if !ball.pos.is_finite() || !ball.vel.is_finite() {
                return Err(Error::invalid_snapshot(format!(
                    "ball {i} has a non-finite position or velocity"
                )));
            }
        }
        Ok(())
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.balls.iter().map(Ball::momentum).sum()
    }
}
