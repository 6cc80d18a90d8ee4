//! Initial ball placement

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, World};
use crate::consts::BALL_PALETTE;
use crate::error::Result;
use crate::settings::Settings;

/// Uniformly pick a palette colour
pub fn random_color<R: Rng>(rng: &mut R) -> [u8; 3] {
    BALL_PALETTE[rng.random_range(0..BALL_PALETTE.len())]
}

/// Generate `settings.num_balls` balls at integer positions and velocities.
///
/// Centres are kept at least `MAX_RADIUS` from every wall so no ball starts
/// outside the arena. Balls may start overlapping each other. Fails if the
/// settings do not validate.
pub fn random_balls<R: Rng>(settings: &Settings, rng: &mut R) -> Result<Vec<Ball>> {
    settings.validate()?;

    let min_x = settings.max_radius;
    let max_x = settings.window_width - settings.max_radius;
    let min_y = settings.max_radius;
    let max_y = settings.window_height - settings.max_radius;

    let balls: Vec<Ball> = (0..settings.num_balls)
        .map(|_| {
            let x = rng.random_range(min_x..=max_x);
            let y = rng.random_range(min_y..=max_y);
            let vx = rng.random_range(settings.min_x_vel..=settings.max_x_vel);
            let vy = rng.random_range(settings.min_y_vel..=settings.max_y_vel);
            let radius = rng.random_range(settings.min_radius..=settings.max_radius);
            let color = random_color(rng);

            Ball::new(
                Vec2::new(x as f32, y as f32),
                Vec2::new(vx as f32, vy as f32),
                radius,
                settings.ball_elasticity,
                color,
            )
        })
        .collect();
    Ok(balls)
}

/// A fresh world populated from the settings
pub fn random_world<R: Rng>(settings: &Settings, rng: &mut R) -> Result<World> {
    let balls = random_balls(settings, rng)?;
    log::info!(
        "Generated {} balls in a {}x{} arena",
        balls.len(),
        settings.window_width,
        settings.window_height
    );
    Ok(World::new(
        settings.window_width,
        settings.window_height,
        settings.gravity(),
        balls,
    ))
}

/// A single ball thrown from the top-left corner under unit gravity
pub fn default_world<R: Rng>(width: u32, height: u32, rng: &mut R) -> World {
    let ball = Ball::new(
        Vec2::new(100.0, 100.0),
        Vec2::new(70.0, 44.0),
        25,
        1.0,
        random_color(rng),
    );
    World::new(width, height, Vec2::new(0.0, 1.0), vec![ball])
}
