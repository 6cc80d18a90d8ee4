//! Explicit Euler step: gravity into velocity, then velocity into position

use glam::Vec2;

use super::state::Ball;

/// Advance one ball by a single tick
#[inline]
pub fn integrate_ball(ball: &mut Ball, gravity: Vec2) {
    ball.vel += gravity;
    ball.pos += ball.vel;
}

/// Advance every ball by a single tick. Balls do not read each other.
pub fn integrate(balls: &mut [Ball], gravity: Vec2) {
    for ball in balls.iter_mut() {
        integrate_ball(ball, gravity);
    }
}
