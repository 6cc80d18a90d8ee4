//! Arena wall response
//!
//! Each axis is checked independently, so a ball driven into a corner bounces
//! off both walls in the same tick.

use glam::Vec2;

use super::state::Ball;

/// Velocity scale after a wall bounce.
///
/// `along` is the (already reflected) component normal to the wall, `across`
/// the tangential one. Near-tangential impacts blend from `restitution` toward
/// 1 so grazing hits lose less energy than head-on ones. With no tangential
/// motion the impact is head-on.
#[inline]
pub fn wall_bounce_factor(along: f32, across: f32, restitution: f32) -> f32 {
    if across == 0.0 {
        return restitution;
    }
    let ratio = (along / across).abs();
    if ratio.is_finite() && ratio < 1.0 {
        restitution + (1.0 - restitution) * (1.0 - ratio)
    } else {
        restitution
    }
}

/// Bounce a ball off any wall it crosses and snap it back inside.
///
/// Returns true if either wall was hit.
pub fn resolve_walls(ball: &mut Ball, bounds: Vec2) -> bool {
    let r = ball.radius_f();
    let restitution = ball.restitution();
    let mut hit = false;

    if ball.pos.x - r < 0.0 || ball.pos.x + r > bounds.x {
        ball.vel.x = -ball.vel.x;
        // One factor for both components; the tangential part is not
        // re-blended against the already scaled normal part.
        ball.vel *= wall_bounce_factor(ball.vel.x, ball.vel.y, restitution);
        ball.pos.x = if ball.pos.x - r < 0.0 { r } else { bounds.x - r };
        hit = true;
    }

    if ball.pos.y - r < 0.0 || ball.pos.y + r > bounds.y {
        ball.vel.y = -ball.vel.y;
        // Same single factor as the x wall
        ball.vel *= wall_bounce_factor(ball.vel.y, ball.vel.x, restitution);
        ball.pos.y = if ball.pos.y - r < 0.0 { r } else { bounds.y - r };
        hit = true;
    }

    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ARENA: Vec2 = Vec2::new(800.0, 600.0);

    fn ball(pos: (f32, f32), vel: (f32, f32), radius: u32, elasticity: f32) -> Ball {
        Ball::new(
            Vec2::new(pos.0, pos.1),
            Vec2::new(vel.0, vel.1),
            radius,
            elasticity,
            [0, 255, 0],
        )
    }

    #[test]
    fn test_left_wall_head_on() {
        let mut b = ball((10.0, 300.0), (-5.0, 0.0), 25, 1.0);
        assert!(resolve_walls(&mut b, ARENA));
        assert_eq!(b.vel, Vec2::new(5.0, 0.0));
        assert_eq!(b.pos.x, 25.0);
        assert_eq!(b.pos.y, 300.0);
    }

    #[test]
    fn test_right_wall_clamps_to_edge() {
        let mut b = ball((790.0, 300.0), (8.0, 0.0), 20, 1.0);
        resolve_walls(&mut b, ARENA);
        assert_eq!(b.pos.x, 780.0);
        assert_eq!(b.vel.x, -8.0);
    }

    #[test]
    fn test_inside_is_untouched() {
        let mut b = ball((400.0, 300.0), (3.0, -2.0), 20, 0.5);
        let before = b.clone();
        assert!(!resolve_walls(&mut b, ARENA));
        assert_eq!(b, before);
    }

    #[test]
    fn test_head_on_loses_sqrt_elasticity() {
        // |vx/vy| >= 1 -> plain sqrt(elasticity)
        let mut b = ball((5.0, 300.0), (-4.0, 2.0), 10, 0.25);
        resolve_walls(&mut b, ARENA);
        assert!((b.vel.x - 2.0).abs() < 1e-6);
        assert!((b.vel.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_grazing_hit_loses_less() {
        // |vx/vy| = 0.25: factor = 0.5 + 0.5 * 0.75 = 0.875
        let mut b = ball((5.0, 300.0), (-1.0, 4.0), 10, 0.25);
        resolve_walls(&mut b, ARENA);
        assert!((b.vel.x - 0.875).abs() < 1e-6);
        assert!((b.vel.y - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_blend_factor_shared_by_both_components() {
        // s = 0.5, ratio = 0.25 -> factor 0.875 on both axes
        let mut b = ball((5.0, 300.0), (-1.0, 4.0), 10, 0.25);
        assert!(resolve_walls(&mut b, ARENA));
        assert!((b.vel.x - 0.875).abs() < 1e-6);
        assert!((b.vel.y - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_floor_bounce() {
        let mut b = ball((400.0, 595.0), (0.0, 12.0), 10, 1.0);
        resolve_walls(&mut b, ARENA);
        assert_eq!(b.vel, Vec2::new(0.0, -12.0));
        assert_eq!(b.pos.y, 590.0);
    }

    #[test]
    fn test_corner_hits_both_walls() {
        let mut b = ball((2.0, 598.0), (-3.0, 3.0), 10, 1.0);
        resolve_walls(&mut b, ARENA);
        assert_eq!(b.pos, Vec2::new(10.0, 590.0));
        assert_eq!(b.vel, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_zero_velocity_is_finite() {
        let mut b = ball((0.0, 0.0), (0.0, 0.0), 10, 0.5);
        resolve_walls(&mut b, ARENA);
        assert!(b.vel.is_finite());
        assert_eq!(b.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_bounce_factor_branches() {
        assert_eq!(wall_bounce_factor(5.0, 0.0, 0.7), 0.7);
        assert_eq!(wall_bounce_factor(5.0, 5.0, 0.7), 0.7);
        assert!((wall_bounce_factor(0.0, 5.0, 0.7) - 1.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn test_wall_containment(
            x in -200.0f32..1000.0,
            y in -200.0f32..800.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
            radius in 1u32..100,
            elasticity in 0.0f32..=1.0,
        ) {
            let mut b = ball((x, y), (vx, vy), radius, elasticity);
            resolve_walls(&mut b, ARENA);
            let r = radius as f32;
            let eps = 1e-3;
            prop_assert!(b.pos.x >= r - eps && b.pos.x <= ARENA.x - r + eps);
            prop_assert!(b.pos.y >= r - eps && b.pos.y <= ARENA.y - r + eps);
            prop_assert!(b.vel.is_finite());
        }
    }
}
