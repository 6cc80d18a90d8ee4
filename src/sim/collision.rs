//! Narrow phase and ball-ball collision response
//!
//! The narrow phase confirms broad-phase candidates with an exact
//! centre-distance test. Confirmed pairs are pushed apart along the line of
//! centres and exchange momentum with an elastic impulse, using `radius²` as
//! the mass of each ball.

use glam::Vec2;

use super::state::{Ball, CandidatePair};
use crate::consts::{MIN_SEPARATION, SEPARATION_FACTOR};

/// True when two circles overlap. Touching circles do not.
#[inline]
pub fn circles_overlap(a: &Ball, b: &Ball) -> bool {
    let sum_of_radii = (a.radius() + b.radius()) as f32;
    a.pos.distance(b.pos) < sum_of_radii
}

/// Keep only the candidates whose circles actually overlap, preserving order
pub fn confirm_pairs(balls: &[Ball], candidates: &[CandidatePair], out: &mut Vec<CandidatePair>) {
    out.clear();
    out.extend(
        candidates
            .iter()
            .copied()
            .filter(|p| circles_overlap(&balls[p.first], &balls[p.second])),
    );
}

/// Borrow two distinct balls mutably
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    assert_ne!(i, j, "a ball cannot collide with itself");
    if i < j {
        let (head, tail) = balls.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = balls.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Resolve a confirmed pair in place. `pair.first` plays the role of ball 1.
pub fn resolve_pair(balls: &mut [Ball], pair: CandidatePair, apply_energy_loss: bool) {
    let (ball1, ball2) = pair_mut(balls, pair.first, pair.second);
    resolve_collision(ball1, ball2, apply_energy_loss);
}

/// Separate two overlapping balls, then apply the elastic impulse.
///
/// Ball 1 is moved first; ball 2's correction is computed from the vector to
/// ball 1's *new* position, so ball 2 ends up slightly over-separated.
///
/// Coincident centres have no line of centres: both balls are pushed apart
/// along x (ball 1 to the right) and the impulse acts along x.
pub fn resolve_collision(ball1: &mut Ball, ball2: &mut Ball, apply_energy_loss: bool) {
    let sum_of_radii = ball1.radius_f() + ball2.radius_f();
    let delta = ball1.pos - ball2.pos;
    let dist = delta.length();

    let (delta, dist) = if dist < MIN_SEPARATION {
        log::warn!(
            "coincident balls at ({}, {}), separating along x",
            ball1.pos.x,
            ball1.pos.y
        );
        let push = 0.5 * sum_of_radii * SEPARATION_FACTOR;
        ball1.pos.x += push;
        ball2.pos.x -= push;
        (Vec2::X, 1.0)
    } else {
        // Negative while overlapping
        let overlap = 0.5 * (dist - sum_of_radii);

        ball1.pos -= overlap * delta / dist * SEPARATION_FACTOR;
        let moved = ball1.pos - ball2.pos;
        ball2.pos += overlap * moved / dist * SEPARATION_FACTOR;
        (delta, dist)
    };

    let m1 = ball1.mass();
    let m2 = ball2.mass();
    let total = m1 + m2;
    let dist_sq = dist * dist;

    let rel1 = (ball1.vel - ball2.vel).dot(delta);
    let rel2 = (ball2.vel - ball1.vel).dot(delta);

    let scalar1 = (2.0 * m2) / total * rel1 / dist_sq;
    let scalar2 = (2.0 * m1) / total * rel2 / dist_sq;

    ball1.vel -= scalar1 * delta;
    ball2.vel -= scalar2 * delta;

    if apply_energy_loss {
        ball1.vel *= ball1.restitution();
        ball2.vel *= ball2.restitution();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(pos: (f32, f32), vel: (f32, f32), radius: u32, elasticity: f32) -> Ball {
        Ball::new(
            Vec2::new(pos.0, pos.1),
            Vec2::new(vel.0, vel.1),
            radius,
            elasticity,
            [0, 0, 255],
        )
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let a = ball((0.0, 0.0), (0.0, 0.0), 10, 1.0);
        let b = ball((20.0, 0.0), (0.0, 0.0), 10, 1.0);
        assert!(!circles_overlap(&a, &b));

        let c = ball((19.9, 0.0), (0.0, 0.0), 10, 1.0);
        assert!(circles_overlap(&a, &c));
    }

    #[test]
    fn test_overlap_uses_euclidean_distance() {
        // x-intervals overlap but the circles don't
        let a = ball((0.0, 0.0), (0.0, 0.0), 10, 1.0);
        let b = ball((15.0, 15.0), (0.0, 0.0), 10, 1.0);
        assert!(!circles_overlap(&a, &b));
    }

    #[test]
    fn test_confirm_pairs_filters() {
        let balls = vec![
            ball((0.0, 0.0), (0.0, 0.0), 10, 1.0),
            ball((15.0, 0.0), (0.0, 0.0), 10, 1.0),
            ball((15.0, 100.0), (0.0, 0.0), 10, 1.0),
        ];
        let candidates = vec![CandidatePair::new(0, 1), CandidatePair::new(0, 2), CandidatePair::new(1, 2)];
        let mut confirmed = Vec::new();
        confirm_pairs(&balls, &candidates, &mut confirmed);
        assert_eq!(confirmed, vec![CandidatePair::new(0, 1)]);
    }

    #[test]
    fn test_asymmetric_positional_correction() {
        let mut a = ball((0.0, 0.0), (0.0, 0.0), 10, 1.0);
        let mut b = ball((15.0, 0.0), (0.0, 0.0), 10, 1.0);
        resolve_collision(&mut a, &mut b, false);

        // overlap = -2.5; ball 1 moves 2.5 * 1.25 away
        assert!((a.pos.x - (-3.125)).abs() < 1e-4);
        // ball 2 uses the post-move vector (length 18.125)
        let expected_b = 15.0 + 2.5 * (18.125 / 15.0) * 1.25;
        assert!((b.pos.x - expected_b).abs() < 1e-4);
        assert_eq!(a.pos.y, 0.0);
        assert_eq!(b.pos.y, 0.0);
    }

    #[test]
    fn test_equal_mass_head_on_swaps_velocity() {
        let mut a = ball((0.0, 0.0), (1.0, 0.0), 10, 1.0);
        let mut b = ball((15.0, 0.0), (0.0, 0.0), 10, 1.0);
        resolve_collision(&mut a, &mut b, true);
        assert!(a.vel.length() < 1e-5);
        assert!((b.vel - Vec2::new(1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_momentum_conserved_without_loss() {
        let mut a = ball((100.0, 100.0), (3.0, -1.5), 12, 1.0);
        let mut b = ball((118.0, 109.0), (-2.0, 0.5), 20, 1.0);
        let before = a.momentum() + b.momentum();
        resolve_collision(&mut a, &mut b, false);
        let after = a.momentum() + b.momentum();
        assert!((before - after).length() < 1e-2, "{before} vs {after}");
    }

    #[test]
    fn test_energy_conserved_without_loss() {
        let mut a = ball((100.0, 100.0), (3.0, -1.5), 12, 0.5);
        let mut b = ball((118.0, 109.0), (-2.0, 0.5), 20, 0.5);
        let before = a.kinetic_energy() + b.kinetic_energy();
        resolve_collision(&mut a, &mut b, false);
        let after = a.kinetic_energy() + b.kinetic_energy();
        assert!((before - after).abs() / before < 1e-4);
    }

    #[test]
    fn test_energy_decreases_with_loss() {
        let mut a = ball((100.0, 100.0), (3.0, -1.5), 12, 0.8);
        let mut b = ball((118.0, 109.0), (-2.0, 0.5), 20, 0.6);
        let before = a.kinetic_energy() + b.kinetic_energy();
        resolve_collision(&mut a, &mut b, true);
        let after = a.kinetic_energy() + b.kinetic_energy();
        assert!(after < before);
    }

    #[test]
    fn test_resolution_removes_penetration() {
        let mut a = ball((50.0, 50.0), (0.0, 0.0), 15, 1.0);
        let mut b = ball((60.0, 55.0), (0.0, 0.0), 15, 1.0);
        let initial_depth = 30.0 - a.pos.distance(b.pos);
        assert!(initial_depth > 0.0);

        for _ in 0..3 {
            if circles_overlap(&a, &b) {
                resolve_collision(&mut a, &mut b, false);
            }
        }
        assert!(!circles_overlap(&a, &b));
        assert!(a.pos.distance(b.pos) >= 30.0);
        // Resting balls stay at rest
        assert_eq!(a.vel, Vec2::ZERO);
        assert_eq!(b.vel, Vec2::ZERO);
    }

    #[test]
    fn test_coincident_centres_are_separated() {
        let mut a = ball((40.0, 40.0), (1.0, 0.0), 10, 1.0);
        let mut b = ball((40.0, 40.0), (-1.0, 0.0), 10, 1.0);
        resolve_collision(&mut a, &mut b, true);
        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert!(a.vel.is_finite() && b.vel.is_finite());
        assert!(a.pos.x > b.pos.x);
        assert!(!circles_overlap(&a, &b));
    }

    #[test]
    fn test_resolve_pair_by_index() {
        let mut balls = vec![
            ball((0.0, 0.0), (0.0, 0.0), 10, 1.0),
            ball((500.0, 0.0), (0.0, 0.0), 10, 1.0),
            ball((15.0, 0.0), (-1.0, 0.0), 10, 1.0),
        ];
        resolve_pair(&mut balls, CandidatePair::new(2, 0), false);
        assert!(balls[0].vel.x < 0.0);
        assert!(balls[2].vel.x.abs() < 1e-5);
        assert_eq!(balls[1].pos, Vec2::new(500.0, 0.0));
    }
}
