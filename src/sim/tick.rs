//! Fixed-step simulation tick
//!
//! One tick runs four phases in strict order:
//! 1. Integrate every ball
//! 2. Resolve every initially overlapping pair once, with energy loss
//! 3. Repeatedly resolve one random remaining overlap, without energy loss,
//!    until none remain or `n²` resolutions have been spent
//! 4. Bounce every ball off the walls

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::broad_phase::SweepAndPrune;
use super::collision::{confirm_pairs, resolve_pair};
use super::integrator::integrate;
use super::state::{CandidatePair, World};
use super::wall::resolve_walls;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Pairs found overlapping right after integration
    pub initial_collisions: usize,
    /// Follow-up resolutions of overlaps created by earlier resolutions
    pub iterative_resolutions: usize,
    /// False if the follow-up loop stopped at its cap with overlaps left
    pub converged: bool,
    /// Balls that touched a wall
    pub wall_hits: usize,
}

/// Per-tick scratch buffers, reused between passes
#[derive(Debug, Default)]
struct Scratch {
    sweep: SweepAndPrune,
    candidates: Vec<CandidatePair>,
    overlapping: Vec<CandidatePair>,
}

impl Scratch {
    /// Fresh broad + narrow phase over the whole world
    fn scan(&mut self, world: &World) -> &[CandidatePair] {
        self.sweep
            .candidate_pairs_into(&world.balls, &mut self.candidates);
        confirm_pairs(&world.balls, &self.candidates, &mut self.overlapping);
        &self.overlapping
    }
}

/// Advance `world` by one tick. `rng` picks which overlap to untangle next.
pub fn tick<R: Rng>(world: &mut World, rng: &mut R) -> TickReport {
    let mut scratch = Scratch::default();
    tick_with(world, rng, &mut scratch)
}

fn tick_with<R: Rng>(world: &mut World, rng: &mut R, scratch: &mut Scratch) -> TickReport {
    let mut report = TickReport {
        converged: true,
        ..Default::default()
    };

    // Integrate
    integrate(&mut world.balls, world.gravity);

    // Initial resolve: all pairs from a single pass, in discovery order
    let initial: Vec<CandidatePair> = scratch.scan(world).to_vec();
    report.initial_collisions = initial.len();
    for pair in initial {
        resolve_pair(&mut world.balls, pair, true);
    }

    // Iterative resolve: untangle overlaps the initial pass created
    let cap = world.balls.len() * world.balls.len();
    loop {
        let overlapping = scratch.scan(world);
        if overlapping.is_empty() {
            break;
        }
        if report.iterative_resolutions >= cap {
            report.converged = false;
            log::warn!(
                "collision resolution capped at {} iterations with {} overlaps left",
                cap,
                overlapping.len()
            );
            break;
        }
        let pair = overlapping[rng.random_range(0..overlapping.len())];
        resolve_pair(&mut world.balls, pair, false);
        report.iterative_resolutions += 1;
    }

    // Walls
    let bounds = world.bounds();
    report.wall_hits = world
        .balls
        .iter_mut()
        .map(|ball| resolve_walls(ball, bounds))
        .filter(|&hit| hit)
        .count();

    log::debug!(
        "tick: {} initial collisions, {} follow-ups, {} wall hits",
        report.initial_collisions,
        report.iterative_resolutions,
        report.wall_hits
    );

    report
}

/// A world plus the randomness source that drives it
#[derive(Debug)]
pub struct Simulation<R = Pcg32> {
    world: World,
    rng: R,
    ticks: u64,
    scratch: Scratch,
}

impl Simulation<Pcg32> {
    /// Simulation driven by a PCG stream seeded from `seed`
    pub fn seeded(world: World, seed: u64) -> Self {
        Self::new(world, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(world: World, rng: R) -> Self {
        Self {
            world,
            rng,
            ticks: 0,
            scratch: Scratch::default(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Ticks run since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Give back the world, e.g. for saving
    pub fn into_world(self) -> World {
        self.world
    }

    /// Advance by one tick
    pub fn step(&mut self) -> TickReport {
        self.ticks += 1;
        tick_with(&mut self.world, &mut self.rng, &mut self.scratch)
    }

    /// Advance `ticks` times, handing the world to `on_tick` after each one.
    ///
    /// Stops early and returns the callback's error if it fails.
    pub fn run<E>(
        &mut self,
        ticks: u64,
        mut on_tick: impl FnMut(u64, &World) -> Result<(), E>,
    ) -> Result<(), E> {
        for i in 0..ticks {
            let report = self.step();
            if !report.converged {
                log::debug!("tick {} left residual overlap", self.ticks);
            }
            on_tick(i, &self.world)?;
        }
        Ok(())
    }
}
