//! Physics core
//!
//! Pure, single-threaded and infallible:
//! - Balls live in one dense `Vec`, addressed by index
//! - Randomness comes only from the RNG handed in by the caller
//! - No rendering, file or platform dependencies

pub mod broad_phase;
pub mod collision;
pub mod integrator;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod wall;

pub use broad_phase::{SweepAndPrune, candidate_pairs};
pub use collision::{circles_overlap, resolve_collision, resolve_pair};
pub use integrator::integrate;
pub use spawn::{default_world, random_balls, random_world};
pub use state::{Ball, CandidatePair, World};
pub use tick::{Simulation, TickReport, tick};
pub use wall::resolve_walls;
