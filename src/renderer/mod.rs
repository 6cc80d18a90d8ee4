//! Frame rendering
//!
//! Balls are rasterized on the CPU into an RGB canvas the size of the arena.

pub mod canvas;

pub use canvas::{Canvas, Rgb};
