//! Save/load of run artefacts
//!
//! Features:
//! - Versioned JSON world snapshots, written via a temp file
//! - Numbered frame sequence with resume-aware indexing

pub mod frames;
pub mod snapshot;

pub use frames::FrameStore;
pub use snapshot::{load_snapshot, save_snapshot};
