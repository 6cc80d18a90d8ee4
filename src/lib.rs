//! Ball Arena - circular bodies bouncing around a rectangular box
//!
//! Core modules:
//! - `sim`: Physics core (integration, broad/narrow phase, collision response)
//! - `renderer`: Software rasterizer producing one RGB canvas per tick
//! - `persistence`: Snapshot save/load and numbered frame files
//! - `settings`: JSON run configuration

pub mod error;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;
pub use sim::{Ball, Simulation, TickReport, World};

/// Simulation configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const DEFAULT_ARENA_WIDTH: u32 = 800;
    pub const DEFAULT_ARENA_HEIGHT: u32 = 600;

    /// Default gravity, applied to velocity once per tick
    pub const DEFAULT_GRAVITY: (f32, f32) = (0.0, 1.0);

    /// Over-separation applied when pushing overlapping balls apart
    pub const SEPARATION_FACTOR: f32 = 1.25;

    /// Centre distance below which two balls are treated as coincident
    pub const MIN_SEPARATION: f32 = 1e-4;

    /// Default file locations used by the CLI
    pub const DEFAULT_CONFIG_FILE: &str = "config.json";
    pub const DEFAULT_SNAPSHOT_FILE: &str = "simulator_data.json";
    pub const DEFAULT_FRAMES_DIR: &str = "frames";

    /// Colours picked from when generating balls
    pub const BALL_PALETTE: [[u8; 3]; 59] = [
        [255, 0, 0], [0, 255, 0], [0, 0, 255], [204, 204, 0], [102, 204, 0],
        [0, 204, 0], [0, 204, 102], [0, 204, 204], [0, 102, 204], [0, 0, 204],
        [102, 0, 204], [204, 0, 204], [204, 0, 102], [153, 76, 0], [153, 153, 0],
        [76, 153, 0], [0, 153, 0], [0, 153, 76], [0, 153, 153], [0, 76, 153],
        [0, 0, 153], [76, 0, 153], [153, 0, 153], [153, 0, 76], [204, 102, 0],
        [153, 0, 0], [204, 0, 0], [255, 128, 0], [255, 255, 0], [128, 255, 0],
        [0, 255, 128], [0, 255, 255], [0, 128, 255], [127, 0, 255], [255, 0, 255],
        [255, 0, 127], [255, 51, 51], [255, 153, 51], [255, 255, 51], [153, 255, 51],
        [51, 255, 51], [51, 255, 153], [51, 255, 255], [51, 153, 255], [51, 51, 255],
        [153, 51, 255], [255, 51, 255], [255, 51, 153], [255, 178, 102], [255, 255, 102],
        [178, 255, 102], [102, 255, 102], [102, 255, 178], [102, 255, 255], [102, 178, 255],
        [102, 102, 255], [178, 102, 255], [255, 102, 255], [255, 102, 178],
    ];
}
