//! World snapshots as versioned JSON

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::World;

/// Bumped whenever the snapshot layout changes
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    #[serde(flatten)]
    world: &'a World,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Encode a world as pretty-printed JSON
pub fn to_json(world: &World) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&EnvelopeRef {
        version: SNAPSHOT_VERSION,
        world,
    })
}

/// Decode a world, rejecting snapshots from other format versions
pub fn from_json(json: &str, origin: impl AsRef<Path>) -> Result<World> {
    let origin = origin.as_ref();
    let probe: VersionProbe = serde_json::from_str(json).map_err(|e| Error::json(origin, e))?;
    if probe.version != SNAPSHOT_VERSION {
        return Err(Error::UnsupportedVersion {
            expected: SNAPSHOT_VERSION,
            found: probe.version,
        });
    }
    // The version key is ignored by World itself
    let world: World = serde_json::from_str(json).map_err(|e| Error::json(origin, e))?;
    world.validate()?;
    Ok(world)
}

/// Write a snapshot via a temporary file so a crash never leaves half a save
pub fn save_snapshot(path: impl AsRef<Path>, world: &World) -> Result<()> {
    let path = path.as_ref();
    let tmp = path.with_extension("json.tmp");
    let json = to_json(world).map_err(|e| Error::json(path, e))?;
    fs::write(&tmp, json).map_err(|e| Error::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| Error::io(path, e))?;
    log::info!(
        "Saved snapshot of {} balls to {}",
        world.balls.len(),
        path.display()
    );
    Ok(())
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<World> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let world = from_json(&json, path)?;
    log::info!(
        "Loaded snapshot of {} balls from {}",
        world.balls.len(),
        path.display()
    );
    Ok(world)
}
