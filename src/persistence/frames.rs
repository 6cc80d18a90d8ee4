//! Numbered frame files (`frame_<n>.ppm`) in a single directory
//!
//! Frames are binary PPM (P6) images so any encoder can pick them up. A run
//! that resumes a saved world continues numbering after the highest frame
//! already on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::renderer::Canvas;

const FRAME_PREFIX: &str = "frame_";
const FRAME_EXT: &str = ".ppm";

/// Parse `frame_<n>.ppm` into `n`
pub fn parse_frame_index(file_name: &str) -> Option<u64> {
    let digits = file_name
        .strip_prefix(FRAME_PREFIX)?
        .strip_suffix(FRAME_EXT)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub fn frame_file_name(index: u64) -> String {
    format!("{FRAME_PREFIX}{index}{FRAME_EXT}")
}

/// Directory holding the rendered frame sequence
#[derive(Debug, Clone)]
pub struct FrameStore {
    dir: PathBuf,
}

impl FrameStore {
    /// Open (creating if needed) a frame directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn frame_path(&self, index: u64) -> PathBuf {
        self.dir.join(frame_file_name(index))
    }

    /// Indices of all frames currently on disk, unordered
    fn indices(&self) -> Result<Vec<u64>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| Error::io(&self.dir, e))?;
        let mut indices = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.dir, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Some(index) = entry.file_name().to_str().and_then(parse_frame_index) {
                indices.push(index);
            }
        }
        Ok(indices)
    }

    /// One past the highest frame index on disk, or 0 for an empty directory
    pub fn next_index(&self) -> Result<u64> {
        Ok(self.indices()?.into_iter().max().map_or(0, |max| max + 1))
    }

    /// Write a canvas as frame `index`
    pub fn write(&self, index: u64, canvas: &Canvas) -> Result<()> {
        let path = self.frame_path(index);
        let mut bytes = Vec::with_capacity(canvas.as_bytes().len() + 32);
        // Writing into a Vec can't fail
        let _ = write!(bytes, "P6\n{} {}\n255\n", canvas.width(), canvas.height());
        bytes.extend_from_slice(canvas.as_bytes());
        fs::write(&path, bytes).map_err(|e| Error::io(&path, e))
    }

    /// Delete every frame file, leaving anything else alone. Returns the count.
    pub fn clear(&self) -> Result<usize> {
        let indices = self.indices()?;
        for &index in &indices {
            let path = self.frame_path(index);
            fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        }
        if !indices.is_empty() {
            log::info!("Removed {} frames from {}", indices.len(), self.dir.display());
        }
        Ok(indices.len())
    }
}
