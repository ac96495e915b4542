//! Heightmap export configuration.

use std::path::{Path, PathBuf};

use crate::error::{OceanError, Result};

/// Heightmap export settings for the headless driver
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output directory for heightmap PNGs
    pub output_dir: PathBuf,

    /// Write one heightmap every N simulated frames
    pub every_n_frames: usize,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>, every_n_frames: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            every_n_frames,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.every_n_frames == 0 {
            return Err(OceanError::invalid("export interval must be at least 1 frame"));
        }
        Ok(())
    }

    /// Whether `frame` should be written
    pub fn wants_frame(&self, frame: usize) -> bool {
        frame % self.every_n_frames == 0
    }

    /// Heightmap path for a frame number
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.output_dir.join(format!("heightmap_{frame:05}.png"))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
