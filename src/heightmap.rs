//! Vertical displacement field snapshots and PNG export.

use std::path::Path;

use image::{GrayImage, Luma};
use log::debug;

use crate::error::{OceanError, Result};
use crate::ocean::Displacement;

/// Largest absolute vertical offset in a displacement array (0 when empty)
pub fn peak_height(displacements: &[Displacement]) -> f32 {
    displacements
        .iter()
        .fold(0.0f32, |acc, d| acc.max(d.offset[2].abs()))
}

/// Z-offset of every vertex for one instant, row-major
#[derive(Debug, Clone)]
pub struct Heightmap {
    resolution: u32,
    heights: Vec<f32>,
    min: f32,
    max: f32,
}

impl Heightmap {
    /// Capture the heights of a displacement array for an N×N grid
    pub fn from_displacements(resolution: u32, displacements: &[Displacement]) -> Result<Self> {
        if resolution < 2 {
            return Err(OceanError::invalid(format!(
                "heightmap resolution must be at least 2, got {resolution}"
            )));
        }
        let expected = resolution as usize * resolution as usize;
        if displacements.len() != expected {
            return Err(OceanError::StreamMismatch {
                vertices: expected,
                displacements: displacements.len(),
            });
        }

        let heights: Vec<f32> = displacements.iter().map(|d| d.offset[2]).collect();
        let (min, max) = heights
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            });

        Ok(Self {
            resolution,
            heights,
            min,
            max,
        })
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Crest-to-trough range
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Height at `(column, row)`
    pub fn get(&self, column: u32, row: u32) -> Option<f32> {
        if column >= self.resolution || row >= self.resolution {
            return None;
        }
        self.heights
            .get((row * self.resolution + column) as usize)
            .copied()
    }

    /// 8-bit grayscale image normalised to `[min, max]`; a flat field is mid-grey
    pub fn to_image(&self) -> GrayImage {
        let range = self.range();
        GrayImage::from_fn(self.resolution, self.resolution, |x, y| {
            let h = self.heights[(y * self.resolution + x) as usize];
            let level = if range > f32::EPSILON {
                ((h - self.min) / range * 255.0).round() as u8
            } else {
                128
            };
            Luma([level])
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        debug!("Wrote heightmap {}", path.display());
        Ok(())
    }
}
