//! Per-frame displacement of the ocean grid by the wave field.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use log::{debug, info};
use rayon::prelude::*;

use super::grid::SurfaceGrid;
use super::wave::WaveField;
use crate::error::Result;
use crate::params::{PhaseSpace, SurfaceConfig, WaveParams};

/// Offset added to one rest vertex for one instant
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Displacement {
    pub offset: [f32; 3],
}

impl Displacement {
    pub fn new(offset: Vec3) -> Self {
        Self {
            offset: offset.to_array(),
        }
    }

    pub fn vec3(&self) -> Vec3 {
        Vec3::from_array(self.offset)
    }
}

/// Owns the static grid and the wave field, and evaluates the surface at
/// caller-supplied times.
///
/// A simulator only exists once its grid has been built and validated, so
/// every method can be called without further checks.
#[derive(Debug)]
pub struct OceanSimulator {
    grid: SurfaceGrid,
    field: WaveField,
    phase_space: PhaseSpace,
    parallel: bool,
}

impl OceanSimulator {
    /// Build the grid described by `config` and attach `field`
    pub fn new(config: &SurfaceConfig, field: WaveField) -> Result<Self> {
        config.validate()?;
        let grid = SurfaceGrid::new(config.resolution, config.tile_size_m)?;
        info!(
            "Ocean simulator ready: {} waves, phase space {:?}, parallel {}",
            field.len(),
            config.phase_space,
            config.parallel
        );
        Ok(Self {
            grid,
            field,
            phase_space: config.phase_space,
            parallel: config.parallel,
        })
    }

    /// Build Gerstner waves from `waves` using the config's phase-rate model
    pub fn from_params(config: &SurfaceConfig, waves: &[WaveParams]) -> Result<Self> {
        let field = WaveField::from_params(waves, config.phase_rate)?;
        Self::new(config, field)
    }

    pub fn grid(&self) -> &SurfaceGrid {
        &self.grid
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn phase_space(&self) -> PhaseSpace {
        self.phase_space
    }

    /// Replace the grid after a resolution or tile-size change; waves are kept
    pub fn rebuild(&mut self, resolution: u32, tile_size_m: f32) -> Result<()> {
        self.grid = SurfaceGrid::new(resolution, tile_size_m)?;
        debug!("Rebuilt ocean grid at {resolution}x{resolution}");
        Ok(())
    }

    /// Spatial argument of the wave phase for a vertex, `None` past the last vertex
    pub fn rest_position(&self, index: usize) -> Option<Vec2> {
        match self.phase_space {
            PhaseSpace::GridIndex => self.grid.lattice_coords(index),
            PhaseSpace::World => self
                .grid
                .vertices()
                .get(index)
                .map(|v| Vec2::new(v.position[0], v.position[1])),
        }
    }

    /// Evaluate every vertex at `time_s` into a fresh array
    pub fn tick(&self, time_s: f32) -> Vec<Displacement> {
        let mut out = Vec::new();
        self.tick_into(time_s, &mut out);
        out
    }

    /// Evaluate every vertex at `time_s`, overwriting `out` in full.
    ///
    /// `out` is resized to the vertex count so its storage can be reused
    /// across frames.
    pub fn tick_into(&self, time_s: f32, out: &mut Vec<Displacement>) {
        let n = self.grid.resolution() as usize;
        out.resize(self.grid.vertex_count(), Displacement::default());

        if self.parallel {
            out.par_chunks_mut(n)
                .enumerate()
                .for_each(|(row, chunk)| self.fill_row(row, chunk, time_s));
        } else {
            out.chunks_mut(n)
                .enumerate()
                .for_each(|(row, chunk)| self.fill_row(row, chunk, time_s));
        }
    }

    fn fill_row(&self, row: usize, chunk: &mut [Displacement], time_s: f32) {
        let n = self.grid.resolution() as usize;
        let vertices = &self.grid.vertices()[row * n..(row + 1) * n];
        for (column, (slot, vertex)) in chunk.iter_mut().zip(vertices).enumerate() {
            let rest = match self.phase_space {
                PhaseSpace::GridIndex => Vec2::new(column as f32, row as f32),
                PhaseSpace::World => Vec2::new(vertex.position[0], vertex.position[1]),
            };
            *slot = Displacement::new(self.field.displace(rest, time_s));
        }
    }

    /// Rest position plus offset for every vertex (CPU-side preview)
    pub fn displaced_positions(&self, time_s: f32) -> Vec<Vec3> {
        self.grid
            .vertices()
            .iter()
            .zip(self.tick(time_s))
            .map(|(vertex, d)| Vec3::from_array(vertex.position) + d.vec3())
            .collect()
    }
}
