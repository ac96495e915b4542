//! Ocean surface (grid + simulation) parameters.

use crate::error::{OceanError, Result};

/// Gravitational acceleration used by the dispersion relations (m/s²)
pub const GRAVITY_M_PER_S2: f32 = 9.81;

/// Resolutions at or above this make generation and ticking expensive
pub const EXPENSIVE_RESOLUTION: u32 = 2048;

/// Coordinate space fed into the spatial part of the wave phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseSpace {
    /// `(column, row)` lattice indices; wavelength is measured in vertices
    #[default]
    GridIndex,
    /// Rest position in world units; wavelength is measured in meters
    World,
}

/// How a wave's temporal phase rate is derived from its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseRateModel {
    /// `speed * 2 / wavelength` (visually tuned)
    #[default]
    SpeedOverWavelength,
    /// `speed * K`
    Celerity,
    /// Deep-water dispersion `sqrt(g * K)`; ignores `speed`
    DeepWater,
    /// `K`; ignores `speed`
    Wavenumber,
}

impl PhaseRateModel {
    /// Phase advance in radians per second for a wave
    pub fn phase_rate(self, speed: f32, wavelength_m: f32) -> f32 {
        let k = std::f32::consts::TAU / wavelength_m;
        match self {
            PhaseRateModel::SpeedOverWavelength => speed * 2.0 / wavelength_m,
            PhaseRateModel::Celerity => speed * k,
            PhaseRateModel::DeepWater => (GRAVITY_M_PER_S2 * k).sqrt(),
            PhaseRateModel::Wavenumber => k,
        }
    }
}

/// Ocean surface configuration
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Vertices per side (expected power of two, >= 2)
    pub resolution: u32,

    /// Edge length of the square tile (meters)
    pub tile_size_m: f32,

    /// Coordinate space for the spatial phase term
    pub phase_space: PhaseSpace,

    /// Dispersion model used to build waves from `WaveParams`
    pub phase_rate: PhaseRateModel,

    /// Fold rows on the rayon pool instead of the calling thread
    pub parallel: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            resolution: 64,
            tile_size_m: 4.0,
            phase_space: PhaseSpace::GridIndex,
            phase_rate: PhaseRateModel::SpeedOverWavelength,
            parallel: true,
        }
    }
}

impl SurfaceConfig {
    /// Grid spacing between neighbouring vertices (meters)
    pub fn step_m(&self) -> f32 {
        self.tile_size_m / self.resolution as f32
    }

    /// Validate resolution and tile size
    pub fn validate(&self) -> Result<()> {
        validate_grid(self.resolution, self.tile_size_m)
    }
}

/// Shared by `SurfaceConfig::validate` and raw grid generation
pub(crate) fn validate_grid(resolution: u32, tile_size_m: f32) -> Result<()> {
    if resolution < 2 {
        return Err(OceanError::invalid(format!(
            "resolution must be at least 2, got {resolution}"
        )));
    }
    // Indices are u32, so every vertex id must fit
    if (resolution as u64) * (resolution as u64) > u32::MAX as u64 {
        return Err(OceanError::invalid(format!(
            "resolution {resolution} exceeds the u32 index range"
        )));
    }
    if !tile_size_m.is_finite() || tile_size_m <= 0.0 {
        return Err(OceanError::invalid(format!(
            "tile size must be a positive finite number, got {tile_size_m}"
        )));
    }
    Ok(())
}
