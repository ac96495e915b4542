//! Gerstner wave parameters and preset wave fields.

use crate::error::{OceanError, Result};

use super::ocean::GRAVITY_M_PER_S2;

/// Choppiness applied to every configured wave (dimensionless, 0 = pure bobbing)
pub const DEFAULT_STEEPNESS: f32 = 0.5;

/// One wave's user-facing configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Travel direction in the grid plane (normalized on construction)
    pub direction: [f32; 2],

    /// Crest height above rest (meters)
    pub amplitude_m: f32,

    /// Crest-to-crest distance (grid units or meters, see `PhaseSpace`)
    pub wavelength_m: f32,

    /// Speed term fed into the phase-rate model
    pub speed: f32,
}

impl WaveParams {
    pub fn new(direction: [f32; 2], amplitude_m: f32, wavelength_m: f32, speed: f32) -> Self {
        Self {
            direction,
            amplitude_m,
            wavelength_m,
            speed,
        }
    }

    /// Wave whose speed follows `10 * sqrt(g * K)`
    pub fn with_tuned_speed(direction: [f32; 2], amplitude_m: f32, wavelength_m: f32) -> Self {
        let k = std::f32::consts::TAU / wavelength_m;
        Self::new(
            direction,
            amplitude_m,
            wavelength_m,
            10.0 * (GRAVITY_M_PER_S2 * k).sqrt(),
        )
    }

    pub fn validate(&self) -> Result<()> {
        let [dx, dy] = self.direction;
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return Err(OceanError::invalid(format!(
                "wave direction must be a finite non-zero vector, got ({dx}, {dy})"
            )));
        }
        if !self.amplitude_m.is_finite() || self.amplitude_m <= 0.0 {
            return Err(OceanError::invalid(format!(
                "wave amplitude must be positive, got {}",
                self.amplitude_m
            )));
        }
        if !self.wavelength_m.is_finite() || self.wavelength_m <= 0.0 {
            return Err(OceanError::invalid(format!(
                "wavelength must be positive, got {}",
                self.wavelength_m
            )));
        }
        if !self.speed.is_finite() {
            return Err(OceanError::invalid(format!(
                "wave speed must be finite, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

/// Named wave fields selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WavePreset {
    /// Five crossing swells
    #[default]
    Default,
    /// Two long, low swells
    Calm,
    /// One wave travelling along +x
    Single,
    /// Flat water
    None,
}

impl WavePreset {
    pub fn waves(self) -> Vec<WaveParams> {
        match self {
            WavePreset::Default => vec![
                WaveParams::new([-0.5, 3.0], 1.2, 32.0, 40.4),
                WaveParams::new([2.0, -4.0], 1.4, 26.0, 15.4),
                WaveParams::new([2.0, 7.0], 1.0, 30.0, 17.8),
                WaveParams::new([-3.0, 4.0], 1.82, 160.0, 18.3),
                WaveParams::new([56.0, -34.0], 1.67, 34.0, 21.1),
            ],
            WavePreset::Calm => vec![
                WaveParams::new([1.0, 0.7], 0.4, 80.0, 6.0),
                WaveParams::new([-2.0, -3.0], 0.3, 120.0, 4.5),
            ],
            WavePreset::Single => vec![WaveParams::new([1.0, 0.0], 1.0, 32.0, 1.0)],
            WavePreset::None => Vec::new(),
        }
    }
}
