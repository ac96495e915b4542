//! Command-line argument parsing.

use clap::Parser;
use log::{info, warn};

use crate::error::{OceanError, Result};
use crate::params::{ExportConfig, PhaseRateModel, PhaseSpace, SurfaceConfig, WavePreset};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "gerstner-ocean")]
#[command(about = "Headless Gerstner ocean surface simulator", long_about = None)]
pub struct Args {
    /// Vertices per grid side (power of two recommended)
    #[arg(long, value_name = "N", default_value = "64")]
    pub resolution: u32,

    /// Edge length of the ocean tile (meters)
    #[arg(long, value_name = "METERS", default_value = "4.0")]
    pub tile_size: f32,

    /// Wave preset: default, calm, single, none
    #[arg(long, value_name = "PRESET", default_value = "default")]
    pub preset: String,

    /// Number of frames to simulate
    #[arg(long, value_name = "FRAMES", default_value = "120")]
    pub frames: usize,

    /// Simulated frame rate (frames per second)
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub fps: u32,

    /// Phase-rate model: tuned, celerity, deep-water, wavenumber
    #[arg(long, value_name = "MODEL", default_value = "tuned")]
    pub phase_rate: String,

    /// Phase coordinate space: grid, world
    #[arg(long, value_name = "SPACE", default_value = "grid")]
    pub phase_space: String,

    /// Tick on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Write heightmap PNGs into this directory
    #[arg(long, value_name = "DIR")]
    pub export: Option<String>,

    /// Heightmap interval when exporting (frames)
    #[arg(long, value_name = "N", default_value = "30")]
    pub export_every: usize,
}

impl Args {
    /// Parse wave preset from command-line arguments
    pub fn parse_preset(&self) -> WavePreset {
        match self.preset.to_lowercase().as_str() {
            "default" => WavePreset::Default,
            "calm" => WavePreset::Calm,
            "single" => WavePreset::Single,
            "none" => WavePreset::None,
            other => {
                warn!("Unknown wave preset '{}', using default", other);
                WavePreset::Default
            }
        }
    }

    /// Parse phase-rate model from command-line arguments
    pub fn parse_phase_rate(&self) -> PhaseRateModel {
        match self.phase_rate.to_lowercase().as_str() {
            "tuned" => PhaseRateModel::SpeedOverWavelength,
            "celerity" => PhaseRateModel::Celerity,
            "deep-water" => PhaseRateModel::DeepWater,
            "wavenumber" => PhaseRateModel::Wavenumber,
            other => {
                warn!("Unknown phase-rate model '{}', using tuned", other);
                PhaseRateModel::SpeedOverWavelength
            }
        }
    }

    /// Parse phase coordinate space from command-line arguments
    pub fn parse_phase_space(&self) -> PhaseSpace {
        match self.phase_space.to_lowercase().as_str() {
            "grid" => PhaseSpace::GridIndex,
            "world" => PhaseSpace::World,
            other => {
                warn!("Unknown phase space '{}', using grid", other);
                PhaseSpace::GridIndex
            }
        }
    }

    /// Surface configuration assembled from the arguments (validated)
    pub fn surface_config(&self) -> Result<SurfaceConfig> {
        let config = SurfaceConfig {
            resolution: self.resolution,
            tile_size_m: self.tile_size,
            phase_space: self.parse_phase_space(),
            phase_rate: self.parse_phase_rate(),
            parallel: !self.sequential,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create export configuration if heightmap export is enabled
    pub fn create_export_config(&self) -> Result<Option<ExportConfig>> {
        let Some(dir) = &self.export else {
            return Ok(None);
        };
        let config = ExportConfig::new(dir, self.export_every);
        config.validate()?;

        std::fs::create_dir_all(config.output_dir())?;
        info!("Exporting heightmaps to {}", config.output_dir().display());
        Ok(Some(config))
    }

    /// Seconds between simulated frames (validated)
    pub fn frame_dt_s(&self) -> Result<f32> {
        if self.fps == 0 {
            return Err(OceanError::invalid("frame rate must be at least 1 fps"));
        }
        Ok(1.0 / self.fps as f32)
    }
}
