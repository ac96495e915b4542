//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers are collected here with:
//! - Physical units (meters, seconds, radians)
//! - Documented ranges and meanings
//! - Validation that reports `InvalidConfiguration`

mod export;
mod ocean;
mod waves;

// Re-export all types
pub use export::ExportConfig;
pub use ocean::{
    PhaseRateModel, PhaseSpace, SurfaceConfig, EXPENSIVE_RESOLUTION, GRAVITY_M_PER_S2,
};
pub(crate) use ocean::validate_grid;
pub use waves::{WaveParams, WavePreset, DEFAULT_STEEPNESS};
