//! Ocean surface simulation: static tile mesh plus layered Gerstner waves.

mod grid;
mod simulator;
mod wave;

// Re-export public types
pub use grid::{generate, GridVertex, SurfaceGrid, WATER_COLOR};
pub use simulator::{Displacement, OceanSimulator};
pub use wave::{GerstnerWave, WaveField, WaveGenerator};
