//! Error type shared by grid generation, the stream contract and heightmap export.

use std::fmt;

/// Errors raised by the ocean surface core.
///
/// Simulation itself never fails; everything here is reported once, at
/// configuration or export time.
#[derive(Debug)]
pub enum OceanError {
    /// Rejected resolution, tile size, wave or export settings.
    InvalidConfiguration(String),
    /// Displacement stream is not index-aligned with the vertex stream.
    StreamMismatch { vertices: usize, displacements: usize },
    /// Filesystem error while writing an export.
    Io(std::io::Error),
    /// PNG encoding failed.
    Image(image::ImageError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, OceanError>;

impl OceanError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        OceanError::InvalidConfiguration(msg.into())
    }
}

impl fmt::Display for OceanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OceanError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {msg}"),
            OceanError::StreamMismatch {
                vertices,
                displacements,
            } => write!(
                f,
                "Stream mismatch: {displacements} displacements for {vertices} vertices"
            ),
            OceanError::Io(e) => write!(f, "I/O error: {e}"),
            OceanError::Image(e) => write!(f, "Image error: {e}"),
        }
    }
}

impl std::error::Error for OceanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OceanError::Io(e) => Some(e),
            OceanError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OceanError {
    fn from(e: std::io::Error) -> Self {
        OceanError::Io(e)
    }
}

impl From<image::ImageError> for OceanError {
    fn from(e: image::ImageError) -> Self {
        OceanError::Image(e)
    }
}
