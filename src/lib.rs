//! Gerstner ocean library - procedural tile mesh and trochoidal wave displacement

pub mod cli;
pub mod error;
pub mod heightmap;
pub mod ocean;
pub mod params;
pub mod rendering;
