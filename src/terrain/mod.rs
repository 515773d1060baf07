//! World generation
pub mod generator;

pub use generator::{spawn_point, TerrainGenerator, MAX_OCTAVES};
