pub mod error;
pub mod math;
pub mod ray;

pub use error::{Result, WorldError};
pub use math::{cube_vertices, neighbors, normalize, FACES};
pub use ray::Ray;
