//! Physics systems
pub mod collision;

pub use collision::{collide, Collision};
