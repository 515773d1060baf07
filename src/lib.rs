pub mod config;
pub mod engine;
pub mod physics;
pub mod player;
pub mod render;
pub mod terrain;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::{EngineConfig, GameplayConfig, WorldGenConfig};
pub use engine::Engine;
pub use physics::{collide, Collision};
pub use player::{InputState, Inventory, Player};
pub use render::{GeometrySink, QuadBatch, TextureAtlas};
pub use terrain::TerrainGenerator;
pub use utils::error::{Result, WorldError};
pub use utils::ray::Ray;
pub use world::{BlockKind, RayHit, SectorCoord, World};
