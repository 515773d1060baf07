pub mod core;
pub mod gameplay;
pub mod rendering;
pub mod sectors;
pub mod worldgen;

pub use self::core::{load_or_create_config, EngineConfig};
pub use gameplay::GameplayConfig;
pub use rendering::RenderConfig;
pub use sectors::SectorConfig;
pub use worldgen::{NoiseLayerConfig, WorldGenConfig};
