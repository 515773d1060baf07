use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("Unknown block kind: {0}")]
    UnknownBlock(String),

    #[error("Texture not found: {0:?}")]
    TextureNotFound(PathBuf),

    #[error("Texture atlas {path:?} is {width}x{height}, expected a square divisible by {grid}")]
    InvalidAtlas {
        path: PathBuf,
        width: u32,
        height: u32,
        grid: u32,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid noise layer: {0}")]
    InvalidNoiseLayer(String),

    #[error("Invalid sector settings: {0}")]
    InvalidSectorConfig(String),

    #[error("Inventory must hold at least one block")]
    EmptyInventory,
}

pub type Result<T> = std::result::Result<T, WorldError>;
