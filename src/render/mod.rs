pub mod batch;
pub mod mesh;
pub mod texture;

pub use batch::{BatchHandle, GeometrySink, QuadBatch};
pub use mesh::{block_quads, BlockQuads, QuadVertex};
pub use texture::{FaceUv, TextureAtlas, TextureDescriptor};
