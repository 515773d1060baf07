//! Block storage, sector partitioning and the deferred visibility queue
pub mod block_kind;
pub mod blocks_data;
pub mod core;
pub mod queue;
pub mod sector_coord;
pub mod spatial;

pub use block_kind::BlockKind;
pub use blocks_data::BlockRegistry;
pub use queue::{VisibilityOp, VisibilityQueue};
pub use sector_coord::SectorCoord;
pub use self::core::{RayHit, World};
pub use spatial::{neighborhood, SectorIndex};
