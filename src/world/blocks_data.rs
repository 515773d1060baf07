// blocks_data.rs - texture descriptors for every block kind

use crate::render::texture::{TextureAtlas, TextureDescriptor};
use crate::world::block_kind::BlockKind;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct BlockRegistry {
    atlas: TextureAtlas,
    descriptors: HashMap<BlockKind, TextureDescriptor>,
}

impl BlockRegistry {
    pub fn new(atlas: TextureAtlas) -> Self {
        let descriptors = BlockKind::ALL
            .into_iter()
            .map(|kind| {
                let (top, bottom, side) = kind.atlas_cells();
                (kind, atlas.tex_coords(top, bottom, side))
            })
            .collect();

        Self { atlas, descriptors }
    }

    pub fn atlas(&self) -> TextureAtlas {
        self.atlas
    }

    pub fn descriptor(&self, kind: BlockKind) -> TextureDescriptor {
        // Every kind is registered in `new`.
        self.descriptors[&kind]
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new(TextureAtlas::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_registered() {
        let registry = BlockRegistry::default();
        for kind in BlockKind::ALL {
            let (top, _, _) = kind.atlas_cells();
            assert_eq!(registry.descriptor(kind).faces[0], registry.atlas().tex_coord(top));
        }
    }

    #[test]
    fn test_grid_size_changes_uvs() {
        let coarse = BlockRegistry::new(TextureAtlas::new(2));
        let fine = BlockRegistry::default();
        assert_ne!(
            coarse.descriptor(BlockKind::Sand),
            fine.descriptor(BlockKind::Sand)
        );
    }
}
