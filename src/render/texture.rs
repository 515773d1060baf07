use crate::utils::error::{Result, WorldError};
use crate::world::block_kind::AtlasCell;
use glam::Vec2;
use log::info;
use std::path::Path;

/// UV corners of one face quad.
pub type FaceUv = [Vec2; 4];

/// Texture coordinates for the six faces of a cube, in the same face order
/// as [`cube_vertices`](crate::utils::math::cube_vertices).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureDescriptor {
    pub faces: [FaceUv; 6],
}

impl TextureDescriptor {
    pub fn tex_coords(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.faces.iter().flatten().copied()
    }
}

/// A square texture divided into a `grid` x `grid` array of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureAtlas {
    grid: u32,
}

impl TextureAtlas {
    pub fn new(grid: u32) -> Self {
        Self { grid: grid.max(1) }
    }

    /// Checks that the atlas image exists and splits evenly into the grid.
    pub fn open<P: AsRef<Path>>(path: P, grid: u32) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WorldError::TextureNotFound(path.to_path_buf()));
        }

        let (width, height) = image::image_dimensions(path)?;
        if width != height || grid == 0 || width % grid != 0 {
            return Err(WorldError::InvalidAtlas {
                path: path.to_path_buf(),
                width,
                height,
                grid,
            });
        }

        info!("Texture atlas {:?}: {}x{} in {}x{} cells", path, width, height, grid, grid);
        Ok(Self::new(grid))
    }

    pub fn grid(&self) -> u32 {
        self.grid
    }

    pub fn tex_coord(&self, (x, y): AtlasCell) -> FaceUv {
        let m = 1.0 / self.grid as f32;
        let (dx, dy) = (x as f32 * m, y as f32 * m);
        [
            Vec2::new(dx, dy),
            Vec2::new(dx + m, dy),
            Vec2::new(dx + m, dy + m),
            Vec2::new(dx, dy + m),
        ]
    }

    pub fn tex_coords(&self, top: AtlasCell, bottom: AtlasCell, side: AtlasCell) -> TextureDescriptor {
        let side = self.tex_coord(side);
        TextureDescriptor {
            faces: [
                self.tex_coord(top),
                self.tex_coord(bottom),
                side,
                side,
                side,
                side,
            ],
        }
    }
}

impl Default for TextureAtlas {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_tex_coord_cell_bounds() {
        let atlas = TextureAtlas::default();
        let quad = atlas.tex_coord((2, 1));
        assert_eq!(quad[0], Vec2::new(0.5, 0.25));
        assert_eq!(quad[2], Vec2::new(0.75, 0.5));
    }

    #[test]
    fn test_sides_share_cell() {
        let atlas = TextureAtlas::default();
        let descriptor = atlas.tex_coords((1, 0), (0, 1), (0, 0));
        assert_eq!(descriptor.faces[0], atlas.tex_coord((1, 0)));
        assert_eq!(descriptor.faces[1], atlas.tex_coord((0, 1)));
        for side in &descriptor.faces[2..] {
            assert_eq!(*side, atlas.tex_coord((0, 0)));
        }
        assert_eq!(descriptor.tex_coords().count(), 24);
    }

    #[test]
    fn test_missing_atlas() {
        let dir = tempdir().unwrap();
        let result = TextureAtlas::open(dir.path().join("texture.png"), 4);
        assert!(matches!(result, Err(WorldError::TextureNotFound(_))));
    }

    #[test]
    fn test_atlas_must_split_evenly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("texture.png");
        image::RgbaImage::new(30, 30).save(&path).unwrap();

        assert!(matches!(
            TextureAtlas::open(&path, 4),
            Err(WorldError::InvalidAtlas { width: 30, .. })
        ));
        assert_eq!(TextureAtlas::open(&path, 3).unwrap().grid(), 3);
    }
}
