//! src/utils/math.rs
//! Grid conversions shared by the world, ray and collision code
use glam::{IVec3, Vec3};

/// Face-adjacent offsets: up, down, left, right, front, back.
pub const FACES: [IVec3; 6] = [
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

/// Returns the block containing `position`.
///
/// Each component is rounded to the nearest integer with ties going to the
/// even neighbour, so `0.5` belongs to block 0 and `1.5` to block 2.
pub fn normalize(position: Vec3) -> IVec3 {
    IVec3::new(
        position.x.round_ties_even() as i32,
        position.y.round_ties_even() as i32,
        position.z.round_ties_even() as i32,
    )
}

pub fn neighbors(position: IVec3) -> impl Iterator<Item = IVec3> {
    FACES.into_iter().map(move |face| position + face)
}

/// Vertices of the cube centred on `center` with half-size `n`, grouped as
/// four corners per face in the order top, bottom, left, right, front, back.
pub fn cube_vertices(center: Vec3, n: f32) -> [Vec3; 24] {
    let Vec3 { x, y, z } = center;
    [
        // top
        Vec3::new(x - n, y + n, z - n),
        Vec3::new(x - n, y + n, z + n),
        Vec3::new(x + n, y + n, z + n),
        Vec3::new(x + n, y + n, z - n),
        // bottom
        Vec3::new(x - n, y - n, z - n),
        Vec3::new(x + n, y - n, z - n),
        Vec3::new(x + n, y - n, z + n),
        Vec3::new(x - n, y - n, z + n),
        // left
        Vec3::new(x - n, y - n, z - n),
        Vec3::new(x - n, y - n, z + n),
        Vec3::new(x - n, y + n, z + n),
        Vec3::new(x - n, y + n, z - n),
        // right
        Vec3::new(x + n, y - n, z + n),
        Vec3::new(x + n, y - n, z - n),
        Vec3::new(x + n, y + n, z - n),
        Vec3::new(x + n, y + n, z + n),
        // front
        Vec3::new(x - n, y - n, z + n),
        Vec3::new(x + n, y - n, z + n),
        Vec3::new(x + n, y + n, z + n),
        Vec3::new(x - n, y + n, z + n),
        // back
        Vec3::new(x + n, y - n, z - n),
        Vec3::new(x - n, y - n, z - n),
        Vec3::new(x - n, y + n, z - n),
        Vec3::new(x + n, y + n, z - n),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rounds_half_to_even() {
        assert_eq!(normalize(Vec3::new(0.5, 1.5, -0.5)), IVec3::new(0, 2, 0));
        assert_eq!(normalize(Vec3::new(0.49, 0.51, -2.7)), IVec3::new(0, 1, -3));
    }

    #[test]
    fn test_neighbors_cover_all_faces() {
        let around: Vec<IVec3> = neighbors(IVec3::new(1, 1, 1)).collect();
        assert_eq!(around.len(), 6);
        assert!(around.contains(&IVec3::new(1, 2, 1)));
        assert!(around.contains(&IVec3::new(1, 1, 0)));
        assert!(!around.contains(&IVec3::new(1, 1, 1)));
    }

    #[test]
    fn test_cube_vertices_extent() {
        let vertices = cube_vertices(Vec3::new(2.0, 0.0, -1.0), 0.5);
        let min = vertices.iter().copied().fold(Vec3::splat(f32::MAX), Vec3::min);
        let max = vertices.iter().copied().fold(Vec3::splat(f32::MIN), Vec3::max);
        assert_eq!(min, Vec3::new(1.5, -0.5, -1.5));
        assert_eq!(max, Vec3::new(2.5, 0.5, -0.5));
    }
}
