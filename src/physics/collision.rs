use glam::Vec3;

use crate::render::batch::GeometrySink;
use crate::utils::math::{normalize, FACES};
use crate::world::World;

/// Result of pushing a body out of the blocks around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub position: Vec3,
    /// Set when a floor or ceiling was hit; the caller zeroes its vertical
    /// velocity.
    pub stop_vertical: bool,
}

/// Resolves a body `height` blocks tall standing at `position` against the
/// blocks of `world`, allowing it to sink at most `pad` into any face.
///
/// Only the lowest occupied slice along each face axis is considered.
pub fn collide<S: GeometrySink>(world: &World<S>, position: Vec3, height: f32, pad: f32) -> Collision {
    let mut p = position;
    let np = normalize(position);
    let slices = height.floor() as i32;
    let mut stop_vertical = false;

    for face in FACES {
        for axis in 0..3 {
            if face[axis] == 0 {
                continue;
            }
            let direction = face[axis] as f32;
            let d = (p[axis] - np[axis] as f32) * direction;
            if d < pad {
                continue;
            }
            for dy in 0..slices {
                let mut op = np;
                op.y -= dy;
                op[axis] += face[axis];
                if !world.contains(op) {
                    continue;
                }
                p[axis] -= (d - pad) * direction;
                if face.x == 0 && face.z == 0 {
                    stop_vertical = true;
                }
                break;
            }
        }
    }

    Collision {
        position: p,
        stop_vertical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::world::{BlockKind, BlockRegistry};
    use glam::IVec3;

    fn world_with(blocks: &[IVec3]) -> World {
        let mut world = World::new(&EngineConfig::default(), BlockRegistry::default());
        for block in blocks {
            world.add_block(*block, BlockKind::Dirt, false);
        }
        world
    }

    #[test]
    fn test_shallow_contact_is_ignored() {
        let world = world_with(&[IVec3::ZERO]);
        let result = collide(&world, Vec3::new(0.0, 1.1, 0.0), 2.0, 0.2);
        assert_eq!(result.position, Vec3::new(0.0, 1.1, 0.0));
        assert!(!result.stop_vertical);
    }

    #[test]
    fn test_floor_pushes_up() {
        let world = world_with(&[IVec3::ZERO]);
        let result = collide(&world, Vec3::new(0.0, 0.7, 0.0), 2.0, 0.2);
        assert!((result.position.y - 0.8).abs() < 1e-5);
        assert_eq!(result.position.x, 0.0);
        assert!(result.stop_vertical);
    }

    #[test]
    fn test_wall_pushes_back_without_vertical_stop() {
        // Wall at x = 1 reaching the lower body slice
        let world = world_with(&[IVec3::new(1, 4, 0), IVec3::new(1, 5, 0)]);
        let result = collide(&world, Vec3::new(0.4, 5.0, 0.0), 2.0, 0.2);
        assert!((result.position.x - 0.2).abs() < 1e-5);
        assert_eq!(result.position.y, 5.0);
        assert!(!result.stop_vertical);
    }

    #[test]
    fn test_empty_world_never_moves() {
        let world = world_with(&[]);
        let start = Vec3::new(3.4, 7.45, -2.3);
        let result = collide(&world, start, 2.0, 0.2);
        assert_eq!(result.position, start);
    }
}
