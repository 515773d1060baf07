use glam::{IVec2, IVec3, Vec3};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use crate::utils::math::normalize;

/// Horizontal partition key of the block grid. Sectors span every height, so
/// only x and z are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorCoord(pub IVec2);

impl PartialOrd for SectorCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SectorCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0.x.cmp(&other.0.x) {
            Ordering::Equal => self.0.y.cmp(&other.0.y),
            ord => ord,
        }
    }
}

impl SectorCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self(IVec2::new(x, z))
    }

    pub fn from_block(position: IVec3, sector_size: i32) -> Self {
        Self::new(
            position.x.div_euclid(sector_size),
            position.z.div_euclid(sector_size),
        )
    }

    pub fn from_world_pos(position: Vec3, sector_size: i32) -> Self {
        Self::from_block(normalize(position), sector_size)
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn z(&self) -> i32 {
        self.0.y
    }

    pub fn offset(&self, dx: i32, dz: i32) -> Self {
        Self(self.0 + IVec2::new(dx, dz))
    }
}

impl Display for SectorCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, 0, {})", self.x(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_block_floors_negative() {
        assert_eq!(SectorCoord::from_block(IVec3::new(15, 80, 16), 16), SectorCoord::new(0, 1));
        assert_eq!(SectorCoord::from_block(IVec3::new(-1, 0, -16), 16), SectorCoord::new(-1, -1));
        assert_eq!(SectorCoord::from_block(IVec3::new(-17, 0, 0), 16), SectorCoord::new(-2, 0));
    }

    #[test]
    fn test_from_world_pos_rounds_first() {
        // 15.6 rounds into block 16, the first block of sector 1
        assert_eq!(
            SectorCoord::from_world_pos(Vec3::new(15.6, 3.0, -0.4), 16),
            SectorCoord::new(1, 0)
        );
    }

    #[test]
    fn test_ordering_is_x_then_z() {
        let mut coords = vec![
            SectorCoord::new(1, -3),
            SectorCoord::new(0, 5),
            SectorCoord::new(1, -4),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![SectorCoord::new(0, 5), SectorCoord::new(1, -4), SectorCoord::new(1, -3)]
        );
        assert_eq!(SectorCoord::new(2, -1).to_string(), "(2, 0, -1)");
    }
}
