use glam::IVec3;
use std::collections::{HashMap, HashSet};

use super::sector_coord::SectorCoord;

/// Buckets of block positions keyed by the sector they fall into.
#[derive(Debug, Clone)]
pub struct SectorIndex {
    sector_size: i32,
    buckets: HashMap<SectorCoord, Vec<IVec3>>,
}

impl SectorIndex {
    pub fn new(sector_size: i32) -> Self {
        assert!(sector_size > 0, "sector size must be positive, got {sector_size}");
        Self {
            sector_size,
            buckets: HashMap::new(),
        }
    }

    pub fn sector_size(&self) -> i32 {
        self.sector_size
    }

    pub fn sectorize(&self, position: IVec3) -> SectorCoord {
        SectorCoord::from_block(position, self.sector_size)
    }

    /// Callers insert a position at most once while it is in the world.
    pub fn insert(&mut self, position: IVec3) {
        let sector = self.sectorize(position);
        self.buckets.entry(sector).or_default().push(position);
    }

    pub fn remove(&mut self, position: IVec3) -> bool {
        let sector = self.sectorize(position);
        let Some(bucket) = self.buckets.get_mut(&sector) else {
            return false;
        };
        let Some(index) = bucket.iter().position(|p| *p == position) else {
            return false;
        };
        bucket.swap_remove(index);
        if bucket.is_empty() {
            self.buckets.remove(&sector);
        }
        true
    }

    pub fn positions(&self, sector: SectorCoord) -> &[IVec3] {
        self.buckets.get(&sector).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, position: IVec3) -> bool {
        self.positions(self.sectorize(position)).contains(&position)
    }

    pub fn sector_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Sectors within a disc of radius `pad + 1` around `center`, clipped to the
/// square `[-pad, pad]²`.
pub fn neighborhood(center: SectorCoord, pad: i32) -> HashSet<SectorCoord> {
    let limit = (pad + 1) * (pad + 1);
    let mut sectors = HashSet::new();
    for dx in -pad..=pad {
        for dz in -pad..=pad {
            if dx * dx + dz * dz > limit {
                continue;
            }
            sectors.insert(center.offset(dx, dz));
        }
    }
    sectors
}
