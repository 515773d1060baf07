use glam::{IVec3, Vec3};
use log::debug;
use std::collections::HashMap;
use std::time::Duration;

use super::{
    block_kind::BlockKind,
    blocks_data::BlockRegistry,
    queue::{VisibilityOp, VisibilityQueue},
    sector_coord::SectorCoord,
    spatial::{neighborhood, SectorIndex},
};
use crate::{
    config::EngineConfig,
    render::{batch::GeometrySink, mesh::block_quads, texture::TextureDescriptor, QuadBatch},
    utils::{math::neighbors, ray::Ray},
};

/// First occupied block along a ray, plus the block visited just before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayHit {
    pub block: IVec3,
    pub previous: Option<IVec3>,
}

/// Handles owned on behalf of the renderer, at most one per position.
struct GeometryStore<S: GeometrySink> {
    sink: S,
    handles: HashMap<IVec3, (S::Handle, TextureDescriptor)>,
}

impl<S: GeometrySink> GeometryStore<S> {
    fn new(sink: S) -> Self {
        Self {
            sink,
            handles: HashMap::new(),
        }
    }

    /// Brings the geometry at one position in line with `shown`. Ops that
    /// were overtaken by later state changes are no-ops.
    fn apply(&mut self, shown: &HashMap<IVec3, TextureDescriptor>, op: VisibilityOp) {
        match op {
            VisibilityOp::Show {
                position,
                descriptor,
            } => {
                if shown.get(&position) != Some(&descriptor) {
                    return;
                }
                if let Some((_, current)) = self.handles.get(&position) {
                    if *current == descriptor {
                        return;
                    }
                }
                self.release(position);
                let handle = self.sink.allocate(&block_quads(position, &descriptor));
                self.handles.insert(position, (handle, descriptor));
            }
            VisibilityOp::Hide { position } => {
                if !shown.contains_key(&position) {
                    self.release(position);
                }
            }
        }
    }

    fn release(&mut self, position: IVec3) {
        if let Some((handle, _)) = self.handles.remove(&position) {
            self.sink.release(handle);
        }
    }
}

/// Authoritative block map together with everything derived from it: the
/// shown set, sector buckets, the pending visibility queue and the live
/// renderer geometry.
pub struct World<S: GeometrySink = QuadBatch> {
    blocks: HashMap<IVec3, BlockKind>,
    shown: HashMap<IVec3, TextureDescriptor>,
    sectors: SectorIndex,
    queue: VisibilityQueue,
    geometry: GeometryStore<S>,
    registry: BlockRegistry,
    tick_budget: Duration,
    pad: i32,
}

impl World<QuadBatch> {
    pub fn new(config: &EngineConfig, registry: BlockRegistry) -> Self {
        Self::with_sink(config, registry, QuadBatch::new())
    }
}

impl<S: GeometrySink> World<S> {
    pub fn with_sink(config: &EngineConfig, registry: BlockRegistry, sink: S) -> Self {
        Self {
            blocks: HashMap::new(),
            shown: HashMap::new(),
            sectors: SectorIndex::new(config.sectors.sector_size),
            queue: VisibilityQueue::new(),
            geometry: GeometryStore::new(sink),
            registry,
            tick_budget: config.gameplay.tick_budget(),
            pad: config.sectors.pad,
        }
    }

    /// True if at least one face of `position` touches an empty cell.
    pub fn exposed(&self, position: IVec3) -> bool {
        neighbors(position).any(|neighbor| !self.blocks.contains_key(&neighbor))
    }

    /// Places `kind` at `position`, replacing whatever was there.
    ///
    /// With `immediate` the block is drawn right away when exposed and its
    /// neighbours are re-checked. Otherwise only the world and the sector
    /// index change; showing is left to the sector pass.
    pub fn add_block(&mut self, position: IVec3, kind: BlockKind, immediate: bool) {
        if self.blocks.contains_key(&position) {
            self.remove_block(position, immediate);
        }
        self.blocks.insert(position, kind);
        self.sectors.insert(position);
        if immediate {
            if self.exposed(position) {
                self.show_block(position, true);
            }
            self.check_neighbors(position);
        }
    }

    /// Panics if `position` holds no block.
    pub fn remove_block(&mut self, position: IVec3, immediate: bool) {
        assert!(
            self.blocks.remove(&position).is_some(),
            "remove_block: no block at {position}"
        );
        let indexed = self.sectors.remove(position);
        debug_assert!(indexed, "remove_block: {position} missing from its sector");
        if self.shown.contains_key(&position) {
            self.hide_block(position, immediate);
        }
        if immediate {
            self.check_neighbors(position);
        }
    }

    /// Shows newly exposed neighbours of `position` and hides the ones that
    /// became enclosed.
    pub fn check_neighbors(&mut self, position: IVec3) {
        for neighbor in neighbors(position) {
            if !self.blocks.contains_key(&neighbor) {
                continue;
            }
            let shown = self.shown.contains_key(&neighbor);
            if self.exposed(neighbor) {
                if !shown {
                    self.show_block(neighbor, true);
                }
            } else if shown {
                self.hide_block(neighbor, true);
            }
        }
    }

    /// Panics if `position` is already shown or holds no block.
    pub fn show_block(&mut self, position: IVec3, immediate: bool) {
        let Some(kind) = self.blocks.get(&position).copied() else {
            panic!("show_block: no block at {position}");
        };
        assert!(
            !self.shown.contains_key(&position),
            "show_block: {position} is already shown"
        );
        let descriptor = self.registry.descriptor(kind);
        self.shown.insert(position, descriptor);
        let op = VisibilityOp::Show {
            position,
            descriptor,
        };
        if immediate {
            self.geometry.apply(&self.shown, op);
        } else {
            self.queue.push(op);
        }
    }

    /// Panics if `position` is not shown.
    pub fn hide_block(&mut self, position: IVec3, immediate: bool) {
        assert!(
            self.shown.remove(&position).is_some(),
            "hide_block: {position} is not shown"
        );
        let op = VisibilityOp::Hide { position };
        if immediate {
            self.geometry.apply(&self.shown, op);
        } else {
            self.queue.push(op);
        }
    }

    pub fn show_sector(&mut self, sector: SectorCoord) {
        let pending: Vec<IVec3> = self
            .sectors
            .positions(sector)
            .iter()
            .copied()
            .filter(|p| !self.shown.contains_key(p) && self.exposed(*p))
            .collect();
        for position in pending {
            self.show_block(position, false);
        }
    }

    pub fn hide_sector(&mut self, sector: SectorCoord) {
        let pending: Vec<IVec3> = self
            .sectors
            .positions(sector)
            .iter()
            .copied()
            .filter(|p| self.shown.contains_key(p))
            .collect();
        for position in pending {
            self.hide_block(position, false);
        }
    }

    /// Moves the visible neighbourhood from around `before` to around
    /// `after`. Sectors in both neighbourhoods are left alone.
    pub fn change_sectors(&mut self, before: Option<SectorCoord>, after: Option<SectorCoord>) {
        let old = before.map(|s| neighborhood(s, self.pad)).unwrap_or_default();
        let new = after.map(|s| neighborhood(s, self.pad)).unwrap_or_default();

        let mut show: Vec<SectorCoord> = new.difference(&old).copied().collect();
        let mut hide: Vec<SectorCoord> = old.difference(&new).copied().collect();
        show.sort();
        hide.sort();

        debug!(
            "Sector change {:?} -> {:?}: showing {} sectors, hiding {}",
            before,
            after,
            show.len(),
            hide.len()
        );

        for sector in show {
            self.show_sector(sector);
        }
        for sector in hide {
            self.hide_sector(sector);
        }
    }

    /// Marches from `origin` along `direction` and returns the first block
    /// hit, or `None` when nothing is within `max_distance`.
    pub fn hit_test(&self, origin: Vec3, direction: Vec3, max_distance: u32) -> Option<RayHit> {
        let ray = Ray::new(origin, direction);
        let mut previous = None;
        for key in ray.march(max_distance) {
            if previous != Some(key) && self.blocks.contains_key(&key) {
                return Some(RayHit {
                    block: key,
                    previous,
                });
            }
            previous = Some(key);
        }
        None
    }

    /// Runs pending ops for at most one tick's worth of wall-clock time.
    pub fn process_queue(&mut self) -> usize {
        let Self {
            queue,
            shown,
            geometry,
            tick_budget,
            ..
        } = self;
        let executed = queue.drain_for(*tick_budget, |op| geometry.apply(shown, op));
        if executed > 0 {
            debug!("Processed {} visibility ops, {} pending", executed, queue.len());
        }
        executed
    }

    pub fn process_entire_queue(&mut self) -> usize {
        let Self {
            queue,
            shown,
            geometry,
            ..
        } = self;
        let executed = queue.drain_all(|op| geometry.apply(shown, op));
        debug!("Drained {} visibility ops", executed);
        executed
    }

    pub fn blocks(&self) -> &HashMap<IVec3, BlockKind> {
        &self.blocks
    }

    pub fn shown(&self) -> &HashMap<IVec3, TextureDescriptor> {
        &self.shown
    }

    pub fn block_at(&self, position: IVec3) -> Option<BlockKind> {
        self.blocks.get(&position).copied()
    }

    pub fn contains(&self, position: IVec3) -> bool {
        self.blocks.contains_key(&position)
    }

    pub fn is_shown(&self, position: IVec3) -> bool {
        self.shown.contains_key(&position)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    /// Positions currently holding renderer geometry.
    pub fn materialized_count(&self) -> usize {
        self.geometry.handles.len()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn sectors(&self) -> &SectorIndex {
        &self.sectors
    }

    pub fn sectorize(&self, position: Vec3) -> SectorCoord {
        SectorCoord::from_world_pos(position, self.sectors.sector_size())
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &S {
        &self.geometry.sink
    }
}
