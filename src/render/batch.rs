use std::collections::HashMap;

use super::mesh::{BlockQuads, QuadVertex};

/// Receives geometry for blocks entering and leaving the shown set.
///
/// The world store owns every handle it gets back and releases it exactly
/// once; implementations never see a handle twice.
pub trait GeometrySink {
    type Handle;

    fn allocate(&mut self, quads: &BlockQuads) -> Self::Handle;
    fn release(&mut self, handle: Self::Handle);
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BatchHandle(u64);

/// In-memory batch of live block quads, ready to be uploaded as one vertex
/// buffer.
#[derive(Debug, Default)]
pub struct QuadBatch {
    entries: HashMap<u64, BlockQuads>,
    next_id: u64,
    allocated: u64,
    released: u64,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total (allocated, released) over the batch's lifetime.
    pub fn totals(&self) -> (u64, u64) {
        (self.allocated, self.released)
    }

    pub fn vertices(&self) -> Vec<QuadVertex> {
        self.entries.values().flatten().copied().collect()
    }

    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(self.vertices().as_slice()).to_vec()
    }
}

impl GeometrySink for QuadBatch {
    type Handle = BatchHandle;

    fn allocate(&mut self, quads: &BlockQuads) -> BatchHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.allocated += 1;
        self.entries.insert(id, *quads);
        BatchHandle(id)
    }

    fn release(&mut self, handle: BatchHandle) {
        if self.entries.remove(&handle.0).is_some() {
            self.released += 1;
        }
    }
}
