use glam::IVec3;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::render::texture::TextureDescriptor;

#[derive(Debug, Clone, PartialEq)]
pub enum VisibilityOp {
    Show {
        position: IVec3,
        descriptor: TextureDescriptor,
    },
    Hide {
        position: IVec3,
    },
}

impl VisibilityOp {
    pub fn position(&self) -> IVec3 {
        match self {
            VisibilityOp::Show { position, .. } | VisibilityOp::Hide { position } => *position,
        }
    }
}

/// FIFO of deferred materialisation work.
#[derive(Debug, Default)]
pub struct VisibilityQueue {
    ops: VecDeque<VisibilityOp>,
}

impl VisibilityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: VisibilityOp) {
        self.ops.push_back(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisibilityOp> {
        self.ops.iter()
    }

    /// Runs ops in order until the queue is empty or `budget` has elapsed.
    /// At least one op runs if any is pending. Returns how many ran.
    pub fn drain_for<F>(&mut self, budget: Duration, mut execute: F) -> usize
    where
        F: FnMut(VisibilityOp),
    {
        let start = Instant::now();
        let mut executed = 0;
        while let Some(op) = self.ops.pop_front() {
            execute(op);
            executed += 1;
            if start.elapsed() >= budget {
                break;
            }
        }
        executed
    }

    pub fn drain_all<F>(&mut self, mut execute: F) -> usize
    where
        F: FnMut(VisibilityOp),
    {
        let mut executed = 0;
        while let Some(op) = self.ops.pop_front() {
            execute(op);
            executed += 1;
        }
        executed
    }
}
