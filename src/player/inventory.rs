use crate::utils::error::{Result, WorldError};
use crate::world::BlockKind;

/// Hotbar of placeable blocks with one selected slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    slots: Vec<BlockKind>,
    selected: usize,
}

impl Inventory {
    pub fn new(slots: Vec<BlockKind>) -> Result<Self> {
        if slots.is_empty() {
            return Err(WorldError::EmptyInventory);
        }
        Ok(Self { slots, selected: 0 })
    }

    /// Selects slot `index`, wrapping past the end like the number keys do.
    pub fn select(&mut self, index: usize) -> BlockKind {
        self.selected = index % self.slots.len();
        self.selected()
    }

    pub fn selected(&self) -> BlockKind {
        self.slots[self.selected]
    }

    pub fn selected_slot(&self) -> usize {
        self.selected
    }
}
