//! Player movement, controls and hotbar
pub mod input;
pub mod inventory;
pub mod physics;

pub use input::InputState;
pub use inventory::Inventory;
pub use physics::Player;
