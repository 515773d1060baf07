use glam::Vec2;

/// Snapshot of the controls for one tick. Held keys stay set between ticks;
/// `toggle_flying` and `mouse_delta` describe what happened since the last
/// tick and are cleared by [`InputState::reset`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sneak: bool,
    pub sprint: bool,
    pub toggle_flying: bool,
    pub mouse_delta: Vec2,
}

impl InputState {
    /// Forward/backward and left/right axes, each in -1..=1. Forward is
    /// negative, matching the heading convention of [`crate::player::Player`].
    pub fn strafe(&self) -> (i32, i32) {
        let along = self.backward as i32 - self.forward as i32;
        let across = self.right as i32 - self.left as i32;
        (along, across)
    }

    pub fn handle_mouse_move(&mut self, delta: Vec2) {
        self.mouse_delta += delta;
    }

    pub fn reset(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.toggle_flying = false;
    }
}
