use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::world::BlockKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub ticks_per_sec: u32,
    pub walking_speed: f32,
    pub sprinting_speed: f32,
    pub sneaking_speed: f32,
    pub flying_speed: f32,
    pub flying_sprint_speed: f32,
    pub flying_y_speed: f32,
    pub gravity: f32,
    pub max_jump_height: f32,
    pub terminal_velocity: f32,
    pub player_height: f32,
    /// Overlap with a neighbouring block tolerated before a collision counts.
    /// 0 makes any contact collide, 0.49 sinks into the ground and 0.5 or
    /// more falls through it.
    pub collision_pad: f32,
    pub reach: u32,
    pub mouse_sensitivity: f32,
    pub substeps: u32,
    pub max_dt: f32,
    /// Blocks offered for placement, selected with the number keys.
    pub inventory: Vec<BlockKind>,
}

impl GameplayConfig {
    pub fn tick_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_sec.max(1) as f64)
    }

    /// Take-off speed reaching exactly `max_jump_height`: from
    /// v_t = v_0 - g t and s = v_0 t - g t^2 / 2 at the apex.
    pub fn jump_speed(&self) -> f32 {
        (2.0 * self.gravity * self.max_jump_height).sqrt()
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            ticks_per_sec: 60,
            walking_speed: 5.0,
            sprinting_speed: 7.0,
            sneaking_speed: 2.5,
            flying_speed: 15.0,
            flying_sprint_speed: 22.0,
            flying_y_speed: 5.0,
            gravity: 20.0,
            max_jump_height: 1.0,
            terminal_velocity: 50.0,
            player_height: 2.0,
            collision_pad: 0.2,
            reach: 8,
            mouse_sensitivity: 0.15,
            substeps: 8,
            max_dt: 0.2,
            inventory: vec![
                BlockKind::Dirt,
                BlockKind::GrassBlock,
                BlockKind::Sand,
                BlockKind::Bricks,
            ],
        }
    }
}
