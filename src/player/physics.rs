use glam::{Vec2, Vec3};

use super::input::InputState;
use crate::config::GameplayConfig;
use crate::physics::collision::collide;
use crate::render::batch::GeometrySink;
use crate::world::World;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// (yaw, pitch) in degrees. Yaw 0 looks towards -Z; pitch is kept within
    /// [-90, 90].
    pub rotation: Vec2,
    /// Vertical velocity from gravity and jumping.
    pub dy: f32,
    pub flying: bool,
    pub sneaking: bool,
    pub sprinting: bool,
}

impl Player {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec2::ZERO,
            dy: 0.0,
            flying: false,
            sneaking: false,
            sprinting: false,
        }
    }

    /// Unit vector the player is looking along.
    pub fn sight_vector(&self) -> Vec3 {
        let yaw = (self.rotation.x - 90.0).to_radians();
        let pitch = self.rotation.y.to_radians();
        let m = pitch.cos();
        Vec3::new(yaw.cos() * m, pitch.sin(), yaw.sin() * m)
    }

    /// Direction of travel requested by `input`, before scaling by speed.
    /// Horizontal movement ignores pitch; only flight moves vertically.
    pub fn motion_vector(&self, input: &InputState, config: &GameplayConfig) -> Vec3 {
        let mut motion = Vec3::ZERO;
        let (along, across) = input.strafe();
        if along != 0 || across != 0 {
            let strafe = (along as f32).atan2(across as f32).to_degrees();
            let angle = (self.rotation.x + strafe).to_radians();
            motion.x = angle.cos();
            motion.z = angle.sin();
        }
        if self.flying {
            if input.jump {
                motion.y += config.flying_y_speed;
            }
            if input.sneak {
                motion.y -= config.flying_y_speed;
            }
        }
        motion
    }

    pub fn speed(&self, config: &GameplayConfig) -> f32 {
        match (self.sneaking, self.sprinting, self.flying) {
            (true, _, _) => config.sneaking_speed,
            (false, true, true) => config.flying_sprint_speed,
            (false, true, false) => config.sprinting_speed,
            (false, false, true) => config.flying_speed,
            (false, false, false) => config.walking_speed,
        }
    }

    /// Starts a jump when standing still vertically and not flying.
    pub fn jump(&mut self, config: &GameplayConfig) {
        if !self.flying && self.dy == 0.0 {
            self.dy = config.jump_speed();
        }
    }

    pub fn toggle_flying(&mut self) {
        self.flying = !self.flying;
        if self.flying {
            self.sneaking = false;
        }
    }

    pub fn look(&mut self, delta: Vec2, sensitivity: f32) {
        self.rotation.x += delta.x * sensitivity;
        self.rotation.y = (self.rotation.y + delta.y * sensitivity).clamp(-90.0, 90.0);
    }

    /// Applies the one-shot parts of `input`: flight toggle, movement flags,
    /// jumping and mouse look.
    pub fn apply_input(&mut self, input: &InputState, config: &GameplayConfig) {
        if input.toggle_flying {
            self.toggle_flying();
        }
        self.sneaking = input.sneak && !self.flying;
        self.sprinting = input.sprint;
        if input.jump {
            self.jump(config);
        }
        self.look(input.mouse_delta, config.mouse_sensitivity);
    }

    /// Advances movement, gravity and collision by `dt` seconds, split into
    /// `config.substeps` equal steps. Long frames are clamped to `max_dt`.
    pub fn update<S: GeometrySink>(
        &mut self,
        dt: f32,
        input: &InputState,
        world: &World<S>,
        config: &GameplayConfig,
    ) {
        let dt = dt.min(config.max_dt);
        let substeps = config.substeps.max(1);
        let step = dt / substeps as f32;
        for _ in 0..substeps {
            self.step(step, input, world, config);
        }
    }

    fn step<S: GeometrySink>(
        &mut self,
        dt: f32,
        input: &InputState,
        world: &World<S>,
        config: &GameplayConfig,
    ) {
        let mut delta = self.motion_vector(input, config) * dt * self.speed(config);
        if !self.flying {
            self.dy = (self.dy - dt * config.gravity).max(-config.terminal_velocity);
            delta.y += self.dy * dt;
        }
        let result = collide(
            world,
            self.position + delta,
            config.player_height,
            config.collision_pad,
        );
        if result.stop_vertical {
            self.dy = 0.0;
        }
        self.position = result.position;
    }

    /// Compass name of the horizontal direction faced.
    pub fn facing(&self) -> &'static str {
        let yaw = self.rotation.x.rem_euclid(360.0);
        if !(45.0..315.0).contains(&yaw) {
            "north (towards -Z)"
        } else if yaw < 135.0 {
            "east (towards +X)"
        } else if yaw < 225.0 {
            "south (towards +Z)"
        } else {
            "west (towards -X)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::world::{BlockKind, BlockRegistry};
    use glam::IVec3;

    fn floor_world() -> World {
        let mut world = World::new(&EngineConfig::default(), BlockRegistry::default());
        for x in -3..=3 {
            for z in -3..=3 {
                world.add_block(IVec3::new(x, 0, z), BlockKind::Bedrock, false);
            }
        }
        world
    }

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_sight_and_motion_agree_on_forward() {
        let config = GameplayConfig::default();
        let mut player = Player::new(Vec3::ZERO);
        assert_close(player.sight_vector(), Vec3::NEG_Z);

        let forward = InputState {
            forward: true,
            ..Default::default()
        };
        assert_close(player.motion_vector(&forward, &config), Vec3::NEG_Z);

        player.rotation.x = 90.0;
        assert_close(player.sight_vector(), Vec3::X);
        assert_close(player.motion_vector(&forward, &config), Vec3::X);
        assert_eq!(player.facing(), "east (towards +X)");
    }

    #[test]
    fn test_look_clamps_pitch() {
        let mut player = Player::new(Vec3::ZERO);
        player.look(Vec2::new(100.0, 1000.0), 0.15);
        assert!((player.rotation.x - 15.0).abs() < 1e-4, "yaw = {}", player.rotation.x);
        assert_eq!(player.rotation.y, 90.0);
        assert_close(player.sight_vector(), Vec3::Y);

        player.look(Vec2::new(1100.0, -5000.0), 0.15);
        assert_eq!(player.rotation.y, -90.0);
        assert_eq!(player.facing(), "south (towards +Z)");
    }

    #[test]
    fn test_falls_and_lands_on_floor() {
        let config = GameplayConfig::default();
        let world = floor_world();
        let idle = InputState::default();
        let mut player = Player::new(Vec3::new(0.0, 3.0, 0.0));

        for _ in 0..40 {
            player.update(0.1, &idle, &world, &config);
        }
        // Feet one block below the tracked position
        assert!((player.position.y - 1.8).abs() < 1e-3, "y = {}", player.position.y);
        assert_eq!(player.dy, 0.0);

        player.jump(&config);
        assert_eq!(player.dy, config.jump_speed());
        player.update(0.1, &idle, &world, &config);
        assert!(player.position.y > 1.8);
    }

    #[test]
    fn test_flying_ignores_gravity() {
        let config = GameplayConfig::default();
        let world = floor_world();
        let mut player = Player::new(Vec3::new(0.0, 10.0, 0.0));
        player.sneaking = true;
        player.toggle_flying();
        assert!(!player.sneaking);

        player.update(0.1, &InputState::default(), &world, &config);
        assert_eq!(player.position, Vec3::new(0.0, 10.0, 0.0));

        player.jump(&config);
        assert_eq!(player.dy, 0.0);

        let up = InputState {
            jump: true,
            ..Default::default()
        };
        player.update(0.1, &up, &world, &config);
        assert!(player.position.y > 10.0);
    }

    #[test]
    fn test_speed_selection() {
        let config = GameplayConfig::default();
        let mut player = Player::new(Vec3::ZERO);
        assert_eq!(player.speed(&config), config.walking_speed);

        player.apply_input(
            &InputState {
                sprint: true,
                ..Default::default()
            },
            &config,
        );
        assert_eq!(player.speed(&config), config.sprinting_speed);

        player.apply_input(
            &InputState {
                sprint: true,
                toggle_flying: true,
                sneak: true,
                ..Default::default()
            },
            &config,
        );
        // Sneak doubles as descend while flying
        assert!(!player.sneaking);
        assert_eq!(player.speed(&config), config.flying_sprint_speed);
    }
}
