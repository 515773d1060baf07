use anyhow::{Context, Result};
use glam::{IVec3, Vec3};
use log::{debug, info};

use crate::{
    config::EngineConfig,
    player::{InputState, Inventory, Player},
    render::{batch::GeometrySink, texture::TextureAtlas, QuadBatch},
    terrain::{spawn_point, TerrainGenerator},
    utils::math::cube_vertices,
    world::{BlockKind, BlockRegistry, RayHit, SectorCoord, World},
};

/// Half-size of the outline drawn around the focused block, slightly larger
/// than the block so it does not z-fight.
const OUTLINE_HALF_SIZE: f32 = 0.51;

/// Game loop state: the world, the player walking in it and the hotbar.
pub struct Engine<S: GeometrySink = QuadBatch> {
    pub config: EngineConfig,
    world: World<S>,
    player: Player,
    inventory: Inventory,
    sector: Option<SectorCoord>,
    ticks: u64,
}

impl Engine<QuadBatch> {
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_sink(config, QuadBatch::new())
    }
}

impl<S: GeometrySink> Engine<S> {
    /// Loads the atlas, generates the terrain and places the player at the
    /// spawn point. Nothing is shown until the first [`Engine::tick`].
    pub fn with_sink(config: EngineConfig, sink: S) -> Result<Self> {
        config
            .sectors
            .validate()
            .context("Invalid sector configuration")?;
        let grid = config.rendering.atlas_grid;
        let atlas = match &config.rendering.texture_path {
            Some(path) => TextureAtlas::open(path, grid)
                .with_context(|| format!("Failed to load texture atlas {}", path.display()))?,
            None => TextureAtlas::new(grid),
        };
        let inventory = Inventory::new(config.gameplay.inventory.clone())
            .context("Invalid gameplay configuration")?;
        let generator =
            TerrainGenerator::new(&config.worldgen).context("Invalid world generation settings")?;

        let mut world = World::with_sink(&config, BlockRegistry::new(atlas), sink);
        generator.generate(&mut world);
        let player = Player::new(spawn_point(&world));

        info!(
            "Engine ready: {} blocks, seed {}",
            world.block_count(),
            config.worldgen.world_seed
        );

        Ok(Self {
            config,
            world,
            player,
            inventory,
            sector: None,
            ticks: 0,
        })
    }

    /// Runs one frame: a time-boxed slice of the visibility queue, sector
    /// bookkeeping for the player's position, then player movement.
    pub fn tick(&mut self, dt: f32, input: &InputState) {
        self.world.process_queue();

        let sector = self.world.sectorize(self.player.position);
        if self.sector != Some(sector) {
            self.world.change_sectors(self.sector, Some(sector));
            if self.sector.is_none() {
                self.world.process_entire_queue();
            }
            debug!("Player entered sector {}", sector);
            self.sector = Some(sector);
        }

        self.player.apply_input(input, &self.config.gameplay);
        self.player
            .update(dt, input, &self.world, &self.config.gameplay);
        self.ticks += 1;
    }

    /// Block under the crosshair, if any is within reach.
    pub fn focused_block(&self) -> Option<RayHit> {
        self.world.hit_test(
            self.player.position,
            self.player.sight_vector(),
            self.config.gameplay.reach,
        )
    }

    pub fn focused_outline(&self) -> Option<[Vec3; 24]> {
        self.focused_block()
            .map(|hit| cube_vertices(hit.block.as_vec3(), OUTLINE_HALF_SIZE))
    }

    /// Places the selected block against the focused face. Returns where it
    /// went.
    pub fn place_block(&mut self) -> Option<IVec3> {
        let target = self.focused_block()?.previous?;
        let kind = self.inventory.selected();
        self.world.add_block(target, kind, true);
        debug!("Placed {} at {}", kind, target);
        Some(target)
    }

    /// Removes the focused block unless it is unbreakable.
    pub fn break_block(&mut self) -> Option<(IVec3, BlockKind)> {
        let hit = self.focused_block()?;
        let kind = self.world.block_at(hit.block)?;
        if !kind.is_breakable() {
            return None;
        }
        self.world.remove_block(hit.block, true);
        debug!("Broke {} at {}", kind, hit.block);
        Some((hit.block, kind))
    }

    pub fn select_slot(&mut self, index: usize) -> BlockKind {
        self.inventory.select(index)
    }

    /// Lines of the on-screen debug overlay.
    pub fn debug_lines(&self) -> Vec<String> {
        let position = self.player.position;
        let block = position.floor().as_ivec3();
        let size = self.world.sectors().sector_size();
        let local = IVec3::new(
            block.x.rem_euclid(size),
            block.y.rem_euclid(size),
            block.z.rem_euclid(size),
        );
        let chunk = IVec3::new(
            block.x.div_euclid(size),
            block.y.div_euclid(size),
            block.z.div_euclid(size),
        );

        vec![
            format!(
                "XYZ: {:.3} / {:.5} / {:.3}",
                position.x, position.y, position.z
            ),
            format!("Block: {} {} {}", block.x, block.y, block.z),
            format!(
                "Chunk: {} {} {} in {} {} {}",
                local.x, local.y, local.z, chunk.x, chunk.y, chunk.z
            ),
            format!(
                "Facing: {} ({:.1} / {:.1})",
                self.player.facing(),
                self.player.rotation.x.rem_euclid(360.0),
                self.player.rotation.y
            ),
            format!(
                "Blocks: {} shown / {} total, {} pending",
                self.world.shown_count(),
                self.world.block_count(),
                self.world.pending()
            ),
            format!("Selected: {}", self.inventory.selected()),
        ]
    }

    pub fn world(&self) -> &World<S> {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World<S> {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn sector(&self) -> Option<SectorCoord> {
        self.sector
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::WorldError;
    use glam::Vec2;

    fn small_engine() -> Engine {
        let mut config = EngineConfig::default();
        config.worldgen.half_width = 4;
        Engine::new(config).unwrap()
    }

    fn look_down(engine: &mut Engine) {
        engine.player_mut().rotation = Vec2::new(0.0, -90.0);
    }

    #[test]
    fn test_first_tick_shows_neighbourhood() {
        let mut engine = small_engine();
        assert_eq!(engine.world().shown_count(), 0);
        assert_eq!(engine.sector(), None);

        engine.tick(1.0 / 60.0, &InputState::default());
        assert_eq!(engine.sector(), Some(SectorCoord::new(0, 0)));
        assert!(engine.world().shown_count() > 0);
        assert_eq!(engine.world().pending(), 0);
        assert_eq!(engine.world().materialized_count(), engine.world().shown_count());
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn test_break_and_place() {
        let mut engine = small_engine();
        engine.tick(1.0 / 60.0, &InputState::default());
        look_down(&mut engine);

        let surface = engine.focused_block().unwrap();
        let top = surface.block;
        assert_eq!(surface.previous, Some(top + IVec3::Y));
        assert_eq!(engine.world().block_at(top), Some(BlockKind::GrassBlock));

        assert_eq!(engine.break_block(), Some((top, BlockKind::GrassBlock)));
        assert!(!engine.world().contains(top));
        // The dirt underneath is uncovered and drawn right away
        assert!(engine.world().is_shown(top - IVec3::Y));

        engine.select_slot(2);
        assert_eq!(engine.place_block(), Some(top));
        assert_eq!(engine.world().block_at(top), Some(BlockKind::Sand));
        assert!(engine.focused_outline().is_some());
    }

    #[test]
    fn test_bedrock_is_unbreakable() {
        let mut engine = small_engine();
        look_down(&mut engine);
        let top = engine.focused_block().unwrap().block;
        let above = top + IVec3::Y;
        engine
            .world_mut()
            .add_block(above, BlockKind::Bedrock, true);

        assert_eq!(engine.focused_block().map(|hit| hit.block), Some(above));
        assert_eq!(engine.break_block(), None);
        assert_eq!(engine.world().block_at(above), Some(BlockKind::Bedrock));
    }

    #[test]
    fn test_debug_lines() {
        let mut engine = small_engine();
        engine.player_mut().position = Vec3::new(-1.5, 20.25, 17.0);
        let lines = engine.debug_lines();
        assert_eq!(lines[1], "Block: -2 20 17");
        assert_eq!(lines[2], "Chunk: 14 4 1 in -1 1 1");
        assert!(lines[3].starts_with("Facing: north"));
        assert_eq!(lines[5], "Selected: dirt");
    }

    #[test]
    fn test_missing_atlas_fails_startup() {
        let mut config = EngineConfig::default();
        config.worldgen.half_width = 1;
        config.rendering.texture_path = Some("/nonexistent/atlas.png".into());
        assert!(Engine::new(config).is_err());
    }

    #[test]
    fn test_zero_sector_size_fails_startup() {
        let mut config = EngineConfig::default();
        config.worldgen.half_width = 1;
        config.sectors.sector_size = 0;
        let err = Engine::new(config).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<WorldError>(),
            Some(WorldError::InvalidSectorConfig(_))
        ));
    }
}
