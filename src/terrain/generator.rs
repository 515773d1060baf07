use glam::{IVec3, Vec3};
use log::info;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::config::{NoiseLayerConfig, WorldGenConfig};
use crate::render::batch::GeometrySink;
use crate::utils::error::{Result, WorldError};
use crate::world::{BlockKind, World};

/// Largest fractal octave count a noise layer accepts.
pub const MAX_OCTAVES: usize = 32;

struct NoiseLayer {
    noise: Fbm<Perlin>,
    scale: [f64; 2],
    amplitude: f64,
}

impl NoiseLayer {
    fn new(seed: u32, config: &NoiseLayerConfig) -> Result<Self> {
        if config.octaves == 0 || config.octaves > MAX_OCTAVES {
            return Err(WorldError::InvalidNoiseLayer(format!(
                "octaves must be in 1..={}, got {}",
                MAX_OCTAVES, config.octaves
            )));
        }
        if config.scale.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(WorldError::InvalidNoiseLayer(format!(
                "scale must be positive, got {:?}",
                config.scale
            )));
        }

        let noise = Fbm::<Perlin>::new(seed.wrapping_add(config.seed_offset))
            .set_octaves(config.octaves)
            .set_frequency(config.frequency);

        Ok(Self {
            noise,
            scale: config.scale,
            amplitude: config.amplitude,
        })
    }

    fn sample(&self, x: i32, z: i32) -> f64 {
        let point = [x as f64 / self.scale[0], z as f64 / self.scale[1]];
        self.amplitude * self.noise.get(point)
    }
}

/// Builds the initial world: one column per (x, z) of a square centred on
/// the origin, with bedrock at the bottom, dirt in between and grass on top.
pub struct TerrainGenerator {
    baseline: f64,
    half_width: i32,
    layers: Vec<NoiseLayer>,
}

impl TerrainGenerator {
    pub fn new(config: &WorldGenConfig) -> Result<Self> {
        let layers = config
            .layers
            .iter()
            .map(|layer| NoiseLayer::new(config.world_seed, layer))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            baseline: config.baseline,
            half_width: config.half_width,
            layers,
        })
    }

    /// Surface height of the column at (x, z).
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let height = self.baseline + self.layers.iter().map(|l| l.sample(x, z)).sum::<f64>();
        height.floor() as i32
    }

    /// Fills `world` without drawing anything; returns how many blocks were
    /// placed.
    pub fn generate<S: GeometrySink>(&self, world: &mut World<S>) -> usize {
        let n = self.half_width;
        info!("Generating terrain over [{}, {}]²", -n, n);

        let mut placed = 0;
        for x in -n..=n {
            for z in -n..=n {
                let h = self.height_at(x, z);
                world.add_block(IVec3::new(x, 0, z), BlockKind::Bedrock, false);
                for y in 1..h {
                    world.add_block(IVec3::new(x, y, z), BlockKind::Dirt, false);
                }
                world.add_block(IVec3::new(x, h, z), BlockKind::GrassBlock, false);
                placed += 2 + (h - 1).max(0) as usize;
            }
        }

        info!(
            "Terrain done: {} placements, {} blocks in {} sectors",
            placed,
            world.block_count(),
            world.sectors().sector_count()
        );
        placed
    }
}

/// Player start on the origin column: y = 1 when that cell is free,
/// otherwise one block above the first free cell over it.
pub fn spawn_point<S: GeometrySink>(world: &World<S>) -> Vec3 {
    let mut y = 1;
    if world.contains(IVec3::new(0, y, 0)) {
        while world.contains(IVec3::new(0, y, 0)) {
            y += 1;
        }
        y += 1;
    }
    let spawn = Vec3::new(0.0, y as f32, 0.0);
    info!("Spawn point at {}", spawn);
    spawn
}
