use serde::{Deserialize, Serialize};

/// One band of coherent noise contributing to the terrain height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseLayerConfig {
    pub seed_offset: u32,
    pub frequency: f64,
    pub octaves: usize,
    /// World units per noise unit along x and z.
    pub scale: [f64; 2],
    pub amplitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    pub world_seed: u32,
    /// Half the width of the generated square, in blocks.
    pub half_width: i32,
    pub baseline: f64,
    pub layers: Vec<NoiseLayerConfig>,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            world_seed: 3,
            half_width: 64,
            baseline: 15.0,
            // The coarsest band carries the largest amplitude.
            layers: vec![
                NoiseLayerConfig {
                    seed_offset: 0,
                    frequency: 7.0,
                    octaves: 3,
                    scale: [150.0, 150.0],
                    amplitude: 8.0,
                },
                NoiseLayerConfig {
                    seed_offset: 1,
                    frequency: 9.0,
                    octaves: 3,
                    scale: [700.0, 700.0],
                    amplitude: 15.0,
                },
                NoiseLayerConfig {
                    seed_offset: 2,
                    frequency: 10.0,
                    octaves: 3,
                    scale: [2000.0, 32000.0],
                    amplitude: 30.0,
                },
            ],
        }
    }
}
