use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, WorldError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorConfig {
    pub sector_size: i32,
    /// Radius, in sectors, of the disc kept visible around the player.
    pub pad: i32,
}

impl SectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sector_size <= 0 {
            return Err(WorldError::InvalidSectorConfig(format!(
                "sector_size must be positive, got {}",
                self.sector_size
            )));
        }
        if self.pad < 0 {
            return Err(WorldError::InvalidSectorConfig(format!(
                "pad must not be negative, got {}",
                self.pad
            )));
        }
        Ok(())
    }
}

impl Default for SectorConfig {
    fn default() -> Self {
        Self {
            sector_size: 16,
            pad: 4,
        }
    }
}
