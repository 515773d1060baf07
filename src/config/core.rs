use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{GameplayConfig, RenderConfig, SectorConfig, WorldGenConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub worldgen: WorldGenConfig,
    pub sectors: SectorConfig,
    pub gameplay: GameplayConfig,
    pub rendering: RenderConfig,
}

impl EngineConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content).context("Failed to write config file")
    }

    /// Reads `path`, writing the defaults there first when it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            info!("Wrote default config to {}", path.display());
            return Ok(default_config);
        }

        let config = Self::load_from(path)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

pub fn load_or_create_config() -> Result<EngineConfig> {
    EngineConfig::load_or_create(&get_config_path()?)
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "MetroManDevTeam", "bloksel-sandbox")
        .context("Couldn't determine project directory")?;
    Ok(proj_dirs.config_dir().join("engine.toml"))
}
