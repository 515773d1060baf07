use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Cells per side of the square texture atlas.
    pub atlas_grid: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            atlas_grid: 4,
            texture_path: None,
            log_level: "info".to_string(),
        }
    }
}
