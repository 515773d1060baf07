use crate::utils::error::WorldError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Cell coordinates in the texture atlas grid.
pub type AtlasCell = (u32, u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Dirt,
    GrassBlock,
    Sand,
    Bricks,
    Bedrock,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Dirt,
        BlockKind::GrassBlock,
        BlockKind::Sand,
        BlockKind::Bricks,
        BlockKind::Bedrock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Dirt => "dirt",
            BlockKind::GrassBlock => "grass_block",
            BlockKind::Sand => "sand",
            BlockKind::Bricks => "bricks",
            BlockKind::Bedrock => "bedrock",
        }
    }

    /// Atlas cells for the (top, bottom, side) faces.
    pub fn atlas_cells(&self) -> (AtlasCell, AtlasCell, AtlasCell) {
        match self {
            BlockKind::Dirt => ((0, 1), (0, 1), (0, 1)),
            BlockKind::GrassBlock => ((1, 0), (0, 1), (0, 0)),
            BlockKind::Sand => ((1, 1), (1, 1), (1, 1)),
            BlockKind::Bricks => ((2, 0), (2, 0), (2, 0)),
            BlockKind::Bedrock => ((2, 1), (2, 1), (2, 1)),
        }
    }

    pub fn is_breakable(&self) -> bool {
        !matches!(self, BlockKind::Bedrock)
    }
}

impl Display for BlockKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BlockKind {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| WorldError::UnknownBlock(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.to_string().parse::<BlockKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            "stone".parse::<BlockKind>(),
            Err(WorldError::UnknownBlock(name)) if name == "stone"
        ));
    }

    #[test]
    fn test_only_bedrock_is_unbreakable() {
        let unbreakable: Vec<_> = BlockKind::ALL
            .into_iter()
            .filter(|kind| !kind.is_breakable())
            .collect();
        assert_eq!(unbreakable, vec![BlockKind::Bedrock]);
    }
}
