use serde::{Deserialize, Serialize};

/// Opaque team identity assigned by the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

/// Team reference as it enters the engine: identity plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

impl TeamRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id: TeamId(id), name: name.into() }
    }
}

/// Team placed into a bracket. Seed 1 = strongest regular-season rank.
/// Seeds are assigned once per bracket instance and stay fixed until the
/// bracket is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededTeam {
    pub team: TeamRef,
    pub seed: u8,
}

/// One entry of a ranked standings snapshot. Rank 1 = top of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTeam {
    pub team: TeamId,
    pub rank: u32,
}

impl RankedTeam {
    /// Builds a snapshot from a list already sorted best-first.
    pub fn from_order(teams: &[TeamId]) -> Vec<RankedTeam> {
        teams
            .iter()
            .enumerate()
            .map(|(i, &team)| RankedTeam { team, rank: i as u32 + 1 })
            .collect()
    }
}
