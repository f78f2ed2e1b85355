use serde::{Deserialize, Serialize};

use super::matchup::BracketSlot;
use super::series::Series;
use super::team::{SeededTeam, TeamId};

/// Number of teams in a knockout bracket instance.
pub const BRACKET_SIZE: usize = 8;

/// Full knockout structure for one playoff instance.
///
/// Created once from a frozen ranked team list; mutated only by the
/// round advancer returning a new state. An incomplete bracket (empty
/// downstream slots) is a legitimate state, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketState {
    /// The 8 participants in seed order (index 0 = seed 1).
    pub teams: Vec<SeededTeam>,
    /// Quarterfinal series in slot order: left-0, left-1, right-0, right-1.
    pub quarterfinals: Vec<Series>,
    /// Semifinal series in slot order: left-0, right-0.
    pub semifinals: Vec<Series>,
    pub final_series: Series,
    pub champion: Option<TeamId>,
}

impl BracketState {
    pub fn quarterfinal(&self, slot: BracketSlot) -> Option<&Series> {
        self.quarterfinals.iter().find(|s| s.matchup.slot == slot)
    }

    pub fn semifinal(&self, slot: BracketSlot) -> Option<&Series> {
        self.semifinals.iter().find(|s| s.matchup.slot == slot)
    }

    /// Seeded entry for a team id, if it is part of this bracket.
    pub fn seeded(&self, team: TeamId) -> Option<&SeededTeam> {
        self.teams.iter().find(|s| s.team.id == team)
    }
}
