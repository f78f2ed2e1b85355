use serde::{Deserialize, Serialize};

use super::series::MatchScore;
use super::team::TeamId;

/// Match result as delivered by the external match-recording system.
///
/// This is the boundary shape; inside the engine results live on
/// [`super::series::SeriesMatch`] as typed [`MatchScore`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: u32,
    pub away_score: u32,
}

impl MatchRecord {
    /// Decided score of this record, or `None` while the match is still
    /// level. A drawn record means "not yet decided", not an error.
    pub fn decided_score(&self) -> Option<MatchScore> {
        let score = MatchScore { home_score: self.home_score, away_score: self.away_score };
        score.is_decided().then_some(score)
    }
}
