use serde::{Deserialize, Serialize};

use super::matchup::Matchup;
use super::schedule::ScheduleSlot;
use crate::error::{EngineError, Result};

/// Recorded score of one series match, in that match's nominal
/// home/away orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub home_score: u32,
    pub away_score: u32,
}

impl MatchScore {
    /// A drawn score never decides a knockout match.
    pub fn is_decided(&self) -> bool {
        self.home_score != self.away_score
    }
}

/// One match inside a best-of-N series.
///
/// `match_number` is 1-based. The nominal home side alternates by match
/// number parity; see [`Matchup::home_for_match`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMatch {
    pub match_number: u8,
    #[serde(default)]
    pub result: Option<MatchScore>,
    #[serde(default)]
    pub schedule: Option<ScheduleSlot>,
}

impl SeriesMatch {
    pub fn pending(match_number: u8) -> Self {
        Self { match_number, result: None, schedule: None }
    }

    pub fn is_pending(&self) -> bool {
        self.result.is_none()
    }

    pub fn is_decided(&self) -> bool {
        self.result.map(|r| r.is_decided()).unwrap_or(false)
    }
}

/// Best-of-N series between the two sides of one matchup.
///
/// The series is complete the moment either side reaches
/// [`Series::wins_needed`] wins; trailing matches past that point are
/// never required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub matchup: Matchup,
    pub best_of: u8,
    pub matches: Vec<SeriesMatch>,
}

impl Series {
    /// Creates a series with all `best_of` matches pre-created as pending.
    ///
    /// `best_of` must be odd and at least 3.
    pub fn new(matchup: Matchup, best_of: u8) -> Result<Self> {
        validate_best_of(best_of)?;
        let matches = (1..=best_of).map(SeriesMatch::pending).collect();
        Ok(Self { matchup, best_of, matches })
    }

    /// Wins required to take the series: ceil(best_of / 2).
    pub fn wins_needed(&self) -> u8 {
        self.best_of / 2 + 1
    }

    /// Records a decided score for one match.
    ///
    /// A tied score is rejected: knockout matches are reported to the
    /// engine only once decided.
    pub fn record_result(&mut self, match_number: u8, score: MatchScore) -> Result<()> {
        if !score.is_decided() {
            return Err(EngineError::TiedScore { match_number });
        }
        let slot = self
            .matches
            .iter_mut()
            .find(|m| m.match_number == match_number)
            .ok_or(EngineError::UnknownMatchNumber { match_number, best_of: self.best_of })?;
        slot.result = Some(score);
        Ok(())
    }
}

pub(crate) fn validate_best_of(best_of: u8) -> Result<()> {
    if best_of < 3 || best_of % 2 == 0 {
        return Err(EngineError::InvalidSeriesLength { best_of });
    }
    Ok(())
}
