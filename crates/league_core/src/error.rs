use thiserror::Error;

use crate::models::matchup::Round;

/// Validation failures raised by the engine. All are deterministic; none
/// are transient. The engine never substitutes defaults for invalid
/// configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("bracket requires exactly 8 teams, found {found}")]
    InsufficientTeams { found: usize },

    #[error("round {round:?} still has undecided series")]
    RoundIncomplete { round: Round },

    #[error("series length must be odd and at least 3, got {best_of}")]
    InvalidSeriesLength { best_of: u8 },

    #[error("table count must be at least 1, got {table_count}")]
    InvalidTableCount { table_count: u32 },

    #[error("house split must fall strictly inside the team list: upper size {upper_size} of {team_count} teams")]
    InvalidSplit { upper_size: usize, team_count: usize },

    #[error("tied score in match {match_number}: knockout results must be decided")]
    TiedScore { match_number: u8 },

    #[error("match number {match_number} outside best-of-{best_of} series")]
    UnknownMatchNumber { match_number: u8, best_of: u8 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
