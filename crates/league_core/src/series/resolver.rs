use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::series::{Series, SeriesMatch};
use crate::models::team::TeamId;

/// Resolution of a series at a point in time.
///
/// Win counts are per canonical matchup side. An open series has
/// `winner = None`; that is a valid state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesOutcome {
    pub winner: Option<TeamId>,
    pub home_wins: u8,
    pub away_wins: u8,
}

impl SeriesOutcome {
    fn open() -> Self {
        Self { winner: None, home_wins: 0, away_wins: 0 }
    }
}

/// Resolves a series from its recorded match results.
///
/// Each decided match is credited to the team that was nominally home or
/// away for that specific match number: odd match numbers keep the
/// matchup's canonical order, even match numbers swap it. Wins therefore
/// accumulate per team, not per home/away label.
///
/// The winner is fixed the first time either side reaches
/// [`Series::wins_needed`]; results past the clinching match are
/// validated but never counted, so re-resolving after extra matches were
/// appended cannot change the declared winner.
pub fn resolve_series(series: &Series) -> Result<SeriesOutcome> {
    crate::models::series::validate_best_of(series.best_of)?;

    let (Some(home), Some(away)) = (&series.matchup.home, &series.matchup.away) else {
        // Matchup still waiting on an earlier round; nothing to count.
        return Ok(SeriesOutcome::open());
    };

    let needed = series.wins_needed();
    let mut outcome = SeriesOutcome::open();

    // The clinch point depends on chronological order, which is match
    // number order, not the order matches happen to sit in the vector
    // (deserialized series make no ordering promise).
    let mut ordered: Vec<&SeriesMatch> = series.matches.iter().collect();
    ordered.sort_by_key(|m| m.match_number);

    for m in ordered {
        let Some(result) = m.result else { continue };
        if !result.is_decided() {
            return Err(EngineError::TiedScore { match_number: m.match_number });
        }
        if outcome.winner.is_some() {
            // Series already clinched; this match was never required.
            continue;
        }

        let canonical_home_is_home = m.match_number % 2 == 1;
        let home_label_won = result.home_score > result.away_score;
        if canonical_home_is_home == home_label_won {
            outcome.home_wins += 1;
            if outcome.home_wins == needed {
                outcome.winner = Some(home.team.id);
            }
        } else {
            outcome.away_wins += 1;
            if outcome.away_wins == needed {
                outcome.winner = Some(away.team.id);
            }
        }
    }

    Ok(outcome)
}
