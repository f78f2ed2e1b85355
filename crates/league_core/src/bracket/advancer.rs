use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::bracket::BracketState;
use crate::models::matchup::{BracketSlot, Matchup, Round};
use crate::models::series::Series;
use crate::models::team::SeededTeam;
use crate::series::resolve_series;

/// Advances the bracket past a completed round, returning a new state.
///
/// Fails with [`EngineError::RoundIncomplete`] while any required series
/// of that round is still open. Advancing a round whose successors are
/// already filled is a no-op returning the same state, so operator
/// retries are safe.
pub fn advance_round(state: &BracketState, round: Round) -> Result<BracketState> {
    match round {
        Round::Quarterfinal => advance_quarterfinals(state),
        Round::Semifinal => advance_semifinals(state),
        Round::Final => advance_final(state),
    }
}

fn advance_quarterfinals(state: &BracketState) -> Result<BracketState> {
    if state.semifinals.iter().all(|s| s.matchup.is_ready()) {
        return Ok(state.clone());
    }

    let mut winners = Vec::with_capacity(4);
    for series in &state.quarterfinals {
        match series_winner(series)? {
            Some(team) => winners.push(team),
            None => return Err(EngineError::RoundIncomplete { round: Round::Quarterfinal }),
        }
    }

    // Quarterfinal slot order is left-0, left-1, right-0, right-1.
    let best_of = state.final_series.best_of;
    let semifinals = vec![
        paired_series(
            Round::Semifinal,
            BracketSlot::Left0,
            winners[0].clone(),
            winners[1].clone(),
            best_of,
        )?,
        paired_series(
            Round::Semifinal,
            BracketSlot::Right0,
            winners[2].clone(),
            winners[3].clone(),
            best_of,
        )?,
    ];

    debug!(round = ?Round::Quarterfinal, "advanced bracket round");

    let mut next = state.clone();
    next.semifinals = semifinals;
    Ok(next)
}

fn advance_semifinals(state: &BracketState) -> Result<BracketState> {
    if state.final_series.matchup.is_ready() {
        return Ok(state.clone());
    }

    let mut winners = Vec::with_capacity(2);
    for series in &state.semifinals {
        match series_winner(series)? {
            Some(team) => winners.push(team),
            None => return Err(EngineError::RoundIncomplete { round: Round::Semifinal }),
        }
    }

    debug!(round = ?Round::Semifinal, "advanced bracket round");

    let mut next = state.clone();
    next.final_series = paired_series(
        Round::Final,
        BracketSlot::Final,
        winners[0].clone(),
        winners[1].clone(),
        state.final_series.best_of,
    )?;
    Ok(next)
}

fn advance_final(state: &BracketState) -> Result<BracketState> {
    if state.champion.is_some() {
        return Ok(state.clone());
    }

    let outcome = resolve_series(&state.final_series)?;
    let Some(winner) = outcome.winner else {
        return Err(EngineError::RoundIncomplete { round: Round::Final });
    };

    debug!(champion = winner.0, "bracket decided");

    let mut next = state.clone();
    next.champion = Some(winner);
    Ok(next)
}

/// Builds the next round's series from two winners. The winner carrying
/// the lower seed number (stronger regular-season rank) is canonical home
/// for the new series' home/away alternation.
fn paired_series(
    round: Round,
    slot: BracketSlot,
    a: SeededTeam,
    b: SeededTeam,
    best_of: u8,
) -> Result<Series> {
    let (home, away) = if a.seed <= b.seed { (a, b) } else { (b, a) };
    Series::new(Matchup::with_teams(round, slot, home, away), best_of)
}

/// Resolves a series and returns its winner as the seeded entry taken
/// from the series' own matchup, or `None` while the series is open.
fn series_winner(series: &Series) -> Result<Option<SeededTeam>> {
    let outcome = resolve_series(series)?;
    Ok(outcome.winner.and_then(|id| {
        series
            .matchup
            .home
            .iter()
            .chain(series.matchup.away.iter())
            .find(|s| s.team.id == id)
            .cloned()
    }))
}
