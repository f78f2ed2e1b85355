use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::bracket::{BracketState, BRACKET_SIZE};
use crate::models::matchup::{BracketSlot, Matchup, Round};
use crate::models::series::Series;
use crate::models::team::{SeededTeam, TeamRef};

/// Fixed quarterfinal seeding template, as (home seed, away seed, slot).
///
/// This is a policy carried over from league rules, not a computed
/// pairing: the left half holds seeds {1, 8, 5, 4} and the right half
/// {3, 6, 7, 2}, and semifinal pairings stay within their half without
/// re-seeding by quarterfinal results.
const QUARTERFINAL_TEMPLATE: [(u8, u8, BracketSlot); 4] = [
    (1, 8, BracketSlot::Left0),
    (5, 4, BracketSlot::Left1),
    (3, 6, BracketSlot::Right0),
    (7, 2, BracketSlot::Right1),
];

/// Seeds a ranked team list into a fresh 8-team knockout bracket.
///
/// The i-th ranked team (rank 1 = strongest) receives seed i. Every
/// series is created with `best_of` pending matches; semifinal and final
/// matchups start with both sides TBD.
pub fn build_bracket(ranked: &[TeamRef], best_of: u8) -> Result<BracketState> {
    if ranked.len() != BRACKET_SIZE {
        return Err(EngineError::InsufficientTeams { found: ranked.len() });
    }

    let teams: Vec<SeededTeam> = ranked
        .iter()
        .enumerate()
        .map(|(i, team)| SeededTeam { team: team.clone(), seed: i as u8 + 1 })
        .collect();

    let by_seed = |seed: u8| teams[seed as usize - 1].clone();

    let quarterfinals = QUARTERFINAL_TEMPLATE
        .iter()
        .map(|&(home, away, slot)| {
            Series::new(
                Matchup::with_teams(Round::Quarterfinal, slot, by_seed(home), by_seed(away)),
                best_of,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let semifinals = vec![
        Series::new(Matchup::pending(Round::Semifinal, BracketSlot::Left0), best_of)?,
        Series::new(Matchup::pending(Round::Semifinal, BracketSlot::Right0), best_of)?,
    ];
    let final_series = Series::new(Matchup::pending(Round::Final, BracketSlot::Final), best_of)?;

    debug!(team_count = teams.len(), best_of, "seeded knockout bracket");

    Ok(BracketState { teams, quarterfinals, semifinals, final_series, champion: None })
}
