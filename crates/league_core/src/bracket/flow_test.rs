//! Full playoff walkthrough: seed, schedule, sweep, advance, crown.

use chrono::{Duration, NaiveDate};

use crate::bracket::{advance_round, build_bracket};
use crate::error::EngineError;
use crate::models::matchup::{BracketSlot, Matchup, Round};
use crate::models::series::{MatchScore, Series};
use crate::models::team::{TeamId, TeamRef};
use crate::schedule::{schedule_knockout, PacingPolicy};

fn ranked_teams() -> Vec<TeamRef> {
    (1..=8).map(|i| TeamRef::new(i, format!("Team {}", i))).collect()
}

/// 4-0 sweep for the side with the lower seed number, minding that even
/// match numbers swap the nominal home.
fn sweep_for_lower_seed(series: &mut Series) {
    let home_is_lower = {
        let m = &series.matchup;
        m.home.as_ref().unwrap().seed < m.away.as_ref().unwrap().seed
    };
    for n in 1..=series.wins_needed() {
        let lower_seed_is_nominal_home = (n % 2 == 1) == home_is_lower;
        let score = if lower_seed_is_nominal_home {
            MatchScore { home_score: 8, away_score: 1 }
        } else {
            MatchScore { home_score: 1, away_score: 8 }
        };
        series.record_result(n, score).unwrap();
    }
}

#[test]
fn test_full_playoff_run_crowns_top_seed() {
    let mut state = build_bracket(&ranked_teams(), 7).unwrap();

    // Quarterfinals run in parallel across four tables.
    let matchups: Vec<Matchup> =
        state.quarterfinals.iter().map(|s| s.matchup.clone()).collect();
    let start = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap().and_hms_opt(18, 0, 0).unwrap();
    let qf_schedule = schedule_knockout(
        &matchups,
        7,
        PacingPolicy::Parallel,
        start,
        Duration::minutes(30),
        4,
    )
    .unwrap();
    assert_eq!(qf_schedule.slots.len(), 4 * 7);
    assert_eq!(qf_schedule.effective_table_count, 4);

    // Advancing before any result is recorded must fail cleanly.
    assert_eq!(
        advance_round(&state, Round::Quarterfinal),
        Err(EngineError::RoundIncomplete { round: Round::Quarterfinal })
    );

    // Every quarterfinal goes 4-0 to the lower seed number.
    for qf in &mut state.quarterfinals {
        sweep_for_lower_seed(qf);
    }
    let mut state = advance_round(&state, Round::Quarterfinal).unwrap();

    // Left half: seeds 1 and 4; right half: seeds 2 and 3. Lower seed is
    // canonical home of each semifinal.
    let left = &state.semifinal(BracketSlot::Left0).unwrap().matchup;
    assert_eq!(left.home.as_ref().unwrap().seed, 1);
    assert_eq!(left.away.as_ref().unwrap().seed, 4);
    let right = &state.semifinal(BracketSlot::Right0).unwrap().matchup;
    assert_eq!(right.home.as_ref().unwrap().seed, 2);
    assert_eq!(right.away.as_ref().unwrap().seed, 3);

    // Semifinals and the final run back to back on one table.
    let semi_matchups: Vec<Matchup> =
        state.semifinals.iter().map(|s| s.matchup.clone()).collect();
    let sf_schedule = schedule_knockout(
        &semi_matchups,
        7,
        PacingPolicy::Sequential,
        start,
        Duration::minutes(30),
        4,
    )
    .unwrap();
    assert_eq!(sf_schedule.effective_table_count, 1);

    for sf in &mut state.semifinals {
        sweep_for_lower_seed(sf);
    }
    let mut state = advance_round(&state, Round::Semifinal).unwrap();

    // Final pairs the two semifinal winners: seeds 1 and 2.
    let final_matchup = &state.final_series.matchup;
    assert_eq!(final_matchup.home.as_ref().unwrap().seed, 1);
    assert_eq!(final_matchup.away.as_ref().unwrap().seed, 2);

    sweep_for_lower_seed(&mut state.final_series);
    let done = advance_round(&state, Round::Final).unwrap();
    assert_eq!(done.champion, Some(TeamId(1)));

    // Terminal round advancement is a safe no-op.
    let again = advance_round(&done, Round::Final).unwrap();
    assert_eq!(again, done);
}
