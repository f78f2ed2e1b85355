use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::house::{House, HouseFixture};
use crate::models::schedule::ScheduleSlot;
use crate::models::team::TeamRef;

/// House membership plus the round counts the calendar has to absorb,
/// surfaced before any schedule is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousePlan {
    pub upper: Vec<TeamRef>,
    pub lower: Vec<TeamRef>,
    pub upper_rounds: usize,
    pub lower_rounds: usize,
}

impl HousePlan {
    pub fn teams(&self, house: House) -> &[TeamRef] {
        match house {
            House::Upper => &self.upper,
            House::Lower => &self.lower,
        }
    }

    pub fn rounds(&self, house: House) -> usize {
        match house {
            House::Upper => self.upper_rounds,
            House::Lower => self.lower_rounds,
        }
    }
}

/// Splits season-end standings into the Upper and Lower houses.
///
/// The first `upper_size` ranked teams form Upper; the cut must fall
/// strictly inside the list.
pub fn split_houses(
    ranked: &[TeamRef],
    upper_size: usize,
) -> Result<(Vec<TeamRef>, Vec<TeamRef>)> {
    if upper_size == 0 || upper_size >= ranked.len() {
        return Err(EngineError::InvalidSplit { upper_size, team_count: ranked.len() });
    }
    let (upper, lower) = ranked.split_at(upper_size);
    Ok((upper.to_vec(), lower.to_vec()))
}

/// Rounds needed for a complete double round robin of `team_count` teams.
pub fn round_count(team_count: usize) -> usize {
    if team_count > 1 {
        (team_count - 1) * 2
    } else {
        0
    }
}

/// Splits the standings and reports both houses' round counts in one go.
pub fn plan_houses(ranked: &[TeamRef], upper_size: usize) -> Result<HousePlan> {
    let (upper, lower) = split_houses(ranked, upper_size)?;
    let upper_rounds = round_count(upper.len());
    let lower_rounds = round_count(lower.len());
    Ok(HousePlan { upper, lower, upper_rounds, lower_rounds })
}

/// Generates a double round-robin schedule for one house.
///
/// Pairings come from the circle method: one leg where every unordered
/// pair meets once, then the same rounds mirrored with home and away
/// swapped. Round order is deterministic for a given input order. An odd
/// team count gets a rotating bye.
///
/// All fixtures share `game_date`. Within one round, fixtures fill
/// tables 1..=`table_count` in one time lane; whatever does not fit
/// rolls to the next lane at `start_time + match_duration`. Every round
/// starts on a fresh lane, so two rounds never share a start time and a
/// team is never booked into two simultaneous fixtures.
pub fn generate_round_robin(
    house: &[TeamRef],
    game_date: NaiveDate,
    start_time: NaiveTime,
    match_duration: Duration,
    table_count: u32,
) -> Result<Vec<HouseFixture>> {
    if table_count < 1 {
        return Err(EngineError::InvalidTableCount { table_count });
    }
    if house.len() < 2 {
        return Ok(Vec::new());
    }

    let rounds = single_leg_rounds(house.len());
    debug!(
        teams = house.len(),
        legs = 2,
        rounds_per_leg = rounds.len(),
        "generated house round robin pairings"
    );

    let mut fixtures = Vec::new();
    let mut lane_base: u32 = 0;
    let mut place_round =
        |round: u8, pairs: &[(usize, usize)], swap: bool, fixtures: &mut Vec<HouseFixture>| {
            for (j, &(a, b)) in pairs.iter().enumerate() {
                let lane = lane_base + j as u32 / table_count;
                let table = j as u32 % table_count + 1;
                let (home, away) = if swap { (b, a) } else { (a, b) };
                fixtures.push(HouseFixture {
                    round,
                    home: house[home].clone(),
                    away: house[away].clone(),
                    slot: ScheduleSlot {
                        date: game_date,
                        start_time: start_time + match_duration * lane as i32,
                        table,
                    },
                });
            }
            // Next round starts on a fresh lane; a partial lane stays idle
            // rather than mixing rounds at one start time.
            lane_base += (pairs.len() as u32).div_ceil(table_count);
        };

    let leg_len = rounds.len() as u8;
    for (r, pairs) in rounds.iter().enumerate() {
        place_round(r as u8 + 1, pairs, false, &mut fixtures);
    }
    // Second leg: identical rounds with home and away reversed.
    for (r, pairs) in rounds.iter().enumerate() {
        place_round(leg_len + r as u8 + 1, pairs, true, &mut fixtures);
    }

    Ok(fixtures)
}

/// Circle-method pairings for one leg, as rounds of team-index pairs.
/// Odd team counts are padded with a bye seat whose pairings are dropped.
fn single_leg_rounds(team_count: usize) -> Vec<Vec<(usize, usize)>> {
    const BYE: usize = usize::MAX;

    let mut seats: Vec<usize> = (0..team_count).collect();
    if team_count % 2 == 1 {
        seats.push(BYE);
    }
    let m = seats.len();

    let mut rounds = Vec::with_capacity(m - 1);
    for _ in 0..m - 1 {
        let mut pairs = Vec::with_capacity(m / 2);
        for i in 0..m / 2 {
            let (a, b) = (seats[i], seats[m - 1 - i]);
            if a != BYE && b != BYE {
                pairs.push((a, b));
            }
        }
        rounds.push(pairs);
        // Rotate all seats but the first.
        let last = seats.pop().unwrap();
        seats.insert(1, last);
    }
    rounds
}
