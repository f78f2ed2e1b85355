use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::matchup::Matchup;
use crate::models::schedule::ScheduleSlot;
use crate::models::series::validate_best_of;

/// Pacing of one knockout round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacingPolicy {
    /// All matchups run side by side on separate tables; match `n` of
    /// every series shares one start time. Used for quarterfinals.
    #[serde(rename = "parallel")]
    Parallel,
    /// One table, matchups back to back: every match of matchup `i` is
    /// scheduled before any match of matchup `i + 1`. Used for the
    /// semifinals and the final.
    #[serde(rename = "sequential")]
    Sequential,
}

/// Slot assignment for one `(matchup, match number)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    /// 0-based index into the scheduled matchup list.
    pub matchup_index: usize,
    /// 1-based match number within the series.
    pub match_number: u8,
    pub slot: ScheduleSlot,
}

/// Schedule for one knockout round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutSchedule {
    pub slots: Vec<ScheduledMatch>,
    /// Table count actually used. Sequential pacing forces this to 1
    /// regardless of the requested count.
    pub effective_table_count: u32,
}

/// Assigns a (date, time, table) to every match of every series in a
/// round.
///
/// All `best_of` matches per matchup are scheduled up front, including
/// trailing matches a short series will never play; whether a match
/// turns out to be necessary is not a scheduling concern. Output order
/// is deterministic: matchup index, then match number.
pub fn schedule_knockout(
    matchups: &[Matchup],
    best_of: u8,
    policy: PacingPolicy,
    start: NaiveDateTime,
    interval: Duration,
    table_count: u32,
) -> Result<KnockoutSchedule> {
    validate_best_of(best_of)?;
    if table_count < 1 {
        return Err(EngineError::InvalidTableCount { table_count });
    }

    let effective_table_count = match policy {
        PacingPolicy::Parallel => table_count,
        PacingPolicy::Sequential => {
            if table_count != 1 {
                debug!(requested = table_count, "sequential pacing forces table count to 1");
            }
            1
        }
    };

    let mut slots = Vec::with_capacity(matchups.len() * best_of as usize);
    // Start offset of the current matchup's match 1, in interval steps.
    // Kept in i32 because chrono multiplies Duration by i32; a bracket
    // round holds a handful of matchups, nowhere near overflow.
    let mut matchup_offset: i32 = 0;
    for (i, _) in matchups.iter().enumerate() {
        for n in 1..=best_of {
            let (offset_steps, table) = match policy {
                PacingPolicy::Parallel => {
                    (i32::from(n - 1), (i as u32 % effective_table_count) + 1)
                }
                PacingPolicy::Sequential => (matchup_offset + i32::from(n - 1), 1),
            };
            let at = start + interval * offset_steps;
            slots.push(ScheduledMatch {
                matchup_index: i,
                match_number: n,
                slot: ScheduleSlot { date: at.date(), start_time: at.time(), table },
            });
        }
        matchup_offset += i32::from(best_of);
    }

    Ok(KnockoutSchedule { slots, effective_table_count })
}
