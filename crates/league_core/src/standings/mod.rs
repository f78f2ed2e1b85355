//! Rank movement between standings snapshots.

use std::collections::HashMap;

use crate::models::team::{RankedTeam, TeamId};

/// Rank movement per team between two standings snapshots.
///
/// The value is `previous_rank - current_rank`, so positive means the
/// team climbed. Teams missing from `previous` are omitted; no synthetic
/// rank is invented for newcomers.
pub fn standings_delta(previous: &[RankedTeam], current: &[RankedTeam]) -> HashMap<TeamId, i32> {
    let previous_ranks: HashMap<TeamId, u32> =
        previous.iter().map(|r| (r.team, r.rank)).collect();

    current
        .iter()
        .filter_map(|r| {
            previous_ranks
                .get(&r.team)
                .map(|&prev| (r.team, prev as i32 - r.rank as i32))
        })
        .collect()
}
