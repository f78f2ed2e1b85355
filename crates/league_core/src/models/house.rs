use serde::{Deserialize, Serialize};

use super::schedule::ScheduleSlot;
use super::team::TeamRef;

/// One of the two post-season groups formed by splitting the standings.
/// Houses never interact after the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum House {
    #[serde(rename = "upper")]
    Upper,
    #[serde(rename = "lower")]
    Lower,
}

/// One round-robin fixture inside a house schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseFixture {
    /// 1-based round number within the house's double round robin.
    pub round: u8,
    pub home: TeamRef,
    pub away: TeamRef,
    pub slot: ScheduleSlot,
}
