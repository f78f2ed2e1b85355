pub mod bracket;
pub mod house;
pub mod matchup;
pub mod record;
pub mod schedule;
pub mod series;
pub mod team;

pub use bracket::{BracketState, BRACKET_SIZE};
pub use house::{House, HouseFixture};
pub use matchup::{BracketSlot, Matchup, Round};
pub use record::MatchRecord;
pub use schedule::{RawSchedule, ScheduleSlot};
pub use series::{MatchScore, Series, SeriesMatch};
pub use team::{RankedTeam, SeededTeam, TeamId, TeamRef};
