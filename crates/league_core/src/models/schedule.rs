use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One resolved calendar slot: exactly one fixture per (date, time, table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub table: u32,
}

/// Persistence-shaped schedule fields: the originally assigned slot plus
/// optional rescheduled variants written after a delay.
///
/// Callers resolve this once via [`RawSchedule::effective`] instead of
/// re-deriving fallbacks at every read site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSchedule {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub table: u32,
    #[serde(default)]
    pub delayed_date: Option<NaiveDate>,
    #[serde(default)]
    pub delayed_time: Option<NaiveTime>,
    #[serde(default)]
    pub delayed_table: Option<u32>,
}

impl RawSchedule {
    /// The single canonical slot: each delayed field overrides its
    /// original independently.
    pub fn effective(&self) -> ScheduleSlot {
        ScheduleSlot {
            date: self.delayed_date.unwrap_or(self.date),
            start_time: self.delayed_time.unwrap_or(self.start_time),
            table: self.delayed_table.unwrap_or(self.table),
        }
    }
}
