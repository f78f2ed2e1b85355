//! Date/time/table assignment for knockout series and house round robins.

mod house;
mod knockout;

pub use house::{generate_round_robin, plan_houses, round_count, split_houses, HousePlan};
pub use knockout::{schedule_knockout, KnockoutSchedule, PacingPolicy, ScheduledMatch};
