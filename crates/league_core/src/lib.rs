//! # league_core - Playoff Bracket & Schedule Engine
//!
//! Deterministic core for a recreational league's post-season: seeding
//! an 8-team single-elimination bracket, resolving best-of-N series,
//! advancing rounds, assigning conflict-free (date, time, table) slots
//! under parallel or sequential pacing, and generating double
//! round-robin schedules for the Upper/Lower houses.
//!
//! ## Properties
//! - Pure, synchronous computation over immutable snapshots; no I/O
//! - Deterministic output for a given input (stable schedule previews)
//! - Typed validation errors; incomplete states are values, not errors
//!
//! Persistence, score entry and presentation live in the surrounding
//! application; this crate only consumes snapshots and returns results.

pub mod api;
pub mod bracket;
pub mod error;
pub mod models;
pub mod schedule;
pub mod series;
pub mod standings;

// Re-export the engine surface
pub use api::{
    advance_round_json, build_bracket_json, house_schedule_json, resolve_series_json,
    schedule_knockout_json, split_houses_json, standings_delta_json,
};
pub use bracket::{advance_round, build_bracket};
pub use error::{EngineError, Result};
pub use models::{
    BracketSlot, BracketState, House, HouseFixture, MatchRecord, MatchScore, Matchup, RankedTeam,
    RawSchedule, Round, ScheduleSlot, SeededTeam, Series, SeriesMatch, TeamId, TeamRef,
    BRACKET_SIZE,
};
pub use schedule::{
    generate_round_robin, plan_houses, round_count, schedule_knockout, split_houses, HousePlan,
    KnockoutSchedule, PacingPolicy, ScheduledMatch,
};
pub use series::{resolve_series, SeriesOutcome};
pub use standings::standings_delta;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
