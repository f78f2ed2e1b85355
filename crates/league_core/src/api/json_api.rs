//! String-in/string-out JSON entry points for the host application.
//!
//! Requests carry a `schema_version`; errors come back as
//! `"CODE: message"` strings so the caller can map them to user-facing
//! text without parsing engine internals.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::bracket::{advance_round, build_bracket};
use crate::error::EngineError;
use crate::models::bracket::BracketState;
use crate::models::matchup::{Matchup, Round};
use crate::models::series::Series;
use crate::models::team::{RankedTeam, TeamId, TeamRef};
use crate::schedule::{
    generate_round_robin, plan_houses, schedule_knockout, HousePlan, PacingPolicy, ScheduledMatch,
};
use crate::series::resolve_series;
use crate::standings::standings_delta;

pub const API_SCHEMA_VERSION: u8 = 1;

pub mod error_codes {
    pub const INVALID_REQUEST: &str = "E_INVALID_REQUEST";
    pub const SCHEMA_MISMATCH: &str = "E_SCHEMA_MISMATCH";
    pub const INSUFFICIENT_TEAMS: &str = "E_INSUFFICIENT_TEAMS";
    pub const ROUND_INCOMPLETE: &str = "E_ROUND_INCOMPLETE";
    pub const INVALID_SERIES_LENGTH: &str = "E_INVALID_SERIES_LENGTH";
    pub const INVALID_TABLE_COUNT: &str = "E_INVALID_TABLE_COUNT";
    pub const INVALID_SPLIT: &str = "E_INVALID_SPLIT";
    pub const TIED_SCORE: &str = "E_TIED_SCORE";
    pub const UNKNOWN_MATCH_NUMBER: &str = "E_UNKNOWN_MATCH_NUMBER";
    pub const SERIALIZATION: &str = "E_SERIALIZATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn engine_err(err: EngineError) -> String {
    let code = match err {
        EngineError::InsufficientTeams { .. } => error_codes::INSUFFICIENT_TEAMS,
        EngineError::RoundIncomplete { .. } => error_codes::ROUND_INCOMPLETE,
        EngineError::InvalidSeriesLength { .. } => error_codes::INVALID_SERIES_LENGTH,
        EngineError::InvalidTableCount { .. } => error_codes::INVALID_TABLE_COUNT,
        EngineError::InvalidSplit { .. } => error_codes::INVALID_SPLIT,
        EngineError::TiedScore { .. } => error_codes::TIED_SCORE,
        EngineError::UnknownMatchNumber { .. } => error_codes::UNKNOWN_MATCH_NUMBER,
    };
    err_code(code, err)
}

fn parse_request<'a, T: Deserialize<'a>>(request: &'a str) -> Result<T, String> {
    serde_json::from_str(request).map_err(|e| err_code(error_codes::INVALID_REQUEST, e))
}

fn check_schema(schema_version: u8) -> Result<(), String> {
    if schema_version != API_SCHEMA_VERSION {
        return Err(err_code(
            error_codes::SCHEMA_MISMATCH,
            format!("expected schema_version {API_SCHEMA_VERSION}, got {schema_version}"),
        ));
    }
    Ok(())
}

fn to_json<T: Serialize>(response: &T) -> Result<String, String> {
    serde_json::to_string(response).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

#[derive(Debug, Deserialize)]
pub struct BuildBracketRequest {
    pub schema_version: u8,
    /// Best-first ranked teams; exactly 8 expected.
    pub ranked_teams: Vec<TeamRef>,
    pub best_of: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BracketResponse {
    pub schema_version: u8,
    pub bracket: BracketState,
}

/// Seeds a knockout bracket from a ranked team list.
pub fn build_bracket_json(request: &str) -> Result<String, String> {
    let req: BuildBracketRequest = parse_request(request)?;
    check_schema(req.schema_version)?;
    let bracket = build_bracket(&req.ranked_teams, req.best_of).map_err(engine_err)?;
    to_json(&BracketResponse { schema_version: API_SCHEMA_VERSION, bracket })
}

#[derive(Debug, Deserialize)]
pub struct AdvanceRoundRequest {
    pub schema_version: u8,
    pub bracket: BracketState,
    pub round: Round,
}

/// Advances a completed round; idempotent for already-advanced rounds.
pub fn advance_round_json(request: &str) -> Result<String, String> {
    let req: AdvanceRoundRequest = parse_request(request)?;
    check_schema(req.schema_version)?;
    let bracket = advance_round(&req.bracket, req.round).map_err(engine_err)?;
    to_json(&BracketResponse { schema_version: API_SCHEMA_VERSION, bracket })
}

#[derive(Debug, Deserialize)]
pub struct ResolveSeriesRequest {
    pub schema_version: u8,
    pub series: Series,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveSeriesResponse {
    pub schema_version: u8,
    pub winner: Option<TeamId>,
    pub home_wins: u8,
    pub away_wins: u8,
}

/// Resolves one series; an open series reports `winner: null`.
pub fn resolve_series_json(request: &str) -> Result<String, String> {
    let req: ResolveSeriesRequest = parse_request(request)?;
    check_schema(req.schema_version)?;
    let outcome = resolve_series(&req.series).map_err(engine_err)?;
    to_json(&ResolveSeriesResponse {
        schema_version: API_SCHEMA_VERSION,
        winner: outcome.winner,
        home_wins: outcome.home_wins,
        away_wins: outcome.away_wins,
    })
}

#[derive(Debug, Deserialize)]
pub struct ScheduleKnockoutRequest {
    pub schema_version: u8,
    pub matchups: Vec<Matchup>,
    pub best_of: u8,
    pub policy: PacingPolicy,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub interval_minutes: i64,
    pub table_count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleKnockoutResponse {
    pub schema_version: u8,
    pub effective_table_count: u32,
    pub slots: Vec<ScheduledMatch>,
}

/// Produces per-match (date, time, table) assignments for a round.
pub fn schedule_knockout_json(request: &str) -> Result<String, String> {
    let req: ScheduleKnockoutRequest = parse_request(request)?;
    check_schema(req.schema_version)?;
    let schedule = schedule_knockout(
        &req.matchups,
        req.best_of,
        req.policy,
        req.start_date.and_time(req.start_time),
        Duration::minutes(req.interval_minutes),
        req.table_count,
    )
    .map_err(engine_err)?;
    to_json(&ScheduleKnockoutResponse {
        schema_version: API_SCHEMA_VERSION,
        effective_table_count: schedule.effective_table_count,
        slots: schedule.slots,
    })
}

#[derive(Debug, Deserialize)]
pub struct SplitHousesRequest {
    pub schema_version: u8,
    pub ranked_teams: Vec<TeamRef>,
    pub upper_size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SplitHousesResponse {
    pub schema_version: u8,
    pub plan: HousePlan,
}

/// Splits the standings into houses and reports expected round counts.
pub fn split_houses_json(request: &str) -> Result<String, String> {
    let req: SplitHousesRequest = parse_request(request)?;
    check_schema(req.schema_version)?;
    let plan = plan_houses(&req.ranked_teams, req.upper_size).map_err(engine_err)?;
    to_json(&SplitHousesResponse { schema_version: API_SCHEMA_VERSION, plan })
}

#[derive(Debug, Deserialize)]
pub struct HouseScheduleRequest {
    pub schema_version: u8,
    pub teams: Vec<TeamRef>,
    pub game_date: NaiveDate,
    pub start_time: NaiveTime,
    pub match_duration_minutes: i64,
    pub table_count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HouseScheduleResponse {
    pub schema_version: u8,
    pub fixtures: Vec<crate::models::house::HouseFixture>,
}

/// Generates one house's double round-robin preview batch.
pub fn house_schedule_json(request: &str) -> Result<String, String> {
    let req: HouseScheduleRequest = parse_request(request)?;
    check_schema(req.schema_version)?;
    let fixtures = generate_round_robin(
        &req.teams,
        req.game_date,
        req.start_time,
        Duration::minutes(req.match_duration_minutes),
        req.table_count,
    )
    .map_err(engine_err)?;
    to_json(&HouseScheduleResponse { schema_version: API_SCHEMA_VERSION, fixtures })
}

#[derive(Debug, Deserialize)]
pub struct StandingsDeltaRequest {
    pub schema_version: u8,
    pub previous: Vec<RankedTeam>,
    pub current: Vec<RankedTeam>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankMove {
    pub team: TeamId,
    pub delta: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsDeltaResponse {
    pub schema_version: u8,
    pub moves: Vec<RankMove>,
}

/// Rank movement between two standings snapshots; positive = improved.
pub fn standings_delta_json(request: &str) -> Result<String, String> {
    let req: StandingsDeltaRequest = parse_request(request)?;
    check_schema(req.schema_version)?;
    let mut moves: Vec<RankMove> = standings_delta(&req.previous, &req.current)
        .into_iter()
        .map(|(team, delta)| RankMove { team, delta })
        .collect();
    // HashMap iteration order is not stable; keep the payload deterministic.
    moves.sort_by_key(|m| m.team);
    to_json(&StandingsDeltaResponse { schema_version: API_SCHEMA_VERSION, moves })
}
