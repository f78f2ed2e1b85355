pub mod json_api;

pub use json_api::{
    advance_round_json, build_bracket_json, house_schedule_json, resolve_series_json,
    schedule_knockout_json, split_houses_json, standings_delta_json, error_codes,
};
