//! Best-of-N series resolution.

mod resolver;

#[cfg(test)]
mod proptests;

pub use resolver::{resolve_series, SeriesOutcome};
