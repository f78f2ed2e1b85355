//! Knockout bracket construction and round advancement.

mod advancer;
mod builder;

pub use advancer::advance_round;
pub use builder::build_bracket;

#[cfg(test)]
mod flow_test;
