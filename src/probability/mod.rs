//! Probability model: slot weights, legend odds and level distributions

pub mod tables;
pub mod levels;

pub use tables::{ProbabilityModel, SlotWeights, LegendOdds, CardType, default_probability_model};
pub use levels::{LevelDistribution, LevelSumDistribution, MIN_LEVEL_SUM, MAX_LEVEL_SUM};
