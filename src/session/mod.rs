//! Session layer: player store, statistics and batch runs

pub mod stats;
pub mod roster;
pub mod batch;

pub use stats::SimulationStats;
pub use roster::{Session, SkillChange, Keep};
pub use batch::{BatchOutcome, MAX_SIMULATION_LIMIT};
