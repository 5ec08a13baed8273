//! Roster entities

pub mod position;
pub mod player;

pub use position::{PitcherPosition, BatterPosition, PositionTag, DefensivePosition};
pub use player::Player;
