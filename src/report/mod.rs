//! Presentation helpers for the command line front end

pub mod labels;
pub mod summary;

pub use labels::Locale;
pub use summary::{format_skills, format_change, format_stats, format_player, format_odds};
