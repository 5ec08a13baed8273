//! Error types
//!
//! Engine failures are local and recoverable: the caller reports them and
//! leaves the player's skills untouched.

use thiserror::Error;

use crate::engine::TicketType;
use crate::entities::{DefensivePosition, PositionTag};

/// Failures raised by a single ticket application
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkillChangeError {
    #[error("unknown ticket type: {0}")]
    InvalidTicketType(String),

    #[error("a legend skill is required to use this ticket")]
    MissingLegendSkill,

    #[error("{0} requires a slot selection")]
    MissingSlotSelection(TicketType),

    #[error("slot index {0} is out of range (expected 0-2)")]
    InvalidSlotIndex(usize),

    #[error("attempted to draw from an empty skill pool")]
    EmptyDrawPool,

    #[error("premium redraw gave up after {attempts} attempts")]
    RejectionLimitExceeded { attempts: u32 },

    #[error("invalid draw weights: {0}")]
    InvalidWeights(String),
}

/// Failures raised by the session controller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no player is selected")]
    NoPlayerSelected,

    #[error("no player exists at {0}")]
    UnknownPlayer(PositionTag),

    #[error("batch size {requested} must be between 1 and {max}")]
    InvalidBatchSize { requested: u32, max: u32 },

    #[error("defensive position {position} is already held by {holder}")]
    DefensivePositionTaken {
        position: DefensivePosition,
        holder: PositionTag,
    },

    #[error("{0} cannot hold a defensive position")]
    DefensivePositionNotAllowed(PositionTag),

    #[error(transparent)]
    Engine(#[from] SkillChangeError),
}

/// Failures raised while loading or exporting game data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },

    #[error("invalid game data: {0}")]
    Invalid(String),
}
