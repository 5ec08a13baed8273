//! Skillreroll - skill change ticket simulator
//!
//! Models the skill reroll mechanic of a baseball card game: players carry
//! three skill slots, and each ticket type redraws some of them from
//! tier-weighted tables. The engine is pure given a seeded RNG; the session
//! layer stores players, records statistics and commits results.

pub mod error;
pub mod skills;
pub mod probability;
pub mod engine;
pub mod entities;
pub mod session;
pub mod data;
pub mod report;

// Re-export commonly used types
pub use error::{SkillChangeError, SessionError, DataError};
pub use skills::{Skill, SkillSlots, Tier, PlayerType, SkillCatalog};
pub use probability::{ProbabilityModel, CardType};
pub use engine::{SkillChangeEngine, TicketType, TicketOptions};
pub use entities::{Player, PositionTag};
pub use session::{Session, SimulationStats};
pub use data::DataManager;
