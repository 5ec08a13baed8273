//! Skill change engine: tickets, the draw pool and the ticket algorithms

pub mod ticket;
pub mod sampler;
pub mod change;

pub use ticket::{TicketType, TicketOptions};
pub use sampler::SkillPool;
pub use change::{SkillChangeEngine, DEFAULT_MAX_PREMIUM_ATTEMPTS, PLACEHOLDER_SKILL_NAME};
