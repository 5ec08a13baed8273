//! Batch simulation
//!
//! Runs the same ticket many times on one player, committing each result.
//! Iterations are strictly sequential; a cancel flag is checked between them.

use rand::Rng;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

use super::roster::Session;
use crate::engine::{TicketOptions, TicketType};
use crate::entities::PositionTag;
use crate::error::SessionError;

/// Upper bound on a single batch request
pub const MAX_SIMULATION_LIMIT: u32 = 10_000;

/// How far a batch got
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub requested: u32,
    pub completed: u32,
    pub cancelled: bool,
}

impl Session {
    /// Apply a ticket `count` times in a row.
    ///
    /// An engine failure stops the batch and is returned; iterations that
    /// already completed stay committed.
    pub fn simulate_batch(
        &mut self,
        position: PositionTag,
        ticket: TicketType,
        options: TicketOptions,
        count: u32,
        cancel: &AtomicBool,
        rng: &mut impl Rng,
    ) -> Result<BatchOutcome, SessionError> {
        if count == 0 || count > MAX_SIMULATION_LIMIT {
            return Err(SessionError::InvalidBatchSize {
                requested: count,
                max: MAX_SIMULATION_LIMIT,
            });
        }
        if self.player(position).is_none() {
            return Err(SessionError::UnknownPlayer(position));
        }

        let mut completed = 0;
        while completed < count {
            if cancel.load(Ordering::Relaxed) {
                log::info!("Batch on {} cancelled after {} of {}", position, completed, count);
                return Ok(BatchOutcome { requested: count, completed, cancelled: true });
            }
            self.apply(position, ticket, options, rng)?;
            completed += 1;
        }

        log::info!("Batch of {} {} tickets on {} finished", count, ticket, position);
        Ok(BatchOutcome { requested: count, completed, cancelled: false })
    }
}
