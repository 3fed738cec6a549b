//! Weekly unit model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar week within a season.
///
/// Created unassigned during season construction; the scheduler writes the
/// participant exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Week start date. Always falls on the anchor weekday.
    pub start: NaiveDate,
    /// Assigned participant name. Empty until assignment.
    pub participant: String,
    /// Reserved for a future per-unit weighting scheme. Not read by the
    /// rotation engine.
    pub point_value: f32,
}

impl Unit {
    /// Creates an unassigned unit starting at `start`.
    pub fn new(start: NaiveDate) -> Self {
        Self {
            start,
            participant: String::new(),
            point_value: 0.0,
        }
    }

    /// Assigns this unit to a participant.
    pub fn assign(&mut self, participant: impl Into<String>) {
        self.participant = participant.into();
    }

    /// Whether a participant has been assigned.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        !self.participant.is_empty()
    }
}
