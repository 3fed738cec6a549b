//! Error taxonomy.
//!
//! Every failure stems from invalid static input (a season too short for
//! its group, or an anchor date that cannot be resolved). Errors are
//! returned as values and are terminal for the operation that raised them;
//! there are no retryable failure modes.

use thiserror::Error;

/// Errors raised while resolving anchor dates or constructing seasons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The requested season cannot give every participant at least one week.
    #[error("season of {weeks} week(s) cannot give each of {participants} participant(s) a week")]
    InsufficientWeeks {
        /// Requested weeks per season.
        weeks: u32,
        /// Number of participants in the group.
        participants: usize,
    },

    /// The requested weekday ordinal does not occur in the month.
    #[error("no anchor day with ordinal {ordinal} in {year}-{month:02}")]
    NoSuchAnchorDay {
        /// Calendar year.
        year: i32,
        /// Calendar month (1..=12).
        month: u32,
        /// Requested occurrence of the anchor weekday within the month.
        ordinal: u32,
    },

    /// The year/month/day triple does not name a real calendar date.
    #[error("no such calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Calendar year.
        year: i32,
        /// Calendar month (1..=12).
        month: u32,
        /// Day of month.
        day: u32,
    },
}
