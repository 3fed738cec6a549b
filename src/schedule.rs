//! Multi-year schedule aggregation.
//!
//! Builds one season per year, all anchored to the same calendar day, and
//! feeds each through a single shared [`Scheduler`] in year order. Order
//! matters: the scheduler's rotation state is strictly sequential, so a
//! season must be assigned before the next year's season is built.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::Season;
use crate::scheduler::Scheduler;

/// A fully assigned schedule: consecutive seasons, one per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// First season's year.
    pub start_year: i32,
    /// Number of seasons.
    pub years: u32,
    /// Weeks in each season.
    pub weeks_per_season: u32,
    /// Participant group, in initial pick order.
    pub participants: Vec<String>,
    /// Seasons in ascending year order, fully assigned.
    pub seasons: Vec<Season>,
    scheduler: Scheduler,
}

impl Schedule {
    /// Builds `years` consecutive seasons anchored to `start`'s month and
    /// day, each opening on the closest anchor day of its year.
    ///
    /// # Errors
    ///
    /// Surfaces the first season-construction error and stops building
    /// further seasons. [`ScheduleError::InvalidDate`] when `start`'s
    /// month/day does not exist in some year (for example February 29).
    pub fn build(
        start: NaiveDate,
        years: u32,
        weeks_per_season: u32,
        participants: Vec<String>,
    ) -> Result<Self, ScheduleError> {
        let (month, day) = (start.month(), start.day());
        let count = participants.len();
        Self::assemble(start.year(), years, weeks_per_season, participants, |year| {
            let anchor_date =
                NaiveDate::from_ymd_opt(year, month, day).ok_or(ScheduleError::InvalidDate {
                    year,
                    month,
                    day,
                })?;
            Season::build(anchor_date, weeks_per_season, count)
        })
    }

    /// Builds a schedule whose seasons open on the `ordinal`-th anchor
    /// day of `month` each year.
    ///
    /// # Errors
    ///
    /// As for [`Schedule::build`], plus
    /// [`ScheduleError::NoSuchAnchorDay`] when the ordinal does not occur
    /// in the month.
    pub fn build_at_ordinal(
        start_year: i32,
        years: u32,
        weeks_per_season: u32,
        ordinal: u32,
        month: u32,
        participants: Vec<String>,
    ) -> Result<Self, ScheduleError> {
        let count = participants.len();
        Self::assemble(start_year, years, weeks_per_season, participants, |year| {
            Season::build_at_ordinal(year, month, ordinal, weeks_per_season, count)
        })
    }

    fn assemble(
        start_year: i32,
        years: u32,
        weeks_per_season: u32,
        participants: Vec<String>,
        mut season_for_year: impl FnMut(i32) -> Result<Season, ScheduleError>,
    ) -> Result<Self, ScheduleError> {
        let mut scheduler = Scheduler::new(&participants);
        let mut seasons = Vec::with_capacity(years as usize);
        for year in start_year..start_year + years as i32 {
            let mut season = season_for_year(year)?;
            scheduler.assign_season(&mut season);
            seasons.push(season);
        }
        debug!(start_year, years, weeks_per_season, "built schedule");
        Ok(Self {
            start_year,
            years,
            weeks_per_season,
            participants,
            seasons,
            scheduler,
        })
    }

    /// Final cumulative fairness tally (participant → units assigned).
    pub fn fairness(&self) -> &HashMap<String, u32> {
        self.scheduler.fairness()
    }
}
