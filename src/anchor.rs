//! Anchor-weekday date arithmetic.
//!
//! Every unit in a schedule starts on the anchor weekday (Sunday). This
//! module resolves arbitrary dates onto that weekly grid and segments date
//! ranges into whole weeks.
//!
//! # Resolution rules
//!
//! - [`closest_anchor`]: a date more than half a week past the most recent
//!   anchor day advances to the next one; otherwise it falls back.
//! - [`nth_anchor_of_month`]: resolves "the Nth Sunday of a month" relative
//!   to the month's weekly grid. An ordinal-1 request in a month whose
//!   first day lands just after the anchor weekday resolves to the prior
//!   month's last anchor day.
//! - [`segment_weeks`]: fractional trailing weeks are dropped, never
//!   rounded up.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::ScheduleError;
use crate::models::Unit;

/// Weekday every unit starts on.
pub const ANCHOR_WEEKDAY: Weekday = Weekday::Sun;

/// Moves `date` to the nearest occurrence of the anchor weekday.
///
/// Dates on Thursday through Saturday advance to the next anchor day;
/// dates on Sunday through Wednesday fall back to the previous one
/// (Sunday resolves to itself).
pub fn closest_anchor(date: NaiveDate) -> NaiveDate {
    let past = date.weekday().num_days_from_sunday();
    if past > 3 {
        date + Duration::days(i64::from(7 - past))
    } else {
        date - Duration::days(i64::from(past))
    }
}

/// Date of the `ordinal`-th anchor weekday in `month` of `year`.
///
/// # Errors
///
/// [`ScheduleError::NoSuchAnchorDay`] when the requested occurrence falls
/// past the 31st, [`ScheduleError::InvalidDate`] when `month` is not a
/// real month.
pub fn nth_anchor_of_month(
    year: i32,
    month: u32,
    ordinal: u32,
) -> Result<NaiveDate, ScheduleError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(ScheduleError::InvalidDate {
        year,
        month,
        day: 1,
    })?;

    // Day-of-month of the first anchor day on the month's weekly grid.
    // 0 means the anchor day immediately before the 1st.
    let to_first = i64::from((8 - first.weekday().num_days_from_sunday()) % 7);
    let day_of_month = to_first + 7 * (i64::from(ordinal) - 1);
    if day_of_month > 31 {
        return Err(ScheduleError::NoSuchAnchorDay {
            year,
            month,
            ordinal,
        });
    }
    Ok(first + Duration::days(day_of_month - 1))
}

/// Segments `[start, end]` into units of 7 days each.
///
/// Walks from `start` in 7-day steps; a step is included only if its full
/// 7-day span stays within the range. A range of `D` days that starts and
/// ends on the anchor weekday yields exactly `D / 7` units.
pub fn segment_weeks(start: NaiveDate, end: NaiveDate) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut day = start;
    while day <= end {
        let next = day + Duration::days(7);
        if next <= end {
            units.push(Unit::new(day));
        }
        day = next;
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_closest_anchor_identity() {
        // Already a Sunday
        let sunday = date(2020, 8, 2);
        assert_eq!(closest_anchor(sunday), sunday);
    }

    #[test]
    fn test_closest_anchor_falls_back() {
        // Wednesday (3 days past) falls back
        assert_eq!(closest_anchor(date(2020, 8, 5)), date(2020, 8, 2));
        // Monday falls back
        assert_eq!(closest_anchor(date(2020, 8, 3)), date(2020, 8, 2));
    }

    #[test]
    fn test_closest_anchor_advances() {
        // Thursday (4 days past) advances
        assert_eq!(closest_anchor(date(2020, 8, 6)), date(2020, 8, 9));
        // Saturday advances
        assert_eq!(closest_anchor(date(2020, 8, 8)), date(2020, 8, 9));
    }

    #[test]
    fn test_nth_anchor_of_month() {
        assert_eq!(nth_anchor_of_month(2019, 9, 1).unwrap(), date(2019, 9, 1));
        assert_eq!(nth_anchor_of_month(2020, 8, 2).unwrap(), date(2020, 8, 9));
        assert_eq!(nth_anchor_of_month(2020, 8, 3).unwrap(), date(2020, 8, 16));
        assert_eq!(nth_anchor_of_month(2020, 5, 4).unwrap(), date(2020, 5, 24));
        assert_eq!(nth_anchor_of_month(2020, 5, 5).unwrap(), date(2020, 5, 31));
    }

    #[test]
    fn test_nth_anchor_of_month_grid_before_first() {
        // June 2020 starts on a Monday; ordinal 1 resolves to the grid's
        // anchor day just before the 1st.
        assert_eq!(nth_anchor_of_month(2020, 6, 1).unwrap(), date(2020, 5, 31));
    }

    #[test]
    fn test_nth_anchor_of_month_out_of_range() {
        let err = nth_anchor_of_month(2019, 9, 6).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::NoSuchAnchorDay {
                year: 2019,
                month: 9,
                ordinal: 6,
            }
        );
    }

    #[test]
    fn test_nth_anchor_of_month_bad_month() {
        let err = nth_anchor_of_month(2020, 13, 1).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidDate { month: 13, .. }));
    }

    #[test]
    fn test_segment_weeks_truncates() {
        let sunday = date(2020, 8, 2);
        // 14 days → 2 units
        assert_eq!(segment_weeks(sunday, sunday + Duration::days(14)).len(), 2);
        // 13 days → 1 unit (fraction dropped)
        assert_eq!(segment_weeks(sunday, sunday + Duration::days(13)).len(), 1);
        // 29 days → 4 units
        assert_eq!(segment_weeks(sunday, sunday + Duration::days(29)).len(), 4);
    }

    #[test]
    fn test_segment_weeks_starts_on_anchor() {
        let sunday = date(2020, 8, 2);
        let units = segment_weeks(sunday, sunday + Duration::days(29));
        assert_eq!(units[0].start, sunday);
        for unit in &units {
            assert_eq!(unit.start.weekday(), ANCHOR_WEEKDAY);
        }
        // Consecutive units are exactly a week apart
        for pair in units.windows(2) {
            assert_eq!(pair[1].start - pair[0].start, Duration::days(7));
        }
    }

    #[test]
    fn test_segment_weeks_degenerate_range() {
        let sunday = date(2020, 8, 2);
        assert!(segment_weeks(sunday, sunday).is_empty());
        // Inverted range yields nothing rather than failing
        assert!(segment_weeks(sunday, sunday - Duration::days(7)).is_empty());
    }
}
