//! Season construction and block-type classification.
//!
//! A season is `weeks` whole weeks starting on an anchor day, partitioned
//! into Opening/Prime/Closing blocks:
//!
//! - The opening block spans exactly one week per participant.
//! - When the season affords at least two weeks per participant, the final
//!   weeks (again one per participant) form a closing block and everything
//!   between opening and closing is prime.
//! - When it does not, everything after the opening collapses into closing
//!   rather than prime. This asymmetry with the opening rule is the
//!   documented behavior; the closing block absorbs the shortfall.
//!
//! Classification is day-of-year arithmetic evaluated independently per
//! candidate week; block boundaries are detected by value changes across
//! consecutive weeks, with the trailing run flushed so the blocks always
//! partition the full date range.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Block, BlockType, Unit};
use crate::anchor;
use crate::error::ScheduleError;

/// One year's worth of blocks between an open and close date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Calendar year, derived from the close date.
    pub year: i32,
    /// First week's start date (an anchor day).
    pub open: NaiveDate,
    /// Last week's start date (an anchor day).
    pub close: NaiveDate,
    /// Blocks in chronological order, covering `[open, close]` with no
    /// gaps and no overlapping units.
    pub blocks: Vec<Block>,
}

impl Season {
    /// Builds a season of `weeks` weeks for `participant_count`
    /// participants, opening on the anchor day closest to `anchor_date`.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InsufficientWeeks`] when `weeks` is less than
    /// `participant_count`; no block or unit is created in that case.
    pub fn build(
        anchor_date: NaiveDate,
        weeks: u32,
        participant_count: usize,
    ) -> Result<Self, ScheduleError> {
        Self::from_open(anchor::closest_anchor(anchor_date), weeks, participant_count)
    }

    /// Builds a season opening on the `ordinal`-th anchor day of `month`.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::NoSuchAnchorDay`] when the ordinal does not occur
    /// in the month, [`ScheduleError::InsufficientWeeks`] as for
    /// [`Season::build`].
    pub fn build_at_ordinal(
        year: i32,
        month: u32,
        ordinal: u32,
        weeks: u32,
        participant_count: usize,
    ) -> Result<Self, ScheduleError> {
        let open = anchor::nth_anchor_of_month(year, month, ordinal)?;
        Self::from_open(open, weeks, participant_count)
    }

    fn from_open(
        open: NaiveDate,
        weeks: u32,
        participant_count: usize,
    ) -> Result<Self, ScheduleError> {
        if (weeks as usize) < participant_count {
            return Err(ScheduleError::InsufficientWeeks {
                weeks,
                participants: participant_count,
            });
        }
        let close = open + Duration::days(7 * (i64::from(weeks) - 1));
        Ok(Self {
            year: close.year(),
            open,
            close,
            blocks: partition_blocks(open, close, participant_count),
        })
    }

    /// Total number of units across all blocks.
    pub fn unit_count(&self) -> usize {
        self.blocks.iter().map(Block::unit_count).sum()
    }

    /// Units of all blocks in chronological order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.blocks.iter().flat_map(|b| b.units.iter())
    }
}

/// Splits `[open, close]` into typed blocks by scanning week starts in
/// 7-day steps and closing a block whenever the classification changes.
///
/// The scan runs one extra iteration past `close` so a classification
/// change there flushes the final block; when the trailing run keeps its
/// type through that iteration (short seasons whose tail is all closing),
/// it is closed explicitly.
fn partition_blocks(open: NaiveDate, close: NaiveDate, participant_count: usize) -> Vec<Block> {
    let flush = close + Duration::days(7);
    let mut blocks = Vec::new();
    let mut current = classify_week(open, open, close, participant_count);
    let mut block_open = open;

    let mut day = open + Duration::days(7);
    while day <= flush {
        let block_type = classify_week(day, open, close, participant_count);
        if block_type != current {
            blocks.push(Block::new(block_open, day, current));
            block_open = day;
            current = block_type;
        }
        day += Duration::days(7);
    }
    if block_open <= close {
        blocks.push(Block::new(block_open, flush, current));
    }
    blocks
}

/// Classifies one week within a season by day-of-year arithmetic.
///
/// Evaluated independently per candidate week; no lookback beyond the
/// season's own bounds.
fn classify_week(
    week_start: NaiveDate,
    open: NaiveDate,
    close: NaiveDate,
    participant_count: usize,
) -> BlockType {
    let n = participant_count as i64;
    let week_yd = i64::from(week_start.ordinal());
    let open_yd = i64::from(open.ordinal());
    let close_yd = i64::from(close.ordinal());

    let open_end_yd = open_yd + 7 * n;
    let close_start_yd = close_yd - 7 * n;
    let total_weeks = (close + Duration::days(7))
        .signed_duration_since(open)
        .num_days()
        / 7;

    // The opening block always spans exactly one week per participant.
    if (open_yd..open_end_yd).contains(&week_yd) {
        return BlockType::Opening;
    }
    // Long enough to afford a full closing block as well.
    if total_weeks / n >= 2 {
        if close_start_yd < week_yd && week_yd <= close_yd {
            return BlockType::Closing;
        }
        return BlockType::Prime;
    }
    // Too short for a dedicated closing run; the rest is all closing.
    BlockType::Closing
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classify_week() {
        let open = date(2020, 4, 26);
        let close = date(2020, 10, 4);

        assert_eq!(
            classify_week(date(2020, 4, 26), open, close, 6),
            BlockType::Opening
        );
        assert_eq!(
            classify_week(date(2020, 6, 7), open, close, 6),
            BlockType::Prime
        );
        assert_eq!(
            classify_week(date(2020, 8, 23), open, close, 6),
            BlockType::Prime
        );
        assert_eq!(
            classify_week(date(2020, 8, 30), open, close, 6),
            BlockType::Closing
        );
    }

    #[test]
    fn test_season_rejects_insufficient_weeks() {
        let err = Season::build_at_ordinal(2020, 7, 1, 3, 6).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InsufficientWeeks {
                weeks: 3,
                participants: 6,
            }
        );

        // 4 weeks for 6 participants fails the same way
        let err = Season::build(date(2020, 4, 19), 4, 6).unwrap_err();
        assert!(matches!(err, ScheduleError::InsufficientWeeks { .. }));

        // Exactly one week per participant is allowed
        assert!(Season::build(date(2020, 4, 19), 6, 6).is_ok());
    }

    #[test]
    fn test_season_open_close_on_anchor() {
        let season = Season::build_at_ordinal(2020, 4, 3, 27, 7).unwrap();
        assert_eq!(season.open, date(2020, 4, 19));
        assert_eq!(season.close, date(2020, 10, 18));
        assert_eq!(season.open.weekday(), Weekday::Sun);
        assert_eq!(season.close.weekday(), Weekday::Sun);
        assert_eq!(season.year, 2020);
    }

    #[test]
    fn test_season_block_shape_long() {
        // 25 weeks, 6 participants: opening 6, prime 13, closing 6
        let season = Season::build_at_ordinal(2020, 4, 2, 25, 6).unwrap();
        let shape: Vec<(BlockType, usize)> = season
            .blocks
            .iter()
            .map(|b| (b.block_type, b.unit_count()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (BlockType::Opening, 6),
                (BlockType::Prime, 13),
                (BlockType::Closing, 6),
            ]
        );
    }

    #[test]
    fn test_season_exactly_one_week_each() {
        // weeks == participants: the whole season is one opening block
        let season = Season::build(date(2020, 4, 19), 6, 6).unwrap();
        let shape: Vec<(BlockType, usize)> = season
            .blocks
            .iter()
            .map(|b| (b.block_type, b.unit_count()))
            .collect();
        assert_eq!(shape, vec![(BlockType::Opening, 6)]);
    }

    #[test]
    fn test_short_season_collapses_into_closing() {
        // Less than two weeks per participant: no prime block, the tail
        // after the opening is all closing (intentional asymmetry).
        let season = Season::build(date(2020, 4, 19), 8, 6).unwrap();
        let shape: Vec<(BlockType, usize)> = season
            .blocks
            .iter()
            .map(|b| (b.block_type, b.unit_count()))
            .collect();
        assert_eq!(
            shape,
            vec![(BlockType::Opening, 6), (BlockType::Closing, 2)]
        );
    }

    #[test]
    fn test_season_blocks_partition_range() {
        let season = Season::build_at_ordinal(2020, 4, 4, 22, 6).unwrap();
        assert_eq!(season.unit_count(), 22);

        // Adjacent blocks share a boundary: close == next open
        for pair in season.blocks.windows(2) {
            assert_eq!(pair[0].close, pair[1].open);
        }

        // Units run weekly from open to close with no gap or overlap
        let starts: Vec<NaiveDate> = season.units().map(|u| u.start).collect();
        assert_eq!(starts[0], season.open);
        assert_eq!(*starts.last().unwrap(), season.close);
        for pair in starts.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(7));
        }
    }

    #[test]
    fn test_season_year_from_close_date() {
        // A season opened in November closes the following year
        let season = Season::build(date(2020, 11, 1), 12, 4).unwrap();
        assert_eq!(season.open, date(2020, 11, 1));
        assert_eq!(season.close.year(), 2021);
        assert_eq!(season.year, 2021);
        assert_eq!(season.unit_count(), 12);
    }
}
