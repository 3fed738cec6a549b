//! Block model: a contiguous run of same-typed weeks.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Unit;
use crate::anchor;

/// Phase of a season a block belongs to.
///
/// Determines which rotation state the scheduler draws picks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// Sentinel for out-of-range or degenerate classification results.
    None,
    /// The first weeks of a season, one per participant.
    Opening,
    /// Mid-season weeks between opening and closing.
    Prime,
    /// The final weeks of a season.
    Closing,
}

impl BlockType {
    /// Stable display name. Anything unrecognized maps to "None".
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Opening => "Opening",
            BlockType::Prime => "Prime",
            BlockType::Closing => "Closing",
            _ => "None",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous run of units sharing one block type.
///
/// `close` equals the open date of the following block (or one week past
/// the season's final unit); the units cover `[open, close)` in whole
/// weeks, with any fractional trailing week dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// First unit's start date.
    pub open: NaiveDate,
    /// Exclusive upper bound of the block's range.
    pub close: NaiveDate,
    /// Phase this block belongs to.
    pub block_type: BlockType,
    /// Units in chronological order.
    pub units: Vec<Unit>,
}

impl Block {
    /// Creates a block between two dates, segmenting the range into units.
    pub fn new(open: NaiveDate, close: NaiveDate, block_type: BlockType) -> Self {
        Self {
            open,
            close,
            block_type,
            units: anchor::segment_weeks(open, close),
        }
    }

    /// Number of units in this block.
    #[inline]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}
