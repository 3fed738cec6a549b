//! Scheduling domain models.
//!
//! Core data types for representing a shared weekly rotation:
//!
//! | weekshare | Meaning |
//! |-----------|---------|
//! | Unit | One calendar week, assigned to exactly one participant |
//! | Block | Contiguous run of same-typed units within a season |
//! | Season | All blocks between an open and close date for one year |
//!
//! Units and blocks are immutable once a season is built, except for the
//! participant written into each unit by the scheduler.

mod block;
mod season;
mod unit;

pub use block::{Block, BlockType};
pub use season::Season;
pub use unit::Unit;
