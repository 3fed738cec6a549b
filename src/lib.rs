//! Fair rotation scheduling of recurring weekly time-slots.
//!
//! Assigns a fixed participant group to weekly units across successive
//! multi-year seasons. Each season's weeks are partitioned into typed
//! blocks (opening, prime, closing), and a rotation-based fairness engine
//! assigns a participant to every unit. Pick orders and cursors persist
//! across seasons, so allocation stays balanced over the long run without
//! weighting or randomness.
//!
//! # Modules
//!
//! - **`anchor`**: anchor-weekday date arithmetic and week segmentation
//! - **`models`**: domain types — `Unit`, `Block`, `BlockType`, `Season`
//! - **`scheduler`**: the rotation fairness engine
//! - **`schedule`**: multi-year aggregation through one shared scheduler
//! - **`error`**: error taxonomy
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use weekshare::Schedule;
//!
//! let participants = vec!["A".to_string(), "B".to_string(), "C".to_string()];
//! let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//!
//! let schedule = Schedule::build(start, 3, 12, participants).unwrap();
//! assert_eq!(schedule.seasons.len(), 3);
//! assert!(schedule.seasons[0].units().all(|u| u.is_assigned()));
//! ```
//!
//! # Architecture
//!
//! Data flows one direction: `anchor` → `models::Season` → `scheduler` →
//! `schedule`. The scheduler's rotation state is the only thing carried
//! between seasons; blocks and units are immutable once built except for
//! the participant the scheduler writes into each unit.

pub mod anchor;
pub mod error;
pub mod models;
pub mod schedule;
pub mod scheduler;

pub use error::ScheduleError;
pub use models::{Block, BlockType, Season, Unit};
pub use schedule::Schedule;
pub use scheduler::Scheduler;
