//! Rotation-based fairness engine.
//!
//! Assigns a participant to every unit of a season, block by block. Each
//! block type carries two rotation orders — one for single-week picks, one
//! for back-to-back (double) picks — with independent cursors. Both
//! survive across seasons: a rotation interrupted by a short block resumes
//! exactly where it stopped in the next season, which is what bounds
//! cumulative unfairness across years. A global tally counts units ever
//! assigned per participant, for reporting only.
//!
//! # Algorithm (per block, `L` units, `n` participants)
//!
//! - `L <= n`: every unit comes from the block type's single rotation.
//!   Participants left out simply wait; the cursor carries over.
//! - `L > n`: back-to-back pairs are handed out first — `n` pairs when
//!   `L >= 2n`, otherwise `L mod n` pairs (only the weeks beyond one full
//!   single round become pairs). Leftover units go one each to the
//!   participants not yet served in this block, or to the single rotation
//!   once everyone has had a pair.
//!
//! A completed pass over an order rotates it left by one, so the next pass
//! starts one participant later.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Block, BlockType, Season};

/// One rotation order plus the cursor of the current picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Rotation {
    order: Vec<String>,
    cursor: usize,
}

impl Rotation {
    fn new(participants: &[String]) -> Self {
        Self {
            order: participants.to_vec(),
            cursor: 0,
        }
    }

    /// Participant at the cursor.
    fn current(&self) -> &str {
        &self.order[self.cursor]
    }

    /// Advances the cursor. A completed pass rotates the order left by one
    /// and resets the cursor, so the next pass starts one participant
    /// later.
    fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor == self.order.len() {
            self.order = rotated(&self.order, 1);
            self.cursor = 0;
        }
    }
}

/// Rotation state for one block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PickState {
    single: Rotation,
    double: Rotation,
}

impl PickState {
    fn new(participants: &[String]) -> Self {
        Self {
            single: Rotation::new(participants),
            double: Rotation::new(participants),
        }
    }
}

/// Fairness engine that assigns participants to season units.
///
/// One instance must own every season of a schedule, assigned in
/// chronological order; its rotation state is what carries fairness across
/// years. Seasons built with a different participant count than this
/// scheduler's must not be passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheduler {
    participant_count: usize,
    fairness: HashMap<String, u32>,
    picks: HashMap<BlockType, PickState>,
}

impl Scheduler {
    /// Creates a scheduler for a participant group.
    ///
    /// The input order establishes the initial pick order for every block
    /// type. Names are assumed unique.
    pub fn new(participants: &[String]) -> Self {
        let fairness = participants.iter().map(|p| (p.clone(), 0)).collect();
        let picks = [BlockType::Opening, BlockType::Prime, BlockType::Closing]
            .into_iter()
            .map(|block_type| (block_type, PickState::new(participants)))
            .collect();
        Self {
            participant_count: participants.len(),
            fairness,
            picks,
        }
    }

    /// Number of participants this scheduler was created with.
    #[inline]
    pub fn participant_count(&self) -> usize {
        self.participant_count
    }

    /// Cumulative units ever assigned, per participant.
    pub fn fairness(&self) -> &HashMap<String, u32> {
        &self.fairness
    }

    /// Assigns every unit of a season, in block order.
    ///
    /// Rotation state advances as a side effect; assigning the next season
    /// continues from the state this call leaves behind.
    pub fn assign_season(&mut self, season: &mut Season) {
        for block in &mut season.blocks {
            self.assign_block(block);
        }
        debug!(
            year = season.year,
            units = season.unit_count(),
            "assigned season"
        );
    }

    fn assign_block(&mut self, block: &mut Block) {
        let n = self.participant_count;
        let Some(state) = self.picks.get_mut(&block.block_type) else {
            // Untyped blocks carry no rotation state.
            return;
        };
        let units = &mut block.units;

        let density = units.len() as f64 / n as f64;
        if density > 1.0 {
            // One back-to-back pair per participant at most. When the
            // block cannot give everyone a pair, only the weeks beyond one
            // full single round become pairs.
            let doubles = if density < 2.0 { units.len() % n } else { n };

            // Participants not yet served in this block, in pick order.
            let mut remaining = rotated(&state.double.order, state.double.cursor);

            let mut unit_idx = 0;
            for _ in 0..doubles {
                let participant = state.double.current().to_owned();
                units[unit_idx].assign(participant.as_str());
                units[unit_idx + 1].assign(participant.as_str());
                unit_idx += 2;
                if let Some(pos) = remaining.iter().position(|p| p == &participant) {
                    remaining.remove(pos);
                }
                *self.fairness.entry(participant).or_default() += 2;
                state.double.advance();
            }

            if doubles < n {
                // Everyone left in the scratch list still gets one week.
                while unit_idx < units.len() && !remaining.is_empty() {
                    let participant = remaining.remove(0);
                    units[unit_idx].assign(participant.as_str());
                    unit_idx += 1;
                    *self.fairness.entry(participant).or_default() += 1;
                }
            } else {
                // Every participant already has a pair; leftovers come
                // from the single rotation.
                while unit_idx < units.len() {
                    let participant = state.single.current().to_owned();
                    units[unit_idx].assign(participant.as_str());
                    unit_idx += 1;
                    *self.fairness.entry(participant).or_default() += 1;
                    state.single.advance();
                }
            }
        } else {
            // Not enough units for everyone: hand out singles and let the
            // rotation continue into the next season where it stops here.
            for unit in units.iter_mut() {
                let participant = state.single.current().to_owned();
                unit.assign(participant.as_str());
                *self.fairness.entry(participant).or_default() += 1;
                state.single.advance();
            }
        }

        debug!(
            block_type = %block.block_type,
            units = block.units.len(),
            "assigned block"
        );
    }
}

/// Copy of `order` rotated left by `steps`.
fn rotated(order: &[String], steps: usize) -> Vec<String> {
    let mut out = order.to_vec();
    if !out.is_empty() {
        let mid = steps % out.len();
        out.rotate_left(mid);
    }
    out
}
