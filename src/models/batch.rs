//! Batch (student group) model.
//!
//! Each batch receives its own weekly schedule. Like [`Faculty`], identity
//! is fixed at construction while the occupancy map is per-attempt working
//! state.
//!
//! [`Faculty`]: super::Faculty

use serde::{Deserialize, Serialize};

use super::{BatchId, Occupancy};

/// A student group requiring a weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Stable identifier (also the index into the scheduler's batch list).
    pub id: BatchId,
    /// Display name, e.g. `"ISEA"`.
    pub name: String,
    /// Cells filled for this batch. Runtime state, not serialized.
    #[serde(skip)]
    pub occupancy: Occupancy,
}

impl Batch {
    /// Creates a batch.
    pub fn new(id: BatchId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            occupancy: Occupancy::new(),
        }
    }
}
