//! Faculty model.
//!
//! A faculty member teaches theory lectures and/or lab blocks. Identity is
//! fixed at curriculum construction; the occupancy map is working state,
//! cleared and rebuilt on every scheduling attempt.

use serde::{Deserialize, Serialize};

use super::{FacultyId, Occupancy};

/// A faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Stable identifier (also the index into the scheduler's faculty list).
    pub id: FacultyId,
    /// Display name.
    pub name: String,
    /// Cells this faculty teaches in. Runtime state, not serialized.
    #[serde(skip)]
    pub occupancy: Occupancy,
}

impl Faculty {
    /// Creates a faculty member.
    pub fn new(id: FacultyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            occupancy: Occupancy::new(),
        }
    }
}
