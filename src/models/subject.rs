//! Subject model.
//!
//! A subject contributes `credits` one-slot theory units per week and, if it
//! carries a lab component, one two-slot contiguous lab block. Subjects are
//! immutable after construction; all slot counts are derived.

use serde::{Deserialize, Serialize};

use super::{FacultyId, SubjectId};

/// A subject taken by one or more batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Stable identifier (also the index into the scheduler's subject list).
    pub id: SubjectId,
    /// Short code, e.g. `"OS"`.
    pub code: String,
    /// Full display name.
    pub name: String,
    /// Weekly theory hours; one grid slot each.
    pub credits: usize,
    /// Faculty teaching the theory lectures (and the lab, unless overridden).
    pub faculty: FacultyId,
    /// Whether the subject carries a weekly lab block.
    pub has_lab: bool,
}

impl Subject {
    /// Creates a subject. The full name defaults to the code.
    pub fn new(
        id: SubjectId,
        code: impl Into<String>,
        credits: usize,
        faculty: FacultyId,
        has_lab: bool,
    ) -> Self {
        let code = code.into();
        Self {
            id,
            name: code.clone(),
            code,
            credits,
            faculty,
            has_lab,
        }
    }

    /// Sets the full display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Theory units per week (one slot each).
    #[inline]
    pub fn theory_slots(&self) -> usize {
        self.credits
    }

    /// Lab blocks per week (0 or 1).
    #[inline]
    pub fn lab_sessions(&self) -> usize {
        usize::from(self.has_lab)
    }

    /// Grid slots consumed by labs per week (0 or 2).
    #[inline]
    pub fn lab_slots(&self) -> usize {
        2 * self.lab_sessions()
    }

    /// Total grid slots this subject demands per week.
    pub fn total_slots(&self) -> usize {
        self.theory_slots() + self.lab_slots()
    }
}
