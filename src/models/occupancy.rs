//! Per-entity occupancy map.
//!
//! Both batches and faculties track which (day, slot) cells they hold and
//! what session sits in each. These are plain map operations — conflict
//! detection belongs to the placement engine. A double-assign to the same
//! cell therefore indicates an engine bug and panics instead of silently
//! overwriting.

use std::collections::HashMap;

use super::Session;

/// Occupancy map keyed by `(day, slot)`, both zero-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: HashMap<(usize, usize), Session>,
}

impl Occupancy {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cell is unassigned.
    #[inline]
    pub fn is_free(&self, day: usize, slot: usize) -> bool {
        !self.cells.contains_key(&(day, slot))
    }

    /// Records a session in a cell.
    ///
    /// # Panics
    /// If the cell is already assigned. The placement engine checks
    /// freeness before every assign; hitting this is a programmer error.
    pub fn assign(&mut self, day: usize, slot: usize, session: Session) {
        let prev = self.cells.insert((day, slot), session);
        assert!(
            prev.is_none(),
            "occupancy cell (day {day}, slot {slot}) assigned twice"
        );
    }

    /// Returns the session in a cell, if any.
    pub fn get(&self, day: usize, slot: usize) -> Option<&Session> {
        self.cells.get(&(day, slot))
    }

    /// Removes every assignment. Called at the start of each attempt.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of assigned cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is assigned.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over `((day, slot), session)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &Session)> {
        self.cells.iter()
    }

    /// Number of assigned cells on one day.
    pub fn filled_on(&self, day: usize) -> usize {
        self.cells.keys().filter(|(d, _)| *d == day).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchId, SessionKind, SubjectId};

    fn sample_session() -> Session {
        Session {
            batch: BatchId(0),
            subject: SubjectId(0),
            kind: SessionKind::Theory,
        }
    }

    #[test]
    fn test_assign_and_query() {
        let mut occ = Occupancy::new();
        assert!(occ.is_free(0, 0));

        occ.assign(0, 0, sample_session());
        assert!(!occ.is_free(0, 0));
        assert!(occ.is_free(0, 1));
        assert_eq!(occ.get(0, 0), Some(&sample_session()));
        assert_eq!(occ.len(), 1);
    }

    #[test]
    #[should_panic(expected = "assigned twice")]
    fn test_double_assign_panics() {
        let mut occ = Occupancy::new();
        occ.assign(2, 3, sample_session());
        occ.assign(2, 3, sample_session());
    }

    #[test]
    fn test_clear() {
        let mut occ = Occupancy::new();
        occ.assign(1, 1, sample_session());
        occ.clear();
        assert!(occ.is_empty());
        assert!(occ.is_free(1, 1));
    }

    #[test]
    fn test_filled_on() {
        let mut occ = Occupancy::new();
        occ.assign(0, 0, sample_session());
        occ.assign(0, 3, sample_session());
        occ.assign(2, 0, sample_session());
        assert_eq!(occ.filled_on(0), 2);
        assert_eq!(occ.filled_on(1), 0);
        assert_eq!(occ.filled_on(2), 1);
    }
}
