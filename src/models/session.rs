//! Session and unit models.
//!
//! A [`Session`] is the payload recorded in an occupancy cell: a tagged
//! (batch, subject, kind) value rather than a formatted label — text such
//! as `"OS Lab"` is produced by the `render` module, never stored.
//!
//! A [`Unit`] is one indivisible piece of required teaching time awaiting
//! placement. Units are ephemeral: the scheduler rebuilds the full unit
//! list from the curriculum on every attempt and consumes each unit once.

use serde::{Deserialize, Serialize};

use super::{BatchId, SubjectId};

/// Kind of a scheduled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// A single-slot theory lecture.
    Theory,
    /// A two-slot contiguous lab block.
    Lab,
}

impl SessionKind {
    /// Number of consecutive grid slots one unit of this kind consumes.
    #[inline]
    pub fn span(self) -> usize {
        match self {
            SessionKind::Theory => 1,
            SessionKind::Lab => 2,
        }
    }
}

/// The value held in one occupancy cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Batch attending the session.
    pub batch: BatchId,
    /// Subject being taught.
    pub subject: SubjectId,
    /// Theory or lab.
    pub kind: SessionKind,
}

/// A single schedulable work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Batch the unit belongs to.
    pub batch: BatchId,
    /// Subject the unit teaches.
    pub subject: SubjectId,
    /// Theory (one cell) or lab (two contiguous cells).
    pub kind: SessionKind,
}

impl Unit {
    /// Creates a unit.
    pub fn new(batch: BatchId, subject: SubjectId, kind: SessionKind) -> Self {
        Self {
            batch,
            subject,
            kind,
        }
    }

    /// Number of grid slots this unit consumes.
    #[inline]
    pub fn span(&self) -> usize {
        self.kind.span()
    }

    /// The session recorded in each cell this unit occupies.
    pub fn session(&self) -> Session {
        Session {
            batch: self.batch,
            subject: self.subject,
            kind: self.kind,
        }
    }
}
