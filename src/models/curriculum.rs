//! Curriculum: the scheduling problem input.
//!
//! A registry of batches, faculties, and subjects plus the enrollment
//! relation (which batch takes which subject) and optional lab-faculty
//! overrides. Ids are dense integers handed out in insertion order, so a
//! curriculum built the same way always yields the same entity ordering —
//! the scheduler's determinism under a fixed seed depends on this.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Batch, BatchId, Faculty, FacultyId, Subject, SubjectId};

/// The full input to timetable generation.
///
/// # Example
///
/// ```
/// use u_timetable::models::Curriculum;
///
/// let mut cur = Curriculum::new();
/// let preya = cur.add_faculty("Dr. Preya");
/// let david = cur.add_faculty("David");
/// let os = cur.add_subject("OS", 3, preya, true);
/// let isea = cur.add_batch("ISEA");
/// cur.enroll(isea, os);
/// cur.set_lab_faculty(os, david); // Lab taught by someone else
///
/// assert_eq!(cur.required_slots(isea), 5); // 3 theory + 2 lab
/// assert_eq!(cur.lab_faculty_for(os), david);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Curriculum {
    pub(crate) batches: Vec<Batch>,
    pub(crate) faculties: Vec<Faculty>,
    pub(crate) subjects: Vec<Subject>,
    pub(crate) enrollment: Vec<(BatchId, SubjectId)>,
    pub(crate) lab_faculty: HashMap<SubjectId, FacultyId>,
}

impl Curriculum {
    /// Creates an empty curriculum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a faculty member, or returns the existing id if the name
    /// is already registered.
    pub fn add_faculty(&mut self, name: impl Into<String>) -> FacultyId {
        let name = name.into();
        if let Some(f) = self.faculties.iter().find(|f| f.name == name) {
            return f.id;
        }
        let id = FacultyId(self.faculties.len() as u32);
        self.faculties.push(Faculty::new(id, name));
        id
    }

    /// Registers a batch, or returns the existing id if the name is already
    /// registered.
    pub fn add_batch(&mut self, name: impl Into<String>) -> BatchId {
        let name = name.into();
        if let Some(b) = self.batches.iter().find(|b| b.name == name) {
            return b.id;
        }
        let id = BatchId(self.batches.len() as u32);
        self.batches.push(Batch::new(id, name));
        id
    }

    /// Registers a subject taught by `faculty`.
    pub fn add_subject(
        &mut self,
        code: impl Into<String>,
        credits: usize,
        faculty: FacultyId,
        has_lab: bool,
    ) -> SubjectId {
        let id = SubjectId(self.subjects.len() as u32);
        self.subjects
            .push(Subject::new(id, code, credits, faculty, has_lab));
        id
    }

    /// Enrolls a batch in a subject.
    pub fn enroll(&mut self, batch: BatchId, subject: SubjectId) {
        self.enrollment.push((batch, subject));
    }

    /// Overrides the faculty for a subject's lab block. Theory lectures
    /// keep the subject's primary faculty.
    pub fn set_lab_faculty(&mut self, subject: SubjectId, faculty: FacultyId) {
        self.lab_faculty.insert(subject, faculty);
    }

    /// Registered batches in id order.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Registered faculties in id order.
    pub fn faculties(&self) -> &[Faculty] {
        &self.faculties
    }

    /// Registered subjects in id order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// The (batch, subject) enrollment pairs in insertion order.
    pub fn enrollment(&self) -> &[(BatchId, SubjectId)] {
        &self.enrollment
    }

    /// Subjects a batch is enrolled in, in enrollment order.
    pub fn subjects_for(&self, batch: BatchId) -> Vec<&Subject> {
        self.enrollment
            .iter()
            .filter(|(b, _)| *b == batch)
            .map(|(_, s)| &self.subjects[s.index()])
            .collect()
    }

    /// The explicit lab override for a subject, if any.
    pub fn lab_override(&self, subject: SubjectId) -> Option<FacultyId> {
        self.lab_faculty.get(&subject).copied()
    }

    /// Faculty teaching a subject's lab: the override if present, else the
    /// subject's primary faculty.
    pub fn lab_faculty_for(&self, subject: SubjectId) -> FacultyId {
        self.lab_override(subject)
            .unwrap_or(self.subjects[subject.index()].faculty)
    }

    /// Total grid slots a batch must fill per week:
    /// `Σ theory_slots + 2 × Σ lab_sessions` across its subjects.
    pub fn required_slots(&self, batch: BatchId) -> usize {
        self.subjects_for(batch)
            .iter()
            .map(|s| s.total_slots())
            .sum()
    }
}
