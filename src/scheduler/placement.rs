//! Greedy first-fit placement engine.
//!
//! Places one unit at a time into the weekly grid, mutating the batch's
//! and the teaching faculty's occupancy. All conflict detection lives
//! here; the entities themselves only record the outcome.
//!
//! # Algorithm
//!
//! Candidate days are those where the batch's remaining quota can still
//! absorb the unit's span, visited in randomized order. Within a day,
//! slots are scanned in ascending position; the first cell (theory) or
//! contiguous cell pair (lab) free for both the batch and the faculty
//! wins. A unit that fits nowhere is reported unplaced — the retry driver
//! decides what that means for the attempt.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Batch, Faculty, FacultyId, SessionKind, Subject, SubjectId, Unit};

/// Stateless placement logic borrowed by the retry driver for one attempt.
pub(crate) struct PlacementEngine<'a> {
    /// All subjects, indexed by `SubjectId`.
    pub subjects: &'a [Subject],
    /// Lab faculty overrides (subject → alternate faculty).
    pub lab_faculty: &'a HashMap<SubjectId, FacultyId>,
    /// Grid slots available on each day.
    pub day_slots: &'a [usize],
}

impl PlacementEngine<'_> {
    /// Faculty who teaches this unit: the subject's primary faculty for
    /// theory, the lab override (if any) for labs.
    pub fn teaching_faculty(&self, unit: &Unit) -> FacultyId {
        let subject = &self.subjects[unit.subject.index()];
        match unit.kind {
            SessionKind::Theory => subject.faculty,
            SessionKind::Lab => self
                .lab_faculty
                .get(&unit.subject)
                .copied()
                .unwrap_or(subject.faculty),
        }
    }

    /// Tries to place `unit`, assigning occupancy and decrementing the
    /// batch's remaining per-day quota on success.
    ///
    /// Returns `false` if no eligible (day, slot) exists.
    pub fn place_unit<R: Rng>(
        &self,
        unit: &Unit,
        batch: &mut Batch,
        faculties: &mut [Faculty],
        remaining: &mut [usize],
        rng: &mut R,
    ) -> bool {
        let span = unit.span();
        let faculty = &mut faculties[self.teaching_faculty(unit).index()];

        // A lab must not drive a day's quota negative, so the span is the
        // eligibility threshold, not just "quota left".
        let mut days: Vec<usize> = (0..self.day_slots.len())
            .filter(|&d| remaining[d] >= span)
            .collect();
        days.shuffle(rng);

        for day in days {
            let slots_in_day = self.day_slots[day];
            if slots_in_day < span {
                continue;
            }
            for slot in 0..=(slots_in_day - span) {
                let cells_free = (slot..slot + span).all(|s| {
                    batch.occupancy.is_free(day, s) && faculty.occupancy.is_free(day, s)
                });
                if !cells_free {
                    continue;
                }

                let session = unit.session();
                for s in slot..slot + span {
                    batch.occupancy.assign(day, s, session);
                    faculty.occupancy.assign(day, s, session);
                }
                remaining[day] -= span;
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchId, Session};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn setup() -> (Vec<Subject>, Vec<Faculty>, Batch, HashMap<SubjectId, FacultyId>) {
        let faculties = vec![
            Faculty::new(FacultyId(0), "Dr. Preya"),
            Faculty::new(FacultyId(1), "David"),
        ];
        let subjects = vec![Subject::new(SubjectId(0), "OS", 3, FacultyId(0), true)];
        let batch = Batch::new(BatchId(0), "ISEA");
        (subjects, faculties, batch, HashMap::new())
    }

    fn theory_unit() -> Unit {
        Unit::new(BatchId(0), SubjectId(0), SessionKind::Theory)
    }

    fn lab_unit() -> Unit {
        Unit::new(BatchId(0), SubjectId(0), SessionKind::Lab)
    }

    #[test]
    fn test_theory_placement_consumes_one_cell() {
        let (subjects, mut faculties, mut batch, overrides) = setup();
        let day_slots = vec![7; 5];
        let engine = PlacementEngine {
            subjects: &subjects,
            lab_faculty: &overrides,
            day_slots: &day_slots,
        };
        let mut remaining = vec![5; 5];
        let mut rng = SmallRng::seed_from_u64(1);

        let placed = engine.place_unit(&theory_unit(), &mut batch, &mut faculties, &mut remaining, &mut rng);
        assert!(placed);
        assert_eq!(batch.occupancy.len(), 1);
        assert_eq!(faculties[0].occupancy.len(), 1);
        assert_eq!(remaining.iter().sum::<usize>(), 24);
    }

    #[test]
    fn test_lab_placement_is_contiguous() {
        let (subjects, mut faculties, mut batch, overrides) = setup();
        let day_slots = vec![7; 5];
        let engine = PlacementEngine {
            subjects: &subjects,
            lab_faculty: &overrides,
            day_slots: &day_slots,
        };
        let mut remaining = vec![5; 5];
        let mut rng = SmallRng::seed_from_u64(1);

        assert!(engine.place_unit(&lab_unit(), &mut batch, &mut faculties, &mut remaining, &mut rng));
        assert_eq!(batch.occupancy.len(), 2);

        let cells: Vec<(usize, usize)> = batch.occupancy.iter().map(|(c, _)| *c).collect();
        let (d0, s0) = cells[0];
        let (d1, s1) = cells[1];
        assert_eq!(d0, d1);
        assert_eq!(s0.abs_diff(s1), 1);
        assert_eq!(remaining.iter().sum::<usize>(), 23);
    }

    #[test]
    fn test_lab_uses_override_faculty() {
        let (subjects, mut faculties, mut batch, mut overrides) = setup();
        overrides.insert(SubjectId(0), FacultyId(1));
        let day_slots = vec![7; 5];
        let engine = PlacementEngine {
            subjects: &subjects,
            lab_faculty: &overrides,
            day_slots: &day_slots,
        };
        assert_eq!(engine.teaching_faculty(&lab_unit()), FacultyId(1));
        // Theory still goes to the primary faculty
        assert_eq!(engine.teaching_faculty(&theory_unit()), FacultyId(0));

        let mut remaining = vec![5; 5];
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(engine.place_unit(&lab_unit(), &mut batch, &mut faculties, &mut remaining, &mut rng));
        assert_eq!(faculties[1].occupancy.len(), 2);
        assert!(faculties[0].occupancy.is_empty());
    }

    #[test]
    fn test_faculty_conflict_skips_cell() {
        let (subjects, mut faculties, mut batch, overrides) = setup();
        // One day, two slots; faculty already teaches elsewhere in slot 0.
        let day_slots = vec![2];
        let other = Session {
            batch: BatchId(1),
            subject: SubjectId(0),
            kind: SessionKind::Theory,
        };
        faculties[0].occupancy.assign(0, 0, other);

        let engine = PlacementEngine {
            subjects: &subjects,
            lab_faculty: &overrides,
            day_slots: &day_slots,
        };
        let mut remaining = vec![2];
        let mut rng = SmallRng::seed_from_u64(1);

        assert!(engine.place_unit(&theory_unit(), &mut batch, &mut faculties, &mut remaining, &mut rng));
        // Slot 0 was taken by the conflict, so the unit landed in slot 1.
        assert!(batch.occupancy.is_free(0, 0));
        assert!(!batch.occupancy.is_free(0, 1));
    }

    #[test]
    fn test_lab_requires_adjacent_pair() {
        let (subjects, mut faculties, mut batch, overrides) = setup();
        // Three slots with the middle one blocked: no contiguous pair left.
        let day_slots = vec![3];
        let blocker = Session {
            batch: BatchId(0),
            subject: SubjectId(0),
            kind: SessionKind::Theory,
        };
        batch.occupancy.assign(0, 1, blocker);

        let engine = PlacementEngine {
            subjects: &subjects,
            lab_faculty: &overrides,
            day_slots: &day_slots,
        };
        let mut remaining = vec![3];
        let mut rng = SmallRng::seed_from_u64(1);

        assert!(!engine.place_unit(&lab_unit(), &mut batch, &mut faculties, &mut remaining, &mut rng));
        assert_eq!(remaining, vec![3]); // Untouched on failure
    }

    #[test]
    fn test_quota_gates_days() {
        let (subjects, mut faculties, mut batch, overrides) = setup();
        let day_slots = vec![7, 7];
        let engine = PlacementEngine {
            subjects: &subjects,
            lab_faculty: &overrides,
            day_slots: &day_slots,
        };
        // Day 0 has quota 1 left: too little for a lab's span of 2.
        let mut remaining = vec![1, 2];
        let mut rng = SmallRng::seed_from_u64(1);

        assert!(engine.place_unit(&lab_unit(), &mut batch, &mut faculties, &mut remaining, &mut rng));
        let (&(day, _), _) = batch.occupancy.iter().next().unwrap();
        assert_eq!(day, 1);
        assert_eq!(remaining, vec![1, 0]);
    }

    #[test]
    fn test_unplaceable_unit_reports_false() {
        let (subjects, mut faculties, mut batch, overrides) = setup();
        let day_slots = vec![1];
        let engine = PlacementEngine {
            subjects: &subjects,
            lab_faculty: &overrides,
            day_slots: &day_slots,
        };
        // No quota anywhere.
        let mut remaining = vec![0];
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(!engine.place_unit(&theory_unit(), &mut batch, &mut faculties, &mut remaining, &mut rng));
    }
}
