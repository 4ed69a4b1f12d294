//! Pre-flight curriculum integrity checks.
//!
//! Catches structural problems before scheduling starts. The registry API
//! on [`Curriculum`] makes most of these hard to produce by hand, but a
//! curriculum deserialized from JSON (or built with fabricated ids) has no
//! such guarantee. Detects:
//! - Duplicate subject codes and duplicate enrollments
//! - Batches with no subjects
//! - Zero-credit subjects
//! - Dangling batch / subject / faculty references
//! - Lab overrides on subjects without a lab
//!
//! [`Curriculum`]: crate::models::Curriculum

use std::collections::HashSet;

use crate::models::{BatchId, Curriculum};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two subjects share the same code.
    DuplicateSubjectCode,
    /// A batch is enrolled in the same subject twice.
    DuplicateEnrollment,
    /// A batch has no enrolled subjects.
    EmptyBatch,
    /// A subject demands no theory slots.
    ZeroCreditSubject,
    /// An entity references an id that doesn't exist.
    InvalidReference,
    /// A lab faculty override targets a subject without a lab.
    LabOverrideWithoutLab,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a curriculum before scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_curriculum(curriculum: &Curriculum) -> ValidationResult {
    let mut errors = Vec::new();

    let num_batches = curriculum.batches().len();
    let num_faculties = curriculum.faculties().len();
    let num_subjects = curriculum.subjects().len();

    // Subject-level checks
    let mut codes = HashSet::new();
    for subject in curriculum.subjects() {
        if !codes.insert(subject.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSubjectCode,
                format!("Duplicate subject code: {}", subject.code),
            ));
        }
        if subject.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCreditSubject,
                format!("Subject '{}' has zero credits", subject.code),
            ));
        }
        if subject.faculty.index() >= num_faculties {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!(
                    "Subject '{}' references unknown faculty {}",
                    subject.code, subject.faculty
                ),
            ));
        }
    }

    // Enrollment checks
    let mut seen = HashSet::new();
    for &(batch, subject) in curriculum.enrollment() {
        if batch.index() >= num_batches {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!("Enrollment references unknown batch {batch}"),
            ));
            continue;
        }
        if subject.index() >= num_subjects {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!("Enrollment references unknown subject {subject}"),
            ));
            continue;
        }
        if !seen.insert((batch, subject)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEnrollment,
                format!(
                    "Batch '{}' is enrolled in '{}' twice",
                    curriculum.batches()[batch.index()].name,
                    curriculum.subjects()[subject.index()].code,
                ),
            ));
        }
    }

    // Uses the raw enrollment relation: `subjects_for` indexes by subject
    // id and must not be fed the dangling ids flagged above.
    let enrolled: HashSet<BatchId> = curriculum.enrollment().iter().map(|&(b, _)| b).collect();
    for batch in curriculum.batches() {
        if !enrolled.contains(&batch.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyBatch,
                format!("Batch '{}' has no enrolled subjects", batch.name),
            ));
        }
    }

    // Lab override checks
    for subject in curriculum.subjects() {
        let Some(faculty) = curriculum.lab_override(subject.id) else {
            continue;
        };
        if faculty.index() >= num_faculties {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!(
                    "Lab override for '{}' references unknown faculty {faculty}",
                    subject.code
                ),
            ));
        }
        if !subject.has_lab {
            errors.push(ValidationError::new(
                ValidationErrorKind::LabOverrideWithoutLab,
                format!("Subject '{}' has a lab override but no lab", subject.code),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FacultyId, SubjectId};

    fn sample_curriculum() -> Curriculum {
        let mut cur = Curriculum::new();
        let preya = cur.add_faculty("Dr. Preya");
        let raghu = cur.add_faculty("Raghu");
        let os = cur.add_subject("OS", 3, preya, true);
        let math = cur.add_subject("MATH", 4, raghu, false);
        let isea = cur.add_batch("ISEA");
        cur.enroll(isea, os);
        cur.enroll(isea, math);
        cur
    }

    #[test]
    fn test_valid_curriculum() {
        assert!(validate_curriculum(&sample_curriculum()).is_ok());
    }

    #[test]
    fn test_duplicate_subject_code() {
        let mut cur = sample_curriculum();
        let f = cur.add_faculty("Other");
        let dup = cur.add_subject("OS", 2, f, false);
        cur.enroll(BatchId(0), dup);

        let errors = validate_curriculum(&cur).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSubjectCode));
    }

    #[test]
    fn test_duplicate_enrollment() {
        let mut cur = sample_curriculum();
        cur.enroll(BatchId(0), SubjectId(0));

        let errors = validate_curriculum(&cur).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateEnrollment));
    }

    #[test]
    fn test_empty_batch() {
        let mut cur = sample_curriculum();
        cur.add_batch("ISEB"); // No enrollments

        let errors = validate_curriculum(&cur).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyBatch
                && e.message.contains("ISEB")));
    }

    #[test]
    fn test_zero_credit_subject() {
        let mut cur = sample_curriculum();
        let s = cur.add_subject("GHOST", 0, FacultyId(0), false);
        cur.enroll(BatchId(0), s);

        let errors = validate_curriculum(&cur).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroCreditSubject));
    }

    #[test]
    fn test_dangling_references() {
        let mut cur = sample_curriculum();
        cur.enroll(BatchId(99), SubjectId(0));
        cur.enroll(BatchId(0), SubjectId(99));
        cur.add_subject("X", 1, FacultyId(99), false);

        let errors = validate_curriculum(&cur).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidReference)
            .count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_lab_override_without_lab() {
        let mut cur = sample_curriculum();
        // MATH (SubjectId(1)) has no lab
        cur.set_lab_faculty(SubjectId(1), FacultyId(0));

        let errors = validate_curriculum(&cur).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::LabOverrideWithoutLab));
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let mut cur = sample_curriculum();
        cur.add_batch("ISEB");
        cur.enroll(BatchId(0), SubjectId(0));

        let errors = validate_curriculum(&cur).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
