//! Text rendering of generated timetables.
//!
//! Occupancy cells hold tagged [`Session`] values; this module is where
//! they become human-readable labels — `"OS"` for a theory lecture,
//! `"OS Lab"` for a lab block — laid out day by day with `Free` markers
//! for unassigned slots.
//!
//! [`Session`]: crate::models::Session

use crate::models::{BatchId, Curriculum, FacultyId, Session, SessionKind};
use crate::scheduler::Scheduler;

/// The display label for a session: the subject code, with a ` Lab`
/// suffix for lab blocks.
pub fn session_label(curriculum: &Curriculum, session: &Session) -> String {
    let subject = &curriculum.subjects()[session.subject.index()];
    match session.kind {
        SessionKind::Theory => subject.code.clone(),
        SessionKind::Lab => format!("{} Lab", subject.code),
    }
}

/// Faculty teaching a session: the subject's primary faculty for theory,
/// the lab faculty (override-aware) for labs.
fn teaching_faculty_name<'a>(curriculum: &'a Curriculum, session: &Session) -> &'a str {
    let faculty = match session.kind {
        SessionKind::Theory => curriculum.subjects()[session.subject.index()].faculty,
        SessionKind::Lab => curriculum.lab_faculty_for(session.subject),
    };
    &curriculum.faculties()[faculty.index()].name
}

/// Renders a batch's weekly grid as text.
///
/// One line per slot, grouped by day:
///
/// ```text
/// Timetable for ISEA:
/// Monday:
///   Slot 1: OS - Dr. Preya
///   Slot 2: Free
///   ...
/// ```
pub fn batch_grid(scheduler: &Scheduler, batch: BatchId) -> String {
    let curriculum = scheduler.curriculum();
    let config = scheduler.config();
    let batch = scheduler.batch(batch);

    let mut out = format!("Timetable for {}:\n", batch.name);
    for (day, day_name) in config.days.iter().enumerate() {
        out.push_str(&format!("{day_name}:\n"));
        for slot in 0..config.day_slots[day] {
            match batch.occupancy.get(day, slot) {
                Some(session) => out.push_str(&format!(
                    "  Slot {}: {} - {}\n",
                    slot + 1,
                    session_label(curriculum, session),
                    teaching_faculty_name(curriculum, session),
                )),
                None => out.push_str(&format!("  Slot {}: Free\n", slot + 1)),
            }
        }
    }
    out
}

/// Renders a faculty member's weekly grid as text, with the batch they
/// teach in each occupied slot.
pub fn faculty_grid(scheduler: &Scheduler, faculty: FacultyId) -> String {
    let curriculum = scheduler.curriculum();
    let config = scheduler.config();
    let faculty = scheduler.faculty(faculty);

    let mut out = format!("Schedule for {}:\n", faculty.name);
    for (day, day_name) in config.days.iter().enumerate() {
        out.push_str(&format!("{day_name}:\n"));
        for slot in 0..config.day_slots[day] {
            match faculty.occupancy.get(day, slot) {
                Some(session) => out.push_str(&format!(
                    "  Slot {}: {} ({})\n",
                    slot + 1,
                    session_label(curriculum, session),
                    scheduler.batch(session.batch).name,
                )),
                None => out.push_str(&format!("  Slot {}: Free\n", slot + 1)),
            }
        }
    }
    out
}
