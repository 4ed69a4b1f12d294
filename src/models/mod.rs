//! Timetabling domain models.
//!
//! Passive holders of identity and occupancy — no scheduling logic lives
//! here. The placement engine owns all conflict detection; these types only
//! record what it decides (and refuse, loudly, to record a contradiction).
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School |
//! |-------------|------------|--------|
//! | Batch | Section/Cohort | Class |
//! | Subject | Course | Subject |
//! | Faculty | Professor | Teacher |
//! | Unit | Lecture/Lab hour | Period |

mod batch;
mod curriculum;
mod faculty;
mod ids;
mod occupancy;
mod session;
mod subject;

pub use batch::Batch;
pub use curriculum::Curriculum;
pub use faculty::Faculty;
pub use ids::{BatchId, FacultyId, SubjectId};
pub use occupancy::Occupancy;
pub use session::{Session, SessionKind, Unit};
pub use subject::Subject;
