//! Weekly timetable generation for student batches.
//!
//! Assigns theory lectures (one slot) and contiguous two-slot lab blocks
//! to a five-day grid under faculty-availability and batch-availability
//! exclusivity, per-day slot quotas, and lab contiguity. The search is
//! randomized restart: each attempt allocates per-day quotas, shuffles the
//! work units (labs first), and places them greedily; any dead end
//! discards the attempt wholesale and retries with fresh randomness.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Batch`, `Faculty`, `Subject`, `Unit`,
//!   `Session`, `Occupancy`, `Curriculum`
//! - **`scheduler`**: The search core — quota allocator, placement engine,
//!   retry driver, configuration
//! - **`validation`**: Curriculum integrity checks (dangling ids, duplicate
//!   enrollments, empty batches)
//! - **`render`**: Text rendering of generated grids
//!
//! # Example
//!
//! ```
//! use u_timetable::models::Curriculum;
//! use u_timetable::scheduler::{Scheduler, SchedulerConfig};
//! use u_timetable::{render, validation};
//!
//! let mut cur = Curriculum::new();
//! let preya = cur.add_faculty("Dr. Preya");
//! let raghu = cur.add_faculty("Raghu");
//! let os = cur.add_subject("OS", 11, preya, true); // 11 theory + 2 lab slots
//! let math = cur.add_subject("MATH", 12, raghu, false);
//! let isea = cur.add_batch("ISEA");
//! cur.enroll(isea, os);
//! cur.enroll(isea, math);
//! validation::validate_curriculum(&cur).unwrap();
//!
//! let mut scheduler =
//!     Scheduler::new(cur).with_config(SchedulerConfig::default().with_seed(42));
//! scheduler.generate().unwrap();
//! println!("{}", render::batch_grid(&scheduler, isea));
//! ```

pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;
