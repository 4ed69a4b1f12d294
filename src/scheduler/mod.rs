//! Randomized-restart timetable generation.
//!
//! # Algorithm
//!
//! Each attempt runs the same fully sequential pipeline:
//!
//! 1. Clear every batch's and faculty's occupancy map.
//! 2. Ask the allocator for each batch's per-day slot quota; an infeasible
//!    batch abandons the attempt on the spot.
//! 3. Build the global unit list: shuffle each batch's units, shuffle the
//!    concatenation, then stable-sort labs ahead of theory — two-slot
//!    blocks are the hardest to fit, so they go first.
//! 4. Place units one by one with the greedy first-fit engine.
//! 5. Accept only if every unit placed and every quota is spent to zero.
//!
//! A failed unit discards the whole attempt; there is no backtracking and
//! no partial undo. The driver leans on fresh randomness per attempt and a
//! fixed attempt budget (default 5000) instead.
//!
//! # Reference
//! Gomes et al. (1998), "Boosting Combinatorial Search Through Randomization"

mod config;
mod placement;
mod quota;

pub use config::{
    SchedulerConfig, DEFAULT_MAX_ATTEMPTS, MAX_SLOTS_PER_DAY, MIN_SLOTS_PER_DAY,
};
pub use quota::{distribute_slots, QuotaError};

use std::error::Error;
use std::fmt;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{
    Batch, BatchId, Curriculum, Faculty, FacultyId, SessionKind, Subject, SubjectId, Unit,
};
use placement::PlacementEngine;

/// Terminal failure of timetable generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No valid schedule was found within the attempt budget. Occupancy
    /// maps are cleared; there is no partial result to inspect.
    AttemptsExhausted {
        /// Number of attempts consumed.
        attempts: u32,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::AttemptsExhausted { attempts } => {
                write!(f, "failed to generate timetable after {attempts} attempts")
            }
        }
    }
}

impl Error for ScheduleError {}

/// Why one attempt was discarded. Internal; surfaced only through `trace!`.
enum AttemptFailure {
    Quota(QuotaError),
    Unplaced {
        batch: BatchId,
        subject: SubjectId,
        kind: SessionKind,
    },
    QuotaResidue {
        batch: BatchId,
        day: usize,
    },
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::Quota(e) => write!(f, "quota allocation failed: {e}"),
            AttemptFailure::Unplaced {
                batch,
                subject,
                kind,
            } => write!(f, "no eligible cell for {kind:?} unit of {subject} ({batch})"),
            AttemptFailure::QuotaResidue { batch, day } => {
                write!(f, "batch {batch} left quota unfilled on day {day}")
            }
        }
    }
}

/// Weekly timetable generator.
///
/// Owns the curriculum (whose batches and faculties carry the occupancy
/// maps) and fills those maps in place on a successful [`generate`].
///
/// # Example
///
/// ```
/// use u_timetable::models::Curriculum;
/// use u_timetable::scheduler::{Scheduler, SchedulerConfig};
///
/// let mut cur = Curriculum::new();
/// let preya = cur.add_faculty("Dr. Preya");
/// let raghu = cur.add_faculty("Raghu");
/// // 25 slots: exactly the weekly minimum of 5 days x 5 slots.
/// let os = cur.add_subject("OS", 11, preya, true);
/// let math = cur.add_subject("MATH", 12, raghu, false);
/// let isea = cur.add_batch("ISEA");
/// cur.enroll(isea, os);
/// cur.enroll(isea, math);
///
/// let mut scheduler =
///     Scheduler::new(cur).with_config(SchedulerConfig::default().with_seed(42));
/// scheduler.generate().unwrap();
/// assert_eq!(scheduler.batch(isea).occupancy.len(), 25);
/// ```
///
/// [`generate`]: Self::generate
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SchedulerConfig,
    curriculum: Curriculum,
    /// Accepted per-batch, per-day quotas. Empty until a successful run.
    quotas: Vec<Vec<usize>>,
}

impl Scheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new(curriculum: Curriculum) -> Self {
        Self {
            config: SchedulerConfig::default(),
            curriculum,
            quotas: Vec::new(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs randomized-restart search until a valid schedule is found or
    /// the attempt budget is exhausted.
    ///
    /// On `Ok(())` every batch and faculty occupancy map holds the final
    /// schedule and [`day_quotas`] reports the accepted distribution. On
    /// `Err` all occupancy maps are cleared — no partial timetable survives.
    ///
    /// [`day_quotas`]: Self::day_quotas
    pub fn generate(&mut self) -> Result<(), ScheduleError> {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        for attempt in 1..=self.config.max_attempts {
            match self.run_attempt(&mut rng) {
                Ok(quotas) => {
                    self.quotas = quotas;
                    debug!("timetable generated on attempt {attempt}");
                    return Ok(());
                }
                Err(reason) => trace!("attempt {attempt} discarded: {reason}"),
            }
        }

        self.clear_state();
        Err(ScheduleError::AttemptsExhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// One full allocation + placement pass.
    fn run_attempt<R: Rng>(&mut self, rng: &mut R) -> Result<Vec<Vec<usize>>, AttemptFailure> {
        self.clear_state();

        let num_days = self.config.num_days();
        let mut quotas = Vec::with_capacity(self.curriculum.batches.len());
        for batch in &self.curriculum.batches {
            let total = self.curriculum.required_slots(batch.id);
            let quota = quota::distribute_slots(
                total,
                num_days,
                self.config.min_slots_per_day,
                self.config.max_slots_per_day,
            )
            .map_err(AttemptFailure::Quota)?;
            quotas.push(quota);
        }
        let mut remaining = quotas.clone();

        let units = self.build_units(rng);

        let engine = PlacementEngine {
            subjects: &self.curriculum.subjects,
            lab_faculty: &self.curriculum.lab_faculty,
            day_slots: &self.config.day_slots,
        };
        let batches = &mut self.curriculum.batches;
        let faculties = &mut self.curriculum.faculties;

        for unit in &units {
            let batch = &mut batches[unit.batch.index()];
            let placed = engine.place_unit(
                unit,
                batch,
                faculties.as_mut_slice(),
                &mut remaining[unit.batch.index()],
                rng,
            );
            if !placed {
                return Err(AttemptFailure::Unplaced {
                    batch: unit.batch,
                    subject: unit.subject,
                    kind: unit.kind,
                });
            }
        }

        // Quota totals equal unit totals, so this only trips on an engine
        // bug; checked anyway rather than assumed.
        for (i, rem) in remaining.iter().enumerate() {
            if let Some(day) = rem.iter().position(|&r| r != 0) {
                return Err(AttemptFailure::QuotaResidue {
                    batch: BatchId(i as u32),
                    day,
                });
            }
        }

        Ok(quotas)
    }

    /// Builds the attempt's unit list: per-batch shuffle, global shuffle,
    /// then a stable labs-first sort.
    fn build_units<R: Rng>(&self, rng: &mut R) -> Vec<Unit> {
        let mut units = Vec::new();
        for batch in &self.curriculum.batches {
            let mut batch_units = Vec::new();
            for subject in self.curriculum.subjects_for(batch.id) {
                for _ in 0..subject.theory_slots() {
                    batch_units.push(Unit::new(batch.id, subject.id, SessionKind::Theory));
                }
                for _ in 0..subject.lab_sessions() {
                    batch_units.push(Unit::new(batch.id, subject.id, SessionKind::Lab));
                }
            }
            batch_units.shuffle(rng);
            units.extend(batch_units);
        }
        units.shuffle(rng);
        units.sort_by_key(|u| match u.kind {
            SessionKind::Lab => 0,
            SessionKind::Theory => 1,
        });
        units
    }

    fn clear_state(&mut self) {
        for batch in &mut self.curriculum.batches {
            batch.occupancy.clear();
        }
        for faculty in &mut self.curriculum.faculties {
            faculty.occupancy.clear();
        }
        self.quotas.clear();
    }

    /// The configuration in use.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// The curriculum being scheduled.
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    /// All batches (with occupancy) in id order.
    pub fn batches(&self) -> &[Batch] {
        &self.curriculum.batches
    }

    /// All faculties (with occupancy) in id order.
    pub fn faculties(&self) -> &[Faculty] {
        &self.curriculum.faculties
    }

    /// All subjects in id order.
    pub fn subjects(&self) -> &[Subject] {
        &self.curriculum.subjects
    }

    /// One batch by id.
    pub fn batch(&self, id: BatchId) -> &Batch {
        &self.curriculum.batches[id.index()]
    }

    /// One faculty by id.
    pub fn faculty(&self, id: FacultyId) -> &Faculty {
        &self.curriculum.faculties[id.index()]
    }

    /// The accepted per-day quota for a batch, or `None` before a
    /// successful [`generate`](Self::generate).
    pub fn day_quotas(&self, batch: BatchId) -> Option<&[usize]> {
        self.quotas.get(batch.index()).map(Vec::as_slice)
    }
}
