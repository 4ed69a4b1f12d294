//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Attempt budget used when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5000;
/// Fewest slots a batch may fill on any day.
pub const MIN_SLOTS_PER_DAY: usize = 5;
/// Most slots a batch may fill on any day.
pub const MAX_SLOTS_PER_DAY: usize = 7;

/// Configuration for [`Scheduler`](super::Scheduler).
///
/// # Example
///
/// ```
/// use u_timetable::scheduler::SchedulerConfig;
///
/// let config = SchedulerConfig::default()
///     .with_max_attempts(1000)
///     .with_seed(42);
/// assert_eq!(config.num_days(), 5);
/// assert_eq!(config.min_total(), 25);
/// assert_eq!(config.max_total(), 35);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Day display names; length defines the week.
    pub days: Vec<String>,
    /// Grid slots available on each day (parallel to `days`).
    pub day_slots: Vec<usize>,
    /// Minimum slots a batch fills per day.
    pub min_slots_per_day: usize,
    /// Maximum slots a batch fills per day.
    pub max_slots_per_day: usize,
    /// Whole-attempt retry budget.
    pub max_attempts: u32,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        let days: Vec<String> = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
            .iter()
            .map(|d| d.to_string())
            .collect();
        let day_slots = vec![MAX_SLOTS_PER_DAY; days.len()];
        Self {
            days,
            day_slots,
            min_slots_per_day: MIN_SLOTS_PER_DAY,
            max_slots_per_day: MAX_SLOTS_PER_DAY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl SchedulerConfig {
    /// Sets the day names. Per-day slot counts are reset to
    /// `max_slots_per_day` for every day; follow with [`with_day_slots`]
    /// for uneven days.
    ///
    /// [`with_day_slots`]: Self::with_day_slots
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self.day_slots = vec![self.max_slots_per_day; self.days.len()];
        self
    }

    /// Sets the grid slot count for each day (parallel to `days`).
    pub fn with_day_slots(mut self, day_slots: Vec<usize>) -> Self {
        self.day_slots = day_slots;
        self
    }

    /// Sets the per-day quota bounds.
    pub fn with_slot_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_slots_per_day = min;
        self.max_slots_per_day = max;
        self
    }

    /// Sets the attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets a fixed RNG seed for reproducible schedules.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of days in the week.
    #[inline]
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    /// Smallest total a batch's weekly slot demand may be.
    pub fn min_total(&self) -> usize {
        self.min_slots_per_day * self.num_days()
    }

    /// Largest total a batch's weekly slot demand may be.
    pub fn max_total(&self) -> usize {
        self.max_slots_per_day * self.num_days()
    }
}
