//! Slot-distribution allocator.
//!
//! Turns a batch's total weekly slot demand into a per-day quota, with
//! every day receiving between `min_per_day` and `max_per_day` slots.
//!
//! # Algorithm
//!
//! Start every day at `min_per_day`, then sweep the days in fixed order,
//! topping each up with the remaining surplus capped at `max_per_day`.
//! The fixed sweep order biases where surplus lands — the retry driver's
//! randomized unit ordering, not the allocator, supplies schedule variety.

use std::error::Error;
use std::fmt;

/// Failure to distribute a total across the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotaError {
    /// The total cannot fit between `min_per_day × days` and
    /// `max_per_day × days`.
    Infeasible {
        /// Requested weekly total.
        total: usize,
        /// Smallest distributable total.
        min_total: usize,
        /// Largest distributable total.
        max_total: usize,
    },
}

impl fmt::Display for QuotaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuotaError::Infeasible {
                total,
                min_total,
                max_total,
            } => write!(
                f,
                "total of {total} slots cannot be distributed: \
                 feasible range is {min_total}..={max_total}"
            ),
        }
    }
}

impl Error for QuotaError {}

/// Distributes `total` slots across `days` days, each receiving between
/// `min_per_day` and `max_per_day`.
///
/// Returns the per-day quota, or [`QuotaError::Infeasible`] when the total
/// is outside `[min_per_day × days, max_per_day × days]`.
pub fn distribute_slots(
    total: usize,
    days: usize,
    min_per_day: usize,
    max_per_day: usize,
) -> Result<Vec<usize>, QuotaError> {
    let min_total = min_per_day * days;
    let max_total = max_per_day * days;
    if total < min_total || total > max_total {
        return Err(QuotaError::Infeasible {
            total,
            min_total,
            max_total,
        });
    }

    let mut quota = vec![min_per_day; days];
    let mut surplus = total - min_total;
    for q in quota.iter_mut() {
        if surplus == 0 {
            break;
        }
        let add = surplus.min(max_per_day - *q);
        *q += add;
        surplus -= add;
    }

    // Unreachable given the bound check above, but a leftover surplus must
    // never be dropped silently.
    if surplus > 0 {
        return Err(QuotaError::Infeasible {
            total,
            min_total,
            max_total,
        });
    }

    Ok(quota)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_total() {
        let quota = distribute_slots(25, 5, 5, 7).unwrap();
        assert_eq!(quota, vec![5, 5, 5, 5, 5]);
    }

    #[test]
    fn test_maximum_total() {
        let quota = distribute_slots(35, 5, 5, 7).unwrap();
        assert_eq!(quota, vec![7, 7, 7, 7, 7]);
    }

    #[test]
    fn test_surplus_lands_on_early_days() {
        let quota = distribute_slots(28, 5, 5, 7).unwrap();
        assert_eq!(quota, vec![7, 6, 5, 5, 5]);
        assert_eq!(quota.iter().sum::<usize>(), 28);
    }

    #[test]
    fn test_every_feasible_total_in_bounds() {
        // Every total in [min_total, max_total] distributes within bounds
        // and sums exactly.
        for total in 25..=35 {
            let quota = distribute_slots(total, 5, 5, 7).unwrap();
            assert_eq!(quota.len(), 5);
            assert_eq!(quota.iter().sum::<usize>(), total);
            assert!(quota.iter().all(|&q| (5..=7).contains(&q)), "{quota:?}");
        }
    }

    #[test]
    fn test_total_below_minimum() {
        let err = distribute_slots(10, 5, 5, 7).unwrap_err();
        assert_eq!(
            err,
            QuotaError::Infeasible {
                total: 10,
                min_total: 25,
                max_total: 35,
            }
        );
    }

    #[test]
    fn test_total_above_maximum() {
        let err = distribute_slots(36, 5, 5, 7).unwrap_err();
        assert!(matches!(err, QuotaError::Infeasible { total: 36, .. }));
    }

    #[test]
    fn test_error_display() {
        let err = distribute_slots(10, 5, 5, 7).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains("25..=35"));
    }
}
