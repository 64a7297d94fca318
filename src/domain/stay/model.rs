//! Period and Stay value types

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Date range of a stay.
///
/// Overlap is half-open: a guest checking out on the day another one
/// checks in does not conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
}

impl Period {
    /// Build a period without checking the date order.
    pub fn new(arrival_date: NaiveDate, departure_date: NaiveDate) -> Self {
        Self {
            arrival_date,
            departure_date,
        }
    }

    /// Build a period, rejecting ranges that do not cover at least one night.
    pub fn try_new(arrival_date: NaiveDate, departure_date: NaiveDate) -> DomainResult<Self> {
        if arrival_date >= departure_date {
            return Err(DomainError::InvalidPeriod {
                arrival: arrival_date,
                departure: departure_date,
            });
        }
        Ok(Self::new(arrival_date, departure_date))
    }

    pub fn intersects_with(&self, other: &Period) -> bool {
        other.arrival_date < self.departure_date && other.departure_date > self.arrival_date
    }

    /// Number of nights covered (negative for an inverted range)
    pub fn nights(&self) -> i64 {
        (self.departure_date - self.arrival_date).num_days()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.arrival_date, self.departure_date)
    }
}

/// Occupancy of one room for one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stay {
    pub room_no: u32,
    pub period: Period,
}

impl Stay {
    pub fn new(room_no: u32, period: Period) -> Self {
        Self { room_no, period }
    }

    pub fn intersects_with(&self, other: &Stay) -> bool {
        self.room_no == other.room_no && self.period.intersects_with(&other.period)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, day).unwrap()
    }

    fn period(from: u32, to: u32) -> Period {
        Period::new(date(from), date(to))
    }

    #[test]
    fn identical_periods_intersect() {
        assert!(period(1, 2).intersects_with(&period(1, 2)));
    }

    #[test]
    fn partially_overlapping_periods_intersect_both_ways() {
        let a = period(1, 3);
        let b = period(2, 4);
        assert!(a.intersects_with(&b));
        assert!(b.intersects_with(&a));
    }

    #[test]
    fn contained_period_intersects() {
        assert!(period(1, 10).intersects_with(&period(4, 5)));
        assert!(period(4, 5).intersects_with(&period(1, 10)));
    }

    #[test]
    fn touching_periods_do_not_intersect() {
        let a = period(1, 3);
        let b = period(3, 5);
        assert!(!a.intersects_with(&b));
        assert!(!b.intersects_with(&a));
    }

    #[test]
    fn disjoint_periods_do_not_intersect() {
        assert!(!period(1, 2).intersects_with(&period(5, 6)));
    }

    #[test]
    fn try_new_rejects_empty_and_inverted_ranges() {
        assert_eq!(
            Period::try_new(date(2), date(2)),
            Err(DomainError::InvalidPeriod {
                arrival: date(2),
                departure: date(2),
            })
        );
        assert!(Period::try_new(date(3), date(1)).is_err());
        assert_eq!(Period::try_new(date(1), date(3)), Ok(period(1, 3)));
    }

    #[test]
    fn nights_counts_days_between_dates() {
        assert_eq!(period(1, 4).nights(), 3);
        assert_eq!(period(4, 1).nights(), -3);
    }

    #[test]
    fn display_renders_date_range() {
        assert_eq!(period(1, 2).to_string(), "2022-01-01..2022-01-02");
    }

    #[test]
    fn stays_in_different_rooms_never_intersect() {
        let a = Stay::new(0, period(1, 3));
        let b = Stay::new(1, period(1, 3));
        assert!(!a.intersects_with(&b));
    }

    #[test]
    fn stays_in_same_room_follow_period_overlap() {
        let a = Stay::new(2, period(1, 3));
        assert!(a.intersects_with(&Stay::new(2, period(2, 4))));
        assert!(!a.intersects_with(&Stay::new(2, period(3, 4))));
    }
}
