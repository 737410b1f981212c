//! Date range model.
//!
//! A closed interval of wall-clock instants. Used both for the order-level
//! chart window and for individual operation bars.
//!
//! # Time Model
//! Instants are `chrono::NaiveDateTime` (no time zone). The consumer
//! decides which zone the stored dates belong to; all ranges handled by
//! one resolution run are assumed to share it.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A date interval [from, to].
///
/// Closed interval: both ends are part of the range. An inverted range
/// (`to < from`) can be constructed; consumers decide how to treat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Range start (inclusive).
    pub from: NaiveDateTime,
    /// Range end (inclusive).
    pub to: NaiveDateTime,
}

impl DateRange {
    /// Creates a new date range.
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self { from, to }
    }

    /// Length of the range (`to - from`). Negative for inverted ranges.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.to - self.from
    }

    /// Whether `to` precedes `from`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.to < self.from
    }

    /// Whether an instant falls within this range.
    #[inline]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.from && instant <= self.to
    }

    /// Whether two ranges share at least one instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Intersection of two ranges, if any.
    pub fn clamp_to(&self, bounds: &Self) -> Option<Self> {
        if !self.overlaps(bounds) {
            return None;
        }
        Some(Self::new(self.from.max(bounds.from), self.to.min(bounds.to)))
    }
}
