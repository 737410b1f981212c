//! Order-level chart window.
//!
//! # Precedence
//! 1. No actual start: the planned window `[date_from, date_to]`.
//! 2. Actual start known: the planned span re-anchored at the actual
//!    start, `[effective_from, effective_from + (date_to - date_from)]`.
//!    `effective_date_to` does not take part.

use thiserror::Error;

use crate::models::{DateRange, Order};

/// Why an order has no chart window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowGap {
    /// Neither an actual nor a planned start.
    #[error("no start date")]
    NoStartDate,
    /// Planned start without planned end (and no actual start).
    #[error("no planned end date")]
    NoPlannedEnd,
    /// Actual start known but the planned window is incomplete.
    #[error("no planned span to project from the actual start")]
    NoPlannedSpan,
    /// Projected end does not fit the date type.
    #[error("projected end date out of range")]
    OutOfRange,
}

/// Resolves the window an order's chart is drawn against.
pub fn resolve_window(order: &Order) -> Result<DateRange, WindowGap> {
    match order.effective_date_from {
        None => {
            let from = order.date_from.ok_or(WindowGap::NoStartDate)?;
            let to = order.date_to.ok_or(WindowGap::NoPlannedEnd)?;
            Ok(DateRange::new(from, to))
        }
        Some(start) => {
            let planned = planned_range(order).ok_or(WindowGap::NoPlannedSpan)?;
            let end = start
                .checked_add_signed(planned.duration())
                .ok_or(WindowGap::OutOfRange)?;
            Ok(DateRange::new(start, end))
        }
    }
}

fn planned_range(order: &Order) -> Option<DateRange> {
    Some(DateRange::new(order.date_from?, order.date_to?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_planned_window() {
        let order = Order::new(1).with_planned(day(1), day(10));
        assert_eq!(resolve_window(&order), Ok(DateRange::new(day(1), day(10))));
    }

    #[test]
    fn test_effective_start_reanchors_planned_span() {
        let order = Order::new(1)
            .with_planned(day(1), day(10))
            .with_effective_start(day(2));
        assert_eq!(resolve_window(&order), Ok(DateRange::new(day(2), day(11))));
    }

    #[test]
    fn test_effective_end_is_ignored() {
        let order = Order::new(1)
            .with_planned(day(1), day(10))
            .with_effective_start(day(2))
            .with_effective_end(day(4));
        assert_eq!(resolve_window(&order), Ok(DateRange::new(day(2), day(11))));
    }

    #[test]
    fn test_no_start_date() {
        assert_eq!(resolve_window(&Order::new(1)), Err(WindowGap::NoStartDate));

        // An actual end alone does not help.
        let order = Order::new(1).with_effective_end(day(3));
        assert_eq!(resolve_window(&order), Err(WindowGap::NoStartDate));
    }

    #[test]
    fn test_no_planned_end() {
        let order = Order::new(1).with_planned_start(day(1));
        assert_eq!(resolve_window(&order), Err(WindowGap::NoPlannedEnd));
    }

    #[test]
    fn test_no_planned_span() {
        let order = Order::new(1).with_effective_start(day(2));
        assert_eq!(resolve_window(&order), Err(WindowGap::NoPlannedSpan));

        let order = Order::new(1)
            .with_planned_start(day(1))
            .with_effective_start(day(2));
        assert_eq!(resolve_window(&order), Err(WindowGap::NoPlannedSpan));
    }

    #[test]
    fn test_projected_end_out_of_range() {
        let order = Order::new(1)
            .with_planned(NaiveDateTime::MIN, NaiveDateTime::MIN + TimeDelta::days(10))
            .with_effective_start(NaiveDateTime::MAX - TimeDelta::days(1));
        assert_eq!(resolve_window(&order), Err(WindowGap::OutOfRange));
    }
}
