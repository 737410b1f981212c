//! Order model.
//!
//! A manufacturing order carries two time windows: the planned one set
//! when the order was scheduled, and the effective one recorded once
//! production actually started. Either may be partially filled.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Order identifier (repository key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub i64);

impl FromStr for OrderId {
    type Err = ParseIntError;

    /// Parses a signed decimal integer. Surrounding whitespace is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(OrderId)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A manufacturing order.
///
/// # Time Windows
/// - **Planned** (`date_from`, `date_to`): the scheduled window.
/// - **Effective** (`effective_date_from`, `effective_date_to`): the actual
///   window, filled in as production progresses.
///
/// `date_to >= date_from` is assumed when both are set; nothing here
/// checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub number: String,
    /// Planned start.
    pub date_from: Option<NaiveDateTime>,
    /// Planned end.
    pub date_to: Option<NaiveDateTime>,
    /// Actual start.
    pub effective_date_from: Option<NaiveDateTime>,
    /// Actual end.
    pub effective_date_to: Option<NaiveDateTime>,
}

impl Order {
    /// Creates an order with no dates.
    pub fn new(id: i64) -> Self {
        Self {
            id: OrderId(id),
            number: String::new(),
            date_from: None,
            date_to: None,
            effective_date_from: None,
            effective_date_to: None,
        }
    }

    /// Sets the order number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets both ends of the planned window.
    pub fn with_planned(mut self, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Sets the planned start only.
    pub fn with_planned_start(mut self, from: NaiveDateTime) -> Self {
        self.date_from = Some(from);
        self
    }

    /// Sets the actual start.
    pub fn with_effective_start(mut self, from: NaiveDateTime) -> Self {
        self.effective_date_from = Some(from);
        self
    }

    /// Sets the actual end.
    pub fn with_effective_end(mut self, to: NaiveDateTime) -> Self {
        self.effective_date_to = Some(to);
        self
    }

    /// Whether production has started.
    pub fn has_started(&self) -> bool {
        self.effective_date_from.is_some()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.number.is_empty() {
            write!(f, "order #{}", self.id)
        } else {
            write!(f, "order #{} ({})", self.id, self.number)
        }
    }
}
