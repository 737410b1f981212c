//! Operation models.
//!
//! An [`Operation`] is a reusable definition (number + name) from the
//! technology catalogue. An [`OrderOperation`] is one scheduled instance
//! of such a definition inside an order's operation tree, carrying its
//! own effective window.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DateRange, OrderId};

/// Order-operation identifier (repository key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperationId(pub i64);

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reusable operation definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Catalogue number (e.g. "10").
    pub number: String,
    /// Display name (e.g. "Drilling").
    pub name: String,
}

impl Operation {
    /// Creates an operation definition.
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
        }
    }
}

/// A scheduled operation within an order.
///
/// Dates are filled in by the scheduling engine; either end may still be
/// missing when the operation has not been scheduled yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOperation {
    /// Unique identifier.
    pub id: OperationId,
    /// Owning order.
    pub order_id: OrderId,
    /// Position in the order's operation tree (e.g. "1.2.").
    pub node_number: String,
    /// Referenced operation definition.
    pub operation: Operation,
    /// Actual start.
    pub effective_date_from: Option<NaiveDateTime>,
    /// Actual end.
    pub effective_date_to: Option<NaiveDateTime>,
}

impl OrderOperation {
    /// Creates an unscheduled order operation.
    pub fn new(id: i64, order_id: OrderId, operation: Operation) -> Self {
        Self {
            id: OperationId(id),
            order_id,
            node_number: String::new(),
            operation,
            effective_date_from: None,
            effective_date_to: None,
        }
    }

    /// Sets the node number.
    pub fn with_node_number(mut self, node_number: impl Into<String>) -> Self {
        self.node_number = node_number.into();
        self
    }

    /// Sets both ends of the effective window.
    pub fn with_effective(mut self, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        self.effective_date_from = Some(from);
        self.effective_date_to = Some(to);
        self
    }

    /// Sets the effective start only.
    pub fn with_effective_start(mut self, from: NaiveDateTime) -> Self {
        self.effective_date_from = Some(from);
        self
    }

    /// Sets the effective end only.
    pub fn with_effective_end(mut self, to: NaiveDateTime) -> Self {
        self.effective_date_to = Some(to);
        self
    }

    /// The effective window, if both ends are known.
    pub fn effective_range(&self) -> Option<DateRange> {
        match (self.effective_date_from, self.effective_date_to) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)),
            _ => None,
        }
    }
}
