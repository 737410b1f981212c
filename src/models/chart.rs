//! Chart item model.
//!
//! A chart item is one renderable Gantt bar: a label pair, the identifier
//! of the order operation it was built from, its date range and its
//! position on the scale it was created against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DateRange, OperationId};

/// Resolution output: display label → chart items.
///
/// Ordered by label. Each value holds exactly one item because duplicate
/// labels are disambiguated before insertion.
pub type GanttItems = BTreeMap<String, Vec<ChartItem>>;

/// One positioned bar on a Gantt chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartItem {
    /// Row identifier label.
    pub id_label: String,
    /// Row display label.
    pub display_label: String,
    /// Source order operation.
    pub source_id: OperationId,
    /// Dates the bar represents (not clipped to the scale window).
    pub range: DateRange,
    /// Bar start, in scale units from the window start.
    pub from: f64,
    /// Bar end, in scale units from the window start.
    pub to: f64,
}

impl ChartItem {
    /// Creates an item positioned at `[from, to]` scale units.
    pub fn new(
        id_label: impl Into<String>,
        display_label: impl Into<String>,
        source_id: OperationId,
        range: DateRange,
        from: f64,
        to: f64,
    ) -> Self {
        Self {
            id_label: id_label.into(),
            display_label: display_label.into(),
            source_id,
            range,
            from,
            to,
        }
    }

    /// Bar length in scale units.
    #[inline]
    pub fn width(&self) -> f64 {
        self.to - self.from
    }
}
