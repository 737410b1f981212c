//! Gantt chart resolution.
//!
//! Turns an order and its scheduled operations into a chart window and
//! one labelled bar per operation.
//!
//! # Window
//!
//! `resolve_window` picks the planned window, or re-anchors the planned
//! span at the actual start once production has begun.
//!
//! # Labels
//!
//! `base_label` and `LabelCounter` give every row a unique, stable label
//! so rows can be keyed in an ordered map.

mod gantt;
mod labels;
mod window;

pub use gantt::{GanttResolver, build_items};
pub use labels::{LabelCounter, base_label};
pub use window::{WindowGap, resolve_window};
