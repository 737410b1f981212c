//! Gantt domain models.
//!
//! Statically typed records for the data a Gantt resolution reads
//! (orders and their operations) and produces (chart items).
//!
//! # Domain Mappings
//!
//! | u-gantt | Manufacturing | Chart |
//! |---------|---------------|-------|
//! | Order | Production order | Chart window |
//! | OrderOperation | Scheduled operation | One row / bar |
//! | Operation | Technology operation | Row label parts |
//! | ChartItem | - | Positioned bar |

mod chart;
mod operation;
mod order;
mod range;

pub use chart::{ChartItem, GanttItems};
pub use operation::{Operation, OperationId, OrderOperation};
pub use order::{Order, OrderId};
pub use range::DateRange;
