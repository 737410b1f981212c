//! Gantt chart data for manufacturing orders.
//!
//! Resolves the time window of an order and produces one positioned,
//! uniquely labelled bar per scheduled operation. Persistence and
//! drawing stay outside: data comes in through [`repository::OrderRepository`]
//! and bars are built by a [`scale::ChartScale`].
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Order`, `OrderOperation`, `Operation`,
//!   `DateRange`, `ChartItem`
//! - **`resolver`**: `GanttResolver`, window resolution, label disambiguation
//! - **`scale`**: `ChartScale` trait and the stock `GanttScale`
//! - **`repository`**: `OrderRepository` trait and `InMemoryRepository`
//! - **`context`**: JSON request context
//! - **`error`**: Fatal error types
//!
//! # Error Model
//!
//! Only contract violations are errors (malformed order id or request
//! context, failing repository). Missing business data yields an empty
//! result and a `log` warning.

pub mod context;
pub mod error;
pub mod models;
pub mod repository;
pub mod resolver;
pub mod scale;

pub use context::RequestContext;
pub use error::{GanttError, GanttResult, RepositoryError, RepositoryResult};
pub use resolver::GanttResolver;
