//! Gantt resolution for one order.
//!
//! # Algorithm
//!
//! 1. Parse the order id (fatal on failure).
//! 2. Fetch the order and its operations.
//! 3. Resolve the order window and hand it to the scale.
//! 4. For each operation with both effective dates, build a uniquely
//!    labelled item through the scale.
//!
//! Steps 2-3 end the run early with an empty result when data is
//! missing; the scale is left untouched in that case.

use log::{debug, warn};

use crate::context::RequestContext;
use crate::error::{GanttError, GanttResult, RepositoryError};
use crate::models::{GanttItems, Order, OrderId, OrderOperation};
use crate::repository::OrderRepository;
use crate::scale::ChartScale;

use super::labels::{LabelCounter, base_label};
use super::window::resolve_window;

/// Builds Gantt chart items for manufacturing orders.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_gantt::models::{Operation, Order, OrderId, OrderOperation};
/// use u_gantt::repository::InMemoryRepository;
/// use u_gantt::resolver::GanttResolver;
/// use u_gantt::scale::{GanttScale, ZoomLevel};
///
/// let day = |d| NaiveDate::from_ymd_opt(2021, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// let repo = InMemoryRepository::new()
///     .with_order(Order::new(42).with_planned(day(1), day(10)))
///     .with_operation(
///         OrderOperation::new(7, OrderId(42), Operation::new("10", "Cut"))
///             .with_node_number("1")
///             .with_effective(day(2), day(3)),
///     );
///
/// let resolver = GanttResolver::new(repo);
/// let mut scale = GanttScale::new(ZoomLevel::Daily);
/// let items = resolver.resolve(&mut scale, "42").unwrap();
///
/// assert_eq!(items.len(), 1);
/// assert!(items.contains_key("1 10 Cut"));
/// ```
#[derive(Debug, Clone)]
pub struct GanttResolver<R> {
    repository: R,
}

impl<R: OrderRepository> GanttResolver<R> {
    /// Creates a resolver reading from `repository`.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Resolves chart items for the order identified by `order_id`.
    ///
    /// Sets the window of `scale` once, unless the run ends early.
    ///
    /// # Errors
    /// - [`GanttError::InvalidOrderId`] when `order_id` is not an integer.
    /// - [`GanttError::Repository`] when the repository fails.
    ///
    /// An unknown order, an order without operations or an order without
    /// a usable window yields `Ok` with an empty map.
    pub fn resolve<S>(&self, scale: &mut S, order_id: &str) -> GanttResult<GanttItems>
    where
        S: ChartScale + ?Sized,
    {
        let id = order_id
            .parse::<OrderId>()
            .map_err(|source| GanttError::InvalidOrderId {
                value: order_id.to_string(),
                source,
            })?;

        let Some(order) = self.find_order(id)? else {
            warn!("Cannot find order for {id}");
            return Ok(GanttItems::new());
        };

        let operations = self.repository.find_operations(&order)?;
        if operations.is_empty() {
            warn!("Cannot find operations for {order}");
            return Ok(GanttItems::new());
        }

        let window = match resolve_window(&order) {
            Ok(window) => window,
            Err(gap) => {
                warn!("Cannot resolve chart window for {order}: {gap}");
                return Ok(GanttItems::new());
            }
        };
        debug!("Chart window for {order}: {} .. {}", window.from, window.to);
        scale.set_window(window);

        Ok(build_items(&*scale, &operations))
    }

    /// Resolves chart items for the order named in a request context.
    pub fn resolve_context<S>(
        &self,
        scale: &mut S,
        context: &RequestContext,
    ) -> GanttResult<GanttItems>
    where
        S: ChartScale + ?Sized,
    {
        self.resolve(scale, &context.order_id)
    }

    /// `NotFound` from the repository counts as absence, not failure.
    fn find_order(&self, id: OrderId) -> GanttResult<Option<Order>> {
        match self.repository.find_order(id) {
            Ok(order) => Ok(order),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Builds labelled items for `operations` against an already windowed scale.
///
/// Operations lacking either effective date, and items the scale
/// refuses, are skipped without consuming a label counter.
pub fn build_items<S>(scale: &S, operations: &[OrderOperation]) -> GanttItems
where
    S: ChartScale + ?Sized,
{
    let mut items = GanttItems::new();
    let mut counter = LabelCounter::new();

    for operation in operations {
        let Some(range) = operation.effective_range() else {
            debug!("Skipping operation {}: not scheduled", operation.id);
            continue;
        };

        let base = base_label(operation);
        let (label, n) = counter.next_label(&base);

        match scale.create_item(&label, &label, operation.id, range) {
            Some(item) => {
                items.insert(label, vec![item]);
                counter.record(base, n);
            }
            None => debug!("Skipping operation {}: outside chart scale", operation.id),
        }
    }

    items
}
