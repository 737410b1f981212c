//! Order data access.
//!
//! [`OrderRepository`] is the narrow read-only capability the resolver
//! needs: look up one order, list its operations. Real deployments back it
//! with their own persistence layer; [`InMemoryRepository`] keeps
//! everything in memory for tests and local tooling.

use std::collections::HashMap;

use crate::error::RepositoryResult;
use crate::models::{Order, OrderId, OrderOperation};

/// Read access to orders and their operations.
///
/// Fetches are synchronous and return fully materialized data.
pub trait OrderRepository {
    /// Looks up an order. `Ok(None)` when no such order exists.
    fn find_order(&self, id: OrderId) -> RepositoryResult<Option<Order>>;

    /// Lists the operations belonging to `order`, in stored order.
    fn find_operations(&self, order: &Order) -> RepositoryResult<Vec<OrderOperation>>;
}

impl<T: OrderRepository + ?Sized> OrderRepository for &T {
    fn find_order(&self, id: OrderId) -> RepositoryResult<Option<Order>> {
        (**self).find_order(id)
    }

    fn find_operations(&self, order: &Order) -> RepositoryResult<Vec<OrderOperation>> {
        (**self).find_operations(order)
    }
}

impl<T: OrderRepository + ?Sized> OrderRepository for Box<T> {
    fn find_order(&self, id: OrderId) -> RepositoryResult<Option<Order>> {
        (**self).find_order(id)
    }

    fn find_operations(&self, order: &Order) -> RepositoryResult<Vec<OrderOperation>> {
        (**self).find_operations(order)
    }
}

/// In-memory repository.
///
/// Orders are keyed by id; operations keep insertion order so that
/// `find_operations` is deterministic.
///
/// # Example
/// ```
/// use u_gantt::models::{Operation, Order, OrderId, OrderOperation};
/// use u_gantt::repository::{InMemoryRepository, OrderRepository};
///
/// let repo = InMemoryRepository::new()
///     .with_order(Order::new(1))
///     .with_operation(OrderOperation::new(10, OrderId(1), Operation::new("10", "Cut")));
///
/// let order = repo.find_order(OrderId(1)).unwrap().unwrap();
/// assert_eq!(repo.find_operations(&order).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    orders: HashMap<OrderId, Order>,
    operations: Vec<OrderOperation>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an order.
    pub fn with_order(mut self, order: Order) -> Self {
        self.insert_order(order);
        self
    }

    /// Adds an order operation.
    pub fn with_operation(mut self, operation: OrderOperation) -> Self {
        self.insert_operation(operation);
        self
    }

    /// Stores an order, replacing any order with the same id.
    pub fn insert_order(&mut self, order: Order) {
        self.orders.insert(order.id, order);
    }

    /// Appends an order operation.
    pub fn insert_operation(&mut self, operation: OrderOperation) {
        self.operations.push(operation);
    }

    /// Number of stored orders.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Number of stored operations across all orders.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }
}

impl OrderRepository for InMemoryRepository {
    fn find_order(&self, id: OrderId) -> RepositoryResult<Option<Order>> {
        Ok(self.orders.get(&id).cloned())
    }

    fn find_operations(&self, order: &Order) -> RepositoryResult<Vec<OrderOperation>> {
        Ok(self
            .operations
            .iter()
            .filter(|op| op.order_id == order.id)
            .cloned()
            .collect())
    }
}
