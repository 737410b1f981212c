//! Row labels.
//!
//! Every operation row is labelled `"<node number> <operation number>
//! <operation name>"`. Rows whose label was already used get a counter
//! suffix: `"3 10 Drilling"`, `"3 10 Drilling (1) "`, `"3 10 Drilling (2) "`.
//! The trailing space is part of the label.

use std::collections::HashMap;

use crate::models::OrderOperation;

/// Undecorated label of an operation row.
pub fn base_label(operation: &OrderOperation) -> String {
    format!(
        "{} {} {}",
        operation.node_number, operation.operation.number, operation.operation.name
    )
}

/// Per-base-label counters for one resolution run.
///
/// A label is only counted once [`record`](Self::record) is called, so a
/// row that ends up not being drawn does not shift later suffixes.
#[derive(Debug, Clone, Default)]
pub struct LabelCounter {
    last_used: HashMap<String, u32>,
}

impl LabelCounter {
    /// Creates an empty counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label the next row with `base` would get, and its counter.
    ///
    /// Counter 0 means the base label is used as is.
    pub fn next_label(&self, base: &str) -> (String, u32) {
        match self.last_used.get(base) {
            None => (base.to_string(), 0),
            Some(&last) => {
                let counter = last + 1;
                (format!("{base} ({counter}) "), counter)
            }
        }
    }

    /// Marks `counter` as used for `base`.
    pub fn record(&mut self, base: impl Into<String>, counter: u32) {
        self.last_used.insert(base.into(), counter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Operation, OrderId};

    #[test]
    fn test_base_label() {
        let op = OrderOperation::new(1, OrderId(1), Operation::new("10", "Drilling"))
            .with_node_number("3");
        assert_eq!(base_label(&op), "3 10 Drilling");
    }

    #[test]
    fn test_base_label_verbatim() {
        let op = OrderOperation::new(1, OrderId(1), Operation::new(" 10", "Cut  "))
            .with_node_number("");
        assert_eq!(base_label(&op), "  10 Cut  ");
    }

    #[test]
    fn test_counter_sequence() {
        let mut counter = LabelCounter::new();
        let mut labels = Vec::new();
        for _ in 0..3 {
            let (label, n) = counter.next_label("3 10 Drilling");
            counter.record("3 10 Drilling", n);
            labels.push(label);
        }
        assert_eq!(
            labels,
            vec!["3 10 Drilling", "3 10 Drilling (1) ", "3 10 Drilling (2) "]
        );
    }

    #[test]
    fn test_unrecorded_label_does_not_advance() {
        let mut counter = LabelCounter::new();
        assert_eq!(counter.next_label("A").1, 0);
        assert_eq!(counter.next_label("A").1, 0);

        counter.record("A", 0);
        assert_eq!(counter.next_label("A"), ("A (1) ".to_string(), 1));
        assert_eq!(counter.next_label("B"), ("B".to_string(), 0));
    }
}
