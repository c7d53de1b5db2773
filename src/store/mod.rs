//! # Order Store
//!
//! The append-only, in-memory list of orders for one application session.
//!
//! The store supports exactly two operations: [`OrderStore::append`] and
//! [`OrderStore::all`]. There is no update, no delete and no lookup by key,
//! so an order's position (its [`OrderId`]) never changes once assigned.
//!
//! The store is owned by the [`OrderSession`](crate::lifecycle::OrderSession)
//! and handed to the intake form and admin view by reference. Everything runs
//! on the UI thread, so no locking is involved.

use crate::model::{OrderId, OrderRecord};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct OrderStore {
    records: Vec<OrderRecord>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns the id it was assigned.
    pub fn append(&mut self, record: OrderRecord) -> OrderId {
        debug!(?record, "Append");
        let id = OrderId(self.records.len());
        self.records.push(record);
        info!(order_id = %id, size = self.records.len(), "Created");
        id
    }

    /// All records, in insertion order.
    pub fn all(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, HolsterType};

    fn order(name: &str) -> OrderRecord {
        OrderRecord::new(name, None, HolsterType::Iwb, Some(Color::Black))
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = OrderStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_append_assigns_positions_in_order() {
        let mut store = OrderStore::new();

        let first = store.append(order("Alice"));
        let second = store.append(order("Bob"));
        let third = store.append(order("Carol"));

        assert_eq!(first, OrderId(0));
        assert_eq!(second, OrderId(1));
        assert_eq!(third, OrderId(2));

        let names: Vec<_> = store.all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_duplicate_records_are_kept() {
        let mut store = OrderStore::new();
        store.append(order("Alice"));
        store.append(order("Alice"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0], store.all()[1]);
    }
}
