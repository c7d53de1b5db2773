//! The order record and its identity.

use crate::model::{Color, HolsterType, OrderStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identity of an order: its zero-based position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub usize);

impl From<usize> for OrderId {
    fn from(position: usize) -> Self {
        Self(position)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Represents a customer holster order.
///
/// Records are only ever built by the intake form and appended to the
/// [`OrderStore`](crate::store::OrderStore); nothing edits them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub name: String,
    pub email: Option<String>,
    pub holster_type: HolsterType,
    pub color: Option<Color>,
    pub status: OrderStatus,
}

impl OrderRecord {
    /// Creates a new order record.
    ///
    /// # Arguments
    /// * `name` - Customer's name
    /// * `email` - Customer's email, if the form collected one
    /// * `holster_type` - Selected holster type
    /// * `color` - Selected color, if the form collected one
    ///
    /// # Notes
    /// The order is initialized with status `Pending`.
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        holster_type: HolsterType,
        color: Option<Color>,
    ) -> Self {
        Self {
            name: name.into(),
            email,
            holster_type,
            color,
            status: OrderStatus::Pending,
        }
    }
}
