//! Tabular projection of the order list.

use crate::model::{OrderId, OrderRecord};

/// Column headings, left to right.
pub const COLUMNS: [&str; 5] = ["Name", "Email", "Holster Type", "Color", "Status"];

/// One rendered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub order_id: OrderId,
    pub cells: [String; 5],
}

impl TableRow {
    fn from_record(order_id: OrderId, record: &OrderRecord) -> Self {
        Self {
            order_id,
            cells: [
                record.name.clone(),
                record.email.clone().unwrap_or_default(),
                record.holster_type.to_string(),
                record.color.map(|c| c.to_string()).unwrap_or_default(),
                record.status.to_string(),
            ],
        }
    }
}

/// A point-in-time rendering of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSnapshot {
    rows: Vec<TableRow>,
}

impl TableSnapshot {
    pub fn columns(&self) -> &'static [&'static str; 5] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Renders `records` into table rows, one per record, in the same order.
///
/// Absent optional values become empty cells.
pub fn render(records: &[OrderRecord]) -> TableSnapshot {
    TableSnapshot {
        rows: records
            .iter()
            .enumerate()
            .map(|(position, record)| TableRow::from_record(OrderId(position), record))
            .collect(),
    }
}
