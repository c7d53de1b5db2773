//! # Admin View
//!
//! A read-only table of every order placed in this session.
//!
//! The view is pull-based. It renders the store once when opened and again
//! only when [`AdminView::refresh`] is called, so orders placed in between
//! are not shown until the next refresh. The view never writes to the store.

pub mod table;

pub use table::*;

use crate::lifecycle::WindowState;
use crate::store::OrderStore;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AdminView {
    snapshot: TableSnapshot,
    state: WindowState,
}

impl AdminView {
    /// Opens the view with a snapshot of the store's current contents.
    pub fn open(store: &OrderStore) -> Self {
        let snapshot = render(store.all());
        debug!(rows = snapshot.row_count(), "Admin view opened");
        Self {
            snapshot,
            state: WindowState::Open,
        }
    }

    /// The rows as of the last open or refresh.
    pub fn snapshot(&self) -> &TableSnapshot {
        &self.snapshot
    }

    /// Re-renders against the store and returns the new row count.
    pub fn refresh(&mut self, store: &OrderStore) -> usize {
        self.snapshot = render(store.all());
        info!(rows = self.snapshot.row_count(), "Refreshed");
        self.snapshot.row_count()
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn close(&mut self) {
        self.state = WindowState::Closed;
    }
}
