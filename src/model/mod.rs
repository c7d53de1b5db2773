//! Pure data structures for holster orders.

pub mod choices;
pub mod order;

pub use choices::*;
pub use order::*;
