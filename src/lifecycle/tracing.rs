//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber for the whole
//! application. Call it once, before the session is created.
//!
//! ## Configuration
//!
//! Log lines use the compact format without the module prefix
//! (`with_target(false)`). Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! # Order placements, refreshes and window changes
//! RUST_LOG=info homs
//!
//! # Also the raw form fields and every appended record
//! RUST_LOG=debug homs
//!
//! # Only this crate
//! RUST_LOG=holster_orders=debug homs
//! ```
//!
//! ## What Gets Traced
//!
//! - **Session**: start, window open/close, exit confirmation
//! - **Intake**: each submission, with the validation failure if any
//! - **Store**: every append, with the assigned id and new size
//! - **Admin view**: every refresh, with the row count
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**, a rejected submission followed by a corrected
//! one looks like:
//!
//! ```text
//! INFO dispatch{action=PlaceNewOrder}: Order form opened window=window_1
//! DEBUG submit_order{id=WindowId(1)}:submit: submit called fields=FormFields { name: "Alice", email: "", .. }
//! WARN submit_order{id=WindowId(1)}:submit: Validation failed error=Missing required field(s): Email
//! DEBUG submit_order{id=WindowId(1)}:submit: Append record=OrderRecord { name: "Alice", .. }
//! INFO submit_order{id=WindowId(1)}:submit: Created order_id=order_0 size=1
//! INFO submit_order{id=WindowId(1)}:submit: Order placed order_id=order_0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans carry enough context
        .compact()
        .init();
}
