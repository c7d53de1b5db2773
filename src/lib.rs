//! # Holster Orders
//!
//! > **Order intake and review for a custom holster shop.**
//!
//! This crate is the headless core of HOMS, the Holster Order Management
//! System. It records customer orders in memory for the length of one session
//! and renders them as a table for the shop's admin view. The desktop shell in
//! `crates/homs-desktop` draws the windows; everything it shows comes from here.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One owner, no globals
//! The order list is not ambient state. A single [`OrderSession`](lifecycle::OrderSession)
//! owns the [`OrderStore`](store::OrderStore) and lends it to the intake form or the admin
//! view for exactly one call at a time.
//!
//! ### Append-only
//! Orders are appended and enumerated. Nothing updates or deletes them, so an
//! order's position is its identity for the whole session.
//!
//! ### Pull, don't push
//! The admin view renders a snapshot when opened and again when the user hits
//! Refresh. It never observes the store, so a freshly placed order shows up
//! after the next refresh and not before.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: The order record and its fixed choice sets.
//! - **Key items**: [`OrderRecord`](model::OrderRecord), [`HolsterType`](model::HolsterType),
//!   [`Color`](model::Color), [`OrderStatus`](model::OrderStatus).
//!
//! ### 2. The Store ([`store`])
//! - **Role**: The append-only order list.
//! - **Key items**: [`OrderStore`](store::OrderStore).
//!
//! ### 3. The Form ([`intake`])
//! - **Role**: Validates raw form input and appends exactly one order per accepted submission.
//! - **Key items**: [`IntakeForm`](intake::IntakeForm), [`ValidationError`](intake::ValidationError).
//!
//! ### 4. The Table ([`admin`])
//! - **Role**: Read-only projection of the store with manual refresh.
//! - **Key items**: [`AdminView`](admin::AdminView), [`TableSnapshot`](admin::TableSnapshot).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Role**: Owns the store and every open window, handles dialogs and exit, sets up tracing.
//! - **Key items**: [`OrderSession`](lifecycle::OrderSession), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 6. Settings ([`config`])
//! - **Role**: Which optional fields are required, and where the banner image lives.
//! - **Key items**: [`HomsConfig`](config::HomsConfig), [`FormConfig`](config::FormConfig).
//!
//! ## 🚀 Quick Start
//!
//! ### Running the App
//!
//! ```bash
//! RUST_LOG=info cargo run -p homs-desktop
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod admin;
pub mod config;
pub mod intake;
pub mod lifecycle;
pub mod model;
pub mod store;
