//! # Session Lifecycle
//!
//! Everything that ties the order store, the intake forms and the admin views
//! into one running application.
//!
//! ## The OrderSession Pattern
//!
//! There is no global order list. [`OrderSession`] owns the one
//! [`OrderStore`](crate::store::OrderStore) and lends it to the component that
//! needs it for the duration of a single call:
//!
//! ```rust,ignore
//! // Intake borrows the store mutably, only while submitting
//! form.submit(&mut self.store)?;
//!
//! // The admin view borrows it immutably, only while rendering
//! view.refresh(&self.store);
//! ```
//!
//! The GUI never touches the store directly. It turns clicks into session
//! calls (`dispatch`, `submit_order`, `refresh_admin`, `close_window`,
//! `acknowledge_notice`, `answer_exit`) and draws the resulting state.
//!
//! ## Blocking Dialogs
//!
//! A pending [`Notice`] or the exit prompt blocks the session: every other
//! call returns [`SessionError::Blocked`] until the dialog is answered. This
//! mirrors a modal message box on a single UI thread.
//!
//! ## Exit
//!
//! 1. `dispatch(MainAction::Exit)` moves to `ConfirmingExit`
//! 2. `answer_exit(false)` returns to `Running`
//! 3. `answer_exit(true)` closes every window and moves to `Exited`, which is
//!    terminal
//!
//! ## Observability & Tracing
//!
//! See the [`tracing`] module for [`setup_tracing`] and sample output.

pub mod session;
pub mod tracing;
pub mod window;

pub use session::*;
pub use self::tracing::*;
pub use window::*;
