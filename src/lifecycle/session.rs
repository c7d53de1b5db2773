use crate::admin::AdminView;
use crate::config::FormConfig;
use crate::intake::{IntakeError, IntakeForm};
use crate::lifecycle::WindowId;
use crate::model::OrderId;
use crate::store::OrderStore;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Buttons on the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    PlaceNewOrder,
    ViewOrders,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A blocking message dialog waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Running,
    /// The exit prompt is showing.
    ConfirmingExit,
    /// Terminal.
    Exited,
}

/// Errors returned by [`OrderSession`] operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    /// No open window has this id.
    #[error("Unknown window: {0}")]
    UnknownWindow(WindowId),

    /// A notice or the exit prompt must be answered first.
    #[error("Session is waiting on a dialog")]
    Blocked,

    #[error("Session has exited")]
    Exited,
}

/// The application session: owns the order store and every open window.
///
/// `OrderSession` is responsible for:
/// - **Store ownership**: the single [`OrderStore`] lives here and is lent to
///   forms and admin views per call
/// - **Window lifecycle**: opening, submitting, refreshing and closing the
///   order form and admin windows
/// - **Dialogs**: the pending notice and the exit confirmation, both of which
///   block every other action until answered
///
/// The GUI forwards user input here and draws whatever state results, so the
/// whole flow can be driven without a display.
///
/// # Example
///
/// ```
/// use holster_orders::config::FormConfig;
/// use holster_orders::intake::Field;
/// use holster_orders::lifecycle::{MainAction, OrderSession};
///
/// let mut session = OrderSession::new(FormConfig::default());
/// let form = session.dispatch(MainAction::PlaceNewOrder).unwrap().unwrap();
///
/// let fields = session.form_mut(form).unwrap().fields_mut();
/// fields.set(Field::Name, "Alice");
/// fields.set(Field::Email, "a@x.com");
/// fields.set(Field::HolsterType, "OWB");
/// fields.set(Field::Color, "Black");
///
/// session.submit_order(form).unwrap();
/// session.acknowledge_notice();
/// assert_eq!(session.store().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct OrderSession {
    store: OrderStore,
    config: FormConfig,
    forms: Vec<(WindowId, IntakeForm)>,
    admin_views: Vec<(WindowId, AdminView)>,
    notice: Option<Notice>,
    phase: SessionPhase,
    next_window: u64,
}

impl OrderSession {
    /// Starts a session with an empty store.
    pub fn new(config: FormConfig) -> Self {
        info!(?config, "Session started");
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True while a notice or the exit prompt is waiting for an answer.
    pub fn is_blocked(&self) -> bool {
        self.notice.is_some() || self.phase != SessionPhase::Running
    }

    pub fn is_exited(&self) -> bool {
        self.phase == SessionPhase::Exited
    }

    pub fn forms(&self) -> impl Iterator<Item = (WindowId, &IntakeForm)> {
        self.forms.iter().map(|(id, form)| (*id, form))
    }

    pub fn forms_mut(&mut self) -> impl Iterator<Item = (WindowId, &mut IntakeForm)> {
        self.forms.iter_mut().map(|(id, form)| (*id, form))
    }

    pub fn form_mut(&mut self, id: WindowId) -> Option<&mut IntakeForm> {
        self.forms
            .iter_mut()
            .find(|(wid, _)| *wid == id)
            .map(|(_, form)| form)
    }

    pub fn admin_views(&self) -> impl Iterator<Item = (WindowId, &AdminView)> {
        self.admin_views.iter().map(|(id, view)| (*id, view))
    }

    pub fn admin_view(&self, id: WindowId) -> Option<&AdminView> {
        self.admin_views
            .iter()
            .find(|(wid, _)| *wid == id)
            .map(|(_, view)| view)
    }

    /// Handles a main-window button.
    ///
    /// Returns the id of the window that was opened, if any.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: MainAction) -> Result<Option<WindowId>, SessionError> {
        self.ensure_interactive()?;
        match action {
            MainAction::PlaceNewOrder => {
                let id = self.next_window_id();
                self.forms.push((id, IntakeForm::new(self.config)));
                info!(window = %id, "Order form opened");
                Ok(Some(id))
            }
            MainAction::ViewOrders => {
                let id = self.next_window_id();
                self.admin_views.push((id, AdminView::open(&self.store)));
                info!(window = %id, "Admin view opened");
                Ok(Some(id))
            }
            MainAction::Exit => {
                self.phase = SessionPhase::ConfirmingExit;
                debug!("Exit requested");
                Ok(None)
            }
        }
    }

    /// Submits the form in window `id`.
    ///
    /// On success the form is dropped and a success notice is raised. On a
    /// validation failure an "Input Error" notice is raised and the form stays
    /// open with its values.
    #[instrument(skip(self))]
    pub fn submit_order(&mut self, id: WindowId) -> Result<OrderId, SessionError> {
        self.ensure_interactive()?;
        let form = self
            .forms
            .iter_mut()
            .find(|(wid, _)| *wid == id)
            .map(|(_, form)| form)
            .ok_or(SessionError::UnknownWindow(id))?;

        match form.submit(&mut self.store) {
            Ok(order_id) => {
                self.forms.retain(|(_, form)| form.is_open());
                self.notice = Some(Notice::info("Success", "Order placed successfully!"));
                Ok(order_id)
            }
            Err(e) => {
                if let IntakeError::Validation(reason) = &e {
                    self.notice = Some(Notice::error("Input Error", reason.to_string()));
                }
                Err(e.into())
            }
        }
    }

    /// Re-renders admin window `id` and returns its new row count.
    #[instrument(skip(self))]
    pub fn refresh_admin(&mut self, id: WindowId) -> Result<usize, SessionError> {
        self.ensure_interactive()?;
        let view = self
            .admin_views
            .iter_mut()
            .find(|(wid, _)| *wid == id)
            .map(|(_, view)| view)
            .ok_or(SessionError::UnknownWindow(id))?;
        Ok(view.refresh(&self.store))
    }

    /// Closes and forgets window `id`, discarding any unsubmitted form input.
    #[instrument(skip(self))]
    pub fn close_window(&mut self, id: WindowId) -> Result<(), SessionError> {
        self.ensure_interactive()?;
        if let Some(index) = self.forms.iter().position(|(wid, _)| *wid == id) {
            let (_, mut form) = self.forms.remove(index);
            form.close();
        } else if let Some(index) = self.admin_views.iter().position(|(wid, _)| *wid == id) {
            let (_, mut view) = self.admin_views.remove(index);
            view.close();
        } else {
            return Err(SessionError::UnknownWindow(id));
        }
        debug!(window = %id, "Window closed");
        Ok(())
    }

    /// Dismisses the pending notice, if any.
    pub fn acknowledge_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Answers the exit prompt. `true` ends the session for good.
    #[instrument(skip(self))]
    pub fn answer_exit(&mut self, confirm: bool) -> SessionPhase {
        if self.phase != SessionPhase::ConfirmingExit {
            debug!(phase = ?self.phase, "No exit prompt to answer");
            return self.phase;
        }
        if confirm {
            for (_, form) in &mut self.forms {
                form.close();
            }
            for (_, view) in &mut self.admin_views {
                view.close();
            }
            self.forms.clear();
            self.admin_views.clear();
            self.phase = SessionPhase::Exited;
            info!(orders = self.store.len(), "Session exited");
        } else {
            self.phase = SessionPhase::Running;
            debug!("Exit cancelled");
        }
        self.phase
    }

    fn ensure_interactive(&self) -> Result<(), SessionError> {
        if self.is_exited() {
            warn!("Action after exit");
            return Err(SessionError::Exited);
        }
        if self.is_blocked() {
            debug!("Action ignored while a dialog is open");
            return Err(SessionError::Blocked);
        }
        Ok(())
    }

    fn next_window_id(&mut self) -> WindowId {
        self.next_window += 1;
        WindowId(self.next_window)
    }
}

