use holster_orders::config::FormConfig;
use holster_orders::intake::{Field, IntakeError};
use holster_orders::lifecycle::{
    MainAction, NoticeKind, OrderSession, SessionError, SessionPhase, WindowId,
};

fn fill_complete(session: &mut OrderSession, form: WindowId, name: &str) {
    let fields = session.form_mut(form).expect("Form should be open").fields_mut();
    fields.set(Field::Name, name);
    fields.set(Field::Email, format!("{}@example.com", name.to_lowercase()));
    fields.set(Field::HolsterType, "OWB");
    fields.set(Field::Color, "Black");
}

/// Full walk through the main window: place an order, look at it, exit.
#[test]
fn test_full_session_flow() {
    let mut session = OrderSession::new(FormConfig::default());

    // 1. Open the admin view before any orders exist
    let admin = session.dispatch(MainAction::ViewOrders).unwrap().unwrap();
    assert_eq!(session.admin_view(admin).unwrap().snapshot().row_count(), 0);

    // 2. Open a form and submit it incomplete
    let form = session.dispatch(MainAction::PlaceNewOrder).unwrap().unwrap();
    session
        .form_mut(form)
        .unwrap()
        .fields_mut()
        .set(Field::Name, "Alice");

    let result = session.submit_order(form);
    assert!(matches!(
        result,
        Err(SessionError::Intake(IntakeError::Validation(_)))
    ));
    let notice = session.notice().expect("Input error should be shown");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.title, "Input Error");
    assert!(notice.message.contains("Email"));
    assert_eq!(session.store().len(), 0);

    // 3. Dismiss the error; the form is still there with its input
    session.acknowledge_notice();
    assert_eq!(session.form_mut(form).unwrap().fields().name, "Alice");

    // 4. Complete and submit
    fill_complete(&mut session, form, "Alice");
    let order_id = session.submit_order(form).unwrap();
    assert_eq!(order_id.0, 0);
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.forms().count(), 0, "Form closes after success");

    let notice = session.acknowledge_notice().expect("Success should be shown");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "Order placed successfully!");

    // 5. The admin view is stale until refreshed
    assert_eq!(session.admin_view(admin).unwrap().snapshot().row_count(), 0);
    assert_eq!(session.refresh_admin(admin).unwrap(), 1);
    assert_eq!(
        session.admin_view(admin).unwrap().snapshot().row_count(),
        session.store().len()
    );

    // 6. Exit with confirmation
    session.dispatch(MainAction::Exit).unwrap();
    assert_eq!(session.answer_exit(true), SessionPhase::Exited);
    assert!(session.is_exited());
    assert_eq!(session.admin_views().count(), 0);
}

/// A notice blocks every other action until it is acknowledged.
#[test]
fn test_notice_blocks_other_actions() {
    let mut session = OrderSession::new(FormConfig::default());
    let form = session.dispatch(MainAction::PlaceNewOrder).unwrap().unwrap();

    let _ = session.submit_order(form);
    assert!(session.is_blocked());

    assert_eq!(
        session.dispatch(MainAction::ViewOrders),
        Err(SessionError::Blocked)
    );
    assert_eq!(session.close_window(form), Err(SessionError::Blocked));
    assert_eq!(session.submit_order(form), Err(SessionError::Blocked));

    session.acknowledge_notice();
    assert!(!session.is_blocked());
    assert!(session.dispatch(MainAction::ViewOrders).unwrap().is_some());
}

/// Cancelling the exit prompt returns to normal operation.
#[test]
fn test_exit_can_be_cancelled() {
    let mut session = OrderSession::new(FormConfig::default());

    session.dispatch(MainAction::Exit).unwrap();
    assert_eq!(session.phase(), SessionPhase::ConfirmingExit);
    assert_eq!(
        session.dispatch(MainAction::PlaceNewOrder),
        Err(SessionError::Blocked)
    );

    assert_eq!(session.answer_exit(false), SessionPhase::Running);
    assert!(session.dispatch(MainAction::PlaceNewOrder).unwrap().is_some());

    // Answering with no prompt showing changes nothing
    assert_eq!(session.answer_exit(true), SessionPhase::Running);
}

/// After exit nothing else is accepted.
#[test]
fn test_exited_session_rejects_actions() {
    let mut session = OrderSession::new(FormConfig::default());
    let form = session.dispatch(MainAction::PlaceNewOrder).unwrap().unwrap();

    session.dispatch(MainAction::Exit).unwrap();
    session.answer_exit(true);

    assert_eq!(session.forms().count(), 0);
    assert_eq!(
        session.dispatch(MainAction::PlaceNewOrder),
        Err(SessionError::Exited)
    );
    assert_eq!(session.submit_order(form), Err(SessionError::Exited));
    assert_eq!(session.answer_exit(false), SessionPhase::Exited);
}

/// Several forms may be open at once; each submits independently.
#[test]
fn test_multiple_forms_are_independent() {
    let mut session = OrderSession::new(FormConfig::default());
    let first = session.dispatch(MainAction::PlaceNewOrder).unwrap().unwrap();
    let second = session.dispatch(MainAction::PlaceNewOrder).unwrap().unwrap();
    assert_ne!(first, second);

    fill_complete(&mut session, second, "Bob");
    fill_complete(&mut session, first, "Alice");

    session.submit_order(second).unwrap();
    session.acknowledge_notice();
    session.submit_order(first).unwrap();
    session.acknowledge_notice();

    let names: Vec<_> = session
        .store()
        .all()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["Bob", "Alice"], "Store keeps submission order");
}

/// Closing a form discards its input without touching the store.
#[test]
fn test_close_window_discards_form() {
    let mut session = OrderSession::new(FormConfig::default());
    let form = session.dispatch(MainAction::PlaceNewOrder).unwrap().unwrap();
    fill_complete(&mut session, form, "Alice");

    session.close_window(form).unwrap();

    assert!(session.form_mut(form).is_none());
    assert!(session.store().is_empty());
    assert_eq!(
        session.close_window(form),
        Err(SessionError::UnknownWindow(form))
    );
    assert_eq!(
        session.refresh_admin(WindowId(99)),
        Err(SessionError::UnknownWindow(WindowId(99)))
    );
}
