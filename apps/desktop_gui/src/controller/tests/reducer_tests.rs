use crossbeam_channel::bounded;
use shared::protocol::CallAccepted;

use super::*;
use crate::controller::orchestration::dispatch_backend_command;

fn submitted(text: &str) -> (CallFormModel, Option<BackendCommand>) {
    let mut model = CallFormModel::default();
    model.on_phone_number_changed(text.to_string());
    let cmd = model.on_submit();
    (model, cmd)
}

#[test]
fn valid_submit_queues_request_call_with_raw_text() {
    let (model, cmd) = submitted("+1 415 555 2671");
    let Some(BackendCommand::RequestCall { phone_number }) = cmd else {
        panic!("expected request_call command");
    };
    assert_eq!(phone_number.as_str(), "+1 415 555 2671");
    assert!(model.form().is_loading());
}

#[test]
fn invalid_submit_queues_nothing() {
    let (model, cmd) = submitted("abc");
    assert_eq!(cmd, None);
    assert_eq!(
        model.form().error(),
        Some(client_core::form::INVALID_PHONE_NUMBER_MESSAGE)
    );
}

#[test]
fn accepted_event_moves_form_to_success() {
    let (mut model, _) = submitted("+14155552671");
    model.on_ui_event(UiEvent::CallRequestAccepted(CallAccepted::default()));
    assert!(model.form().success());
    assert!(!model.form().is_loading());
    assert_eq!(model.form().phone_number(), "+14155552671");
}

#[test]
fn failed_event_shows_message_and_reenables_form() {
    let (mut model, _) = submitted("+14155552671");
    model.on_ui_event(UiEvent::CallRequestFailed("Number not reachable".into()));
    assert_eq!(model.form().error(), Some("Number not reachable"));
    assert!(!model.form().is_loading());
}

#[test]
fn backend_unavailable_fails_pending_request_and_sets_status() {
    let (mut model, _) = submitted("+14155552671");
    model.on_ui_event(UiEvent::BackendUnavailable("worker gone".into()));
    assert_eq!(model.backend_status(), Some("worker gone"));
    assert_eq!(model.form().error(), Some("worker gone"));
    assert!(!model.form().is_loading());
}

#[test]
fn dispatch_failure_unsticks_loading_state() {
    let (tx, rx) = bounded::<BackendCommand>(1);
    drop(rx);
    let (mut model, cmd) = submitted("+14155552671");

    let err = dispatch_backend_command(&tx, cmd.expect("command"))
        .expect_err("receiver dropped");
    model.on_dispatch_failed(err);

    assert!(!model.form().is_loading());
    assert!(model
        .form()
        .error()
        .is_some_and(|message| message.contains("disconnected")));
}

#[test]
fn dispatch_reports_full_queue() {
    let (tx, _rx) = bounded::<BackendCommand>(1);
    let (_, first) = submitted("+14155552671");
    let (_, second) = submitted("+14155552672");

    assert!(dispatch_backend_command(&tx, first.expect("command")).is_ok());
    let err = dispatch_backend_command(&tx, second.expect("command")).expect_err("queue full");
    assert!(err.contains("full"));
}
