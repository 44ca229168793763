use autopay_portal::DEFAULT_DONATION_PART;
use autopay_portal::domain::session::{Attachment, FormSession, Mode};
use autopay_portal::gateway::errors::GatewayError;
use autopay_portal::services::{SubmissionOutcome, submission};
use autopay_portal::ui::Indicator;

mod common;

use common::{ScriptedView, StubGateway};

fn payment_session(name: &str) -> FormSession {
    let mut session = FormSession::new("dues", "2026 Dues");
    session.mode = Mode::Payment;
    session.roster.replace(common::sample_roster());
    session.roster_ready = true;
    session.name = name.to_string();
    session.amount = "500".to_string();
    session
}

fn registration_session() -> FormSession {
    let mut session = FormSession::new("dues", "2026 Dues");
    session.name = "New Member".to_string();
    session.identifier = "777".to_string();
    session
}

#[tokio::test]
async fn an_unmatched_payment_is_reclassified_as_a_donation() {
    let gateway = StubGateway::new();
    let view = ScriptedView::new();
    let mut session = payment_session("Unknown Person");

    let outcome = submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART)
        .await
        .unwrap();

    assert_eq!(outcome, SubmissionOutcome::Submitted);
    let payments = gateway.payments.lock().unwrap();
    assert_eq!(payments.len(), 1);
    assert!(payments[0].donation);
    assert_eq!(payments[0].part, DEFAULT_DONATION_PART);
    assert_eq!(payments[0].name, "Unknown Person");
}

#[tokio::test]
async fn a_matched_payment_keeps_its_part_and_identifier() {
    let gateway = StubGateway::new();
    let view = ScriptedView::new();
    let mut session = payment_session("Jane Doe");
    session.identifier = "123".to_string();

    submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART)
        .await
        .unwrap();

    let payments = gateway.payments.lock().unwrap();
    assert!(!payments[0].donation);
    assert_eq!(payments[0].part, "2026 Dues");
    assert_eq!(payments[0].identifier, "123");
    assert_eq!(payments[0].amount.get(), 500);
    assert_eq!(view.successes(), vec!["Added successfully!".to_string()]);
}

#[tokio::test]
async fn a_matched_payment_without_an_identifier_is_short_circuited() {
    let gateway = StubGateway::new();
    let view = ScriptedView::new();
    let mut session = payment_session("Jane Doe");

    let result =
        submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART).await;

    assert!(result.is_err());
    assert!(gateway.payments.lock().unwrap().is_empty());
    assert_eq!(view.warnings().len(), 1);
    assert!(view.alerts().is_empty());
}

#[tokio::test]
async fn a_rejected_payment_surfaces_the_retry_alert_and_logs_nothing_to_the_ui() {
    let gateway = StubGateway::new();
    *gateway.add_payment_result.lock().unwrap() = Err(GatewayError::Rejected {
        status: 500,
        detail: "sheet unavailable".to_string(),
    });
    let view = ScriptedView::new();
    let mut session = payment_session("Jane Doe");
    session.identifier = "123".to_string();

    let result =
        submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART).await;

    assert!(result.is_err());
    assert_eq!(
        view.alerts(),
        vec!["Failed to add payment. Please refresh the page and try again.".to_string()]
    );
    assert!(view.successes().is_empty());
}

#[tokio::test]
async fn a_transport_failure_surfaces_the_generic_alert() {
    let gateway = StubGateway::new();
    *gateway.add_payment_result.lock().unwrap() =
        Err(GatewayError::Network("connection reset".to_string()));
    let view = ScriptedView::new();
    let mut session = payment_session("Jane Doe");
    session.identifier = "123".to_string();

    let _ = submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART).await;

    assert_eq!(
        view.alerts(),
        vec!["Something went wrong. Please refresh the page and try again.".to_string()]
    );
}

#[tokio::test]
async fn the_form_busy_indicator_is_released_even_on_failure() {
    let gateway = StubGateway::new();
    *gateway.add_payment_result.lock().unwrap() =
        Err(GatewayError::Network("offline".to_string()));
    let view = ScriptedView::new();
    let mut session = payment_session("Jane Doe");
    session.identifier = "123".to_string();

    let _ = submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART).await;

    assert_eq!(view.busy_transitions(Indicator::EntryForm), vec![true, false]);
}

#[tokio::test]
async fn registration_without_a_file_asks_no_confirmation() {
    let gateway = StubGateway::new();
    let view = ScriptedView::new();
    let mut session = registration_session();
    session.replacing_upload = true;

    let outcome = submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART)
        .await
        .unwrap();

    assert_eq!(outcome, SubmissionOutcome::Submitted);
    assert!(view.confirms().is_empty());
    assert_eq!(gateway.registrations.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn a_successful_registration_clears_the_fields_and_resyncs_the_roster() {
    let gateway = StubGateway::with_names(common::sample_roster());
    let view = ScriptedView::new();
    let mut session = registration_session();
    session.attachment = Some(Attachment::new("roster.csv", b"Name,Reg Number".to_vec()));

    submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART)
        .await
        .unwrap();

    assert!(session.name.is_empty());
    assert!(session.identifier.is_empty());
    assert!(session.attachment.is_none());
    assert!(session.replacing_upload);
    assert_eq!(gateway.fetches.lock().unwrap().len(), 1);
    assert_eq!(view.successes(), vec!["Added successfully!".to_string()]);
}

#[tokio::test]
async fn the_first_upload_of_a_session_proceeds_unprompted() {
    let gateway = StubGateway::new();
    let view = ScriptedView::new();
    let mut session = registration_session();
    session.attachment = Some(Attachment::new("roster.csv", vec![1, 2, 3]));

    submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART)
        .await
        .unwrap();

    assert!(view.confirms().is_empty());
    assert_eq!(gateway.registrations.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn declining_the_overwrite_confirmation_aborts_without_any_network_call() {
    let gateway = StubGateway::new();
    let view = ScriptedView::answering(&[false]);
    let mut session = registration_session();
    session.attachment = Some(Attachment::new("roster.csv", vec![1, 2, 3]));
    session.replacing_upload = true;

    let outcome = submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART)
        .await
        .unwrap();

    assert_eq!(outcome, SubmissionOutcome::Aborted);
    assert_eq!(view.confirms().len(), 1);
    assert!(gateway.registrations.lock().unwrap().is_empty());
    assert!(gateway.fetches.lock().unwrap().is_empty());
    assert!(session.attachment.is_some());
}

#[tokio::test]
async fn accepting_the_overwrite_confirmation_uploads_the_replacement() {
    let gateway = StubGateway::new();
    let view = ScriptedView::answering(&[true]);
    let mut session = registration_session();
    session.attachment = Some(Attachment::new("roster.csv", vec![1, 2, 3]));
    session.replacing_upload = true;

    let outcome = submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART)
        .await
        .unwrap();

    assert_eq!(outcome, SubmissionOutcome::Submitted);
    let registrations = gateway.registrations.lock().unwrap();
    assert!(registrations[0].attachment.is_some());
}

#[tokio::test]
async fn a_name_without_an_identifier_is_rejected_before_the_network() {
    let gateway = StubGateway::new();
    let view = ScriptedView::new();
    let mut session = registration_session();
    session.identifier.clear();

    let result =
        submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART).await;

    assert!(result.is_err());
    assert!(gateway.registrations.lock().unwrap().is_empty());
    assert_eq!(view.warnings().len(), 1);
}

#[tokio::test]
async fn an_empty_registration_is_rejected_before_the_network() {
    let gateway = StubGateway::new();
    let view = ScriptedView::new();
    let mut session = registration_session();
    session.clear_entry_fields();

    let result =
        submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART).await;

    assert!(result.is_err());
    assert!(gateway.registrations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn an_attachment_read_from_disk_is_transmitted_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.csv");
    std::fs::write(&path, b"Name,Reg Number\nJane Doe,123\n").unwrap();

    let gateway = StubGateway::new();
    let view = ScriptedView::new();
    let mut session = registration_session();
    session.attachment = Some(Attachment::new("roster.csv", std::fs::read(&path).unwrap()));

    submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART)
        .await
        .unwrap();

    let registrations = gateway.registrations.lock().unwrap();
    let attachment = registrations[0].attachment.as_ref().unwrap();
    assert_eq!(attachment.file_name, "roster.csv");
    assert_eq!(attachment.bytes, b"Name,Reg Number\nJane Doe,123\n");
}

#[tokio::test]
async fn a_rejected_registration_surfaces_the_retry_alert() {
    let gateway = StubGateway::new();
    *gateway.add_name_result.lock().unwrap() = Err(GatewayError::Rejected {
        status: 500,
        detail: "duplicate".to_string(),
    });
    let view = ScriptedView::new();
    let mut session = registration_session();

    let result =
        submission::submit_entry(&gateway, &view, &mut session, DEFAULT_DONATION_PART).await;

    assert!(result.is_err());
    assert_eq!(
        view.alerts(),
        vec!["Failed to add name. Please refresh the page and try again.".to_string()]
    );
    // No resync after a failed write.
    assert!(gateway.fetches.lock().unwrap().is_empty());
}
