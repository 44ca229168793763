//! The submission coordinator for the entry form.

use validator::Validate;

use crate::domain::session::{FormSession, Mode};
use crate::forms::entry::{PaymentForm, RegistrationForm};
use crate::gateway::errors::GatewayError;
use crate::gateway::{RecordWriter, RosterReader};
use crate::services::{ServiceError, ServiceResult, SubmissionOutcome, roster};
use crate::ui::{BusyGuard, FormView, Indicator, MessageKind, Notice, ViewPatch};

const SUCCESS_MESSAGE: &str = "Added successfully!";
const GENERIC_FAILURE: &str = "Something went wrong. Please refresh the page and try again.";
const OVERWRITE_PROMPT: &str =
    "A roster file was already uploaded. This upload replaces the existing roster. Continue?";

/// Handles an entry form submission: clears prior success messaging, keeps
/// the form busy for the whole operation, and branches on the active mode.
pub async fn submit_entry<G, V>(
    gateway: &G,
    ui: &V,
    session: &mut FormSession,
    donation_part: &str,
) -> ServiceResult<SubmissionOutcome>
where
    G: RosterReader + RecordWriter + ?Sized,
    V: FormView + ?Sized,
{
    ui.clear(MessageKind::Success);
    let _busy = BusyGuard::engage(ui, Indicator::EntryForm);

    match session.mode {
        Mode::Payment => submit_payment(gateway, ui, session, donation_part).await,
        Mode::Registration => submit_registration(gateway, ui, session, donation_part).await,
    }
}

/// Payment branch. A typed name with no roster match is silently
/// reclassified as a donation before the payload is built.
async fn submit_payment<G, V>(
    gateway: &G,
    ui: &V,
    session: &mut FormSession,
    donation_part: &str,
) -> ServiceResult<SubmissionOutcome>
where
    G: RecordWriter + ?Sized,
    V: FormView + ?Sized,
{
    if session.roster.matches(&session.name).is_empty() {
        log::info!(
            "No roster match for {:?}; reclassifying the payment as a donation",
            session.name
        );
        session.part = donation_part.to_string();
    }

    let form = match PaymentForm::from_session(session) {
        Ok(form) => form,
        Err(err) => {
            ui.notify(&Notice::Warning(err.to_string()));
            return Err(err.into());
        }
    };
    if let Err(err) = form.validate() {
        log::error!("Failed to validate the payment form: {err}");
        ui.notify(&Notice::Warning(
            "Please fill in all required fields.".to_string(),
        ));
        return Err(ServiceError::Form(err.to_string()));
    }

    let donation = form.part == donation_part;
    if !donation && form.identifier.trim().is_empty() {
        ui.notify(&Notice::Warning(
            "Please select a registered name so the identifier can be filled in.".to_string(),
        ));
        return Err(ServiceError::Form("missing identifier".to_string()));
    }

    let record = form.into_record(donation);
    match gateway.add_payment(&record).await {
        Ok(()) => {
            ui.notify(&Notice::Success(SUCCESS_MESSAGE.to_string()));
            Ok(SubmissionOutcome::Submitted)
        }
        Err(err) => {
            log::error!("Failed to add the payment: {err}");
            alert_failure(
                ui,
                &err,
                "Failed to add payment. Please refresh the page and try again.",
            );
            Err(err.into())
        }
    }
}

/// Registration branch: multipart write with an optional roster file.
async fn submit_registration<G, V>(
    gateway: &G,
    ui: &V,
    session: &mut FormSession,
    donation_part: &str,
) -> ServiceResult<SubmissionOutcome>
where
    G: RosterReader + RecordWriter + ?Sized,
    V: FormView + ?Sized,
{
    let form = RegistrationForm::from_session(session);
    if let Err(err) = form.validate() {
        log::error!("Failed to validate the registration form: {err}");
        ui.notify(&Notice::Warning(
            "Please fill in all required fields.".to_string(),
        ));
        return Err(ServiceError::Form(err.to_string()));
    }
    if form.attachment.is_none() && form.name.trim().is_empty() {
        ui.notify(&Notice::Warning(
            "Enter a name or attach a roster file before submitting.".to_string(),
        ));
        return Err(ServiceError::Form("empty registration".to_string()));
    }
    if !form.name.trim().is_empty() && form.identifier.trim().is_empty() {
        ui.notify(&Notice::Warning(
            "A registration number is required to register a name.".to_string(),
        ));
        return Err(ServiceError::Form("missing identifier".to_string()));
    }

    if form.attachment.is_some() && session.replacing_upload && !ui.confirm(OVERWRITE_PROMPT) {
        return Ok(SubmissionOutcome::Aborted);
    }

    let uploaded_file = form.attachment.is_some();
    let record = form.into_record();
    match gateway.add_name(&record).await {
        Ok(()) => {
            if uploaded_file {
                session.replacing_upload = true;
            }
            session.clear_entry_fields();
            session.attachment = None;
            ui.apply(&ViewPatch {
                reset_entry: true,
                ..ViewPatch::default()
            });
            ui.notify(&Notice::Success(SUCCESS_MESSAGE.to_string()));

            // The sync surfaces its own alert if it fails; the registration
            // itself already went through.
            let _ = roster::refresh_roster(gateway, ui, session, donation_part).await;
            Ok(SubmissionOutcome::Submitted)
        }
        Err(err) => {
            log::error!("Failed to add the name: {err}");
            alert_failure(
                ui,
                &err,
                "Failed to add name. Please refresh the page and try again.",
            );
            Err(err.into())
        }
    }
}

/// Server rejections get the operation-specific retry alert; transport and
/// decode failures get the generic one.
fn alert_failure<V>(ui: &V, err: &GatewayError, rejected_message: &str)
where
    V: FormView + ?Sized,
{
    let message = match err {
        GatewayError::Rejected { .. } => rejected_message,
        GatewayError::Network(_) | GatewayError::Decode(_) => GENERIC_FAILURE,
    };
    ui.notify(&Notice::Alert(message.to_string()));
}
