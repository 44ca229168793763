//! Public payment page: roster gate, transaction reference, gateway
//! hand-off.

use validator::Validate;

use crate::domain::session::{FormSession, Mode};
use crate::dto::checkout::GatewayHandoff;
use crate::forms::checkout::CheckoutForm;
use crate::gateway::TxRefIssuer;
use crate::services::{ServiceError, ServiceResult, mode};
use crate::ui::{BusyGuard, FormView, Indicator, MessageKind, Notice, ViewPatch};

const NOT_REGISTERED_WARNING: &str = "Your name is not registered. Please contact the admins. \
     If you would like to donate, please check the box below.";
const REDIRECT_PROMPT: &str =
    "You will be redirected to the payment processor to complete your payment.";
const GENERIC_FAILURE: &str = "Something went wrong. Please refresh the page and try again.";

/// Handles the public page's submit: gates on a roster match unless donating,
/// requests a transaction reference, and returns the populated hand-off for
/// the adapter to POST to the processor once the user confirms the redirect.
///
/// Returns `None` when the submission was short-circuited client-side (no
/// roster match, declined redirect); the submit control stays enabled in
/// that case.
pub async fn begin_checkout<G, V>(
    gateway: &G,
    ui: &V,
    session: &FormSession,
) -> ServiceResult<Option<GatewayHandoff>>
where
    G: TxRefIssuer + ?Sized,
    V: FormView + ?Sized,
{
    let _busy = BusyGuard::engage(ui, Indicator::SubmitControl);

    if !session.donate && session.roster.matches(&session.name).is_empty() {
        ui.notify(&Notice::Warning(NOT_REGISTERED_WARNING.to_string()));
        return Ok(None);
    }

    let form = match CheckoutForm::from_session(session) {
        Ok(form) => form,
        Err(err) => {
            ui.notify(&Notice::Warning(err.to_string()));
            return Err(err.into());
        }
    };
    if let Err(err) = form.validate() {
        log::error!("Failed to validate the checkout form: {err}");
        ui.notify(&Notice::Warning(
            "Please fill in all required fields.".to_string(),
        ));
        return Err(ServiceError::Form(err.to_string()));
    }

    match gateway.issue_tx_ref(&form.part, form.donation).await {
        Ok(tx_ref) => {
            log::info!("Issued transaction reference {tx_ref}");
            let handoff = form.into_handoff(tx_ref);
            if ui.confirm(REDIRECT_PROMPT) {
                // Hard guard against double submission once navigation
                // starts.
                ui.apply(&ViewPatch {
                    disable_submit: true,
                    ..ViewPatch::default()
                });
                Ok(Some(handoff))
            } else {
                Ok(None)
            }
        }
        Err(err) => {
            log::error!("Failed to get a transaction reference: {err}");
            ui.notify(&Notice::Alert(GENERIC_FAILURE.to_string()));
            Err(err.into())
        }
    }
}

/// Handles the donate checkbox: dismisses the not-registered warning and
/// attaches or detaches autocomplete, since donations need no roster match.
pub fn donate_toggled<V>(ui: &V, session: &mut FormSession, checked: bool)
where
    V: FormView + ?Sized,
{
    session.donate = checked;
    ui.clear(MessageKind::Warning);
    ui.apply(&ViewPatch::fields(mode::requirements(
        Mode::Payment,
        checked,
    )));
}
