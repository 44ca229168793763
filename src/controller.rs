//! Event-handler layer: one method per user interaction.
//!
//! The controller owns the session state and the two ports, so no handler
//! reaches into ambient page state. Nothing here decides behavior; every
//! handler delegates to a service.

use crate::domain::session::{Attachment, FormSession, Mode};
use crate::dto::checkout::GatewayHandoff;
use crate::gateway::{RecordWriter, RosterReader, TxRefIssuer};
use crate::models::config::PortalConfig;
use crate::services::{
    ServiceResult, SubmissionOutcome, autocomplete, checkout, mode, roster, submission,
};
use crate::ui::FormView;

pub struct PortalController<G, V> {
    gateway: G,
    ui: V,
    donation_part: String,
    session: FormSession,
}

impl<G, V> PortalController<G, V>
where
    G: RosterReader + RecordWriter + TxRefIssuer,
    V: FormView,
{
    pub fn new(gateway: G, ui: V, config: &PortalConfig) -> Self {
        Self {
            gateway,
            ui,
            donation_part: config.donation_part.clone(),
            session: FormSession::new(&config.fee_type, &config.part),
        }
    }

    /// Controller for the public payment page: same session machinery, but
    /// payment-only (that page has no mode toggle).
    pub fn for_checkout(gateway: G, ui: V, config: &PortalConfig) -> Self {
        let mut controller = Self::new(gateway, ui, config);
        controller.session.mode = Mode::Payment;
        controller
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Initial page load: fetch the roster for the preselected
    /// (part, fee type).
    pub async fn startup(&mut self) -> ServiceResult<()> {
        roster::refresh_roster(
            &self.gateway,
            &self.ui,
            &mut self.session,
            &self.donation_part,
        )
        .await
    }

    pub fn mode_toggled(&mut self) -> Mode {
        mode::toggle_mode(&self.ui, &mut self.session, &self.donation_part)
    }

    pub async fn part_changed(&mut self, part: String) -> ServiceResult<()> {
        self.session.part = part;
        self.resync().await
    }

    pub async fn fee_type_changed(&mut self, fee_type: String) -> ServiceResult<()> {
        self.session.fee_type = fee_type;
        self.resync().await
    }

    /// Keystroke in the name input. Suggestions render only while
    /// autocomplete is attached and the roster has loaded once.
    pub fn name_typed(&mut self, value: String) {
        if self.autocomplete_active() {
            autocomplete::name_input(&self.ui, &mut self.session, value);
        } else {
            self.session.name = value;
        }
    }

    pub fn suggestion_picked(&mut self, choice: &str) {
        autocomplete::select_suggestion(&self.ui, &mut self.session, choice);
    }

    pub fn identifier_typed(&mut self, value: String) {
        self.session.identifier = value;
    }

    pub fn amount_typed(&mut self, value: String) {
        self.session.amount = value;
    }

    pub fn file_attached(&mut self, attachment: Option<Attachment>) {
        self.session.attachment = attachment;
    }

    pub fn donate_toggled(&mut self, checked: bool) {
        checkout::donate_toggled(&self.ui, &mut self.session, checked);
    }

    pub async fn entry_submitted(&mut self) -> ServiceResult<SubmissionOutcome> {
        submission::submit_entry(
            &self.gateway,
            &self.ui,
            &mut self.session,
            &self.donation_part,
        )
        .await
    }

    pub async fn checkout_submitted(&mut self) -> ServiceResult<Option<GatewayHandoff>> {
        checkout::begin_checkout(&self.gateway, &self.ui, &self.session).await
    }

    async fn resync(&mut self) -> ServiceResult<()> {
        roster::refresh_roster(
            &self.gateway,
            &self.ui,
            &mut self.session,
            &self.donation_part,
        )
        .await
    }

    fn autocomplete_active(&self) -> bool {
        let donation_selected = self.session.part == self.donation_part || self.session.donate;
        self.session.roster_ready
            && mode::requirements(self.session.mode, donation_selected).autocomplete_enabled
    }
}
