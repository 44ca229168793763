//! Scripted port implementations shared by the behavioral tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use autopay_portal::domain::roster::RosterEntry;
use autopay_portal::dto::records::{PaymentRecord, RegistrationRecord};
use autopay_portal::gateway::errors::GatewayResult;
use autopay_portal::gateway::{RecordWriter, RosterReader, TxRefIssuer};
use autopay_portal::ui::{FormView, Indicator, MessageKind, Notice, ViewPatch};

/// Everything a service did to the view, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    Patch(ViewPatch),
    Notice(Notice),
    Cleared(MessageKind),
    Confirm(String),
}

/// Deterministic view port: records every call, answers confirmations from
/// a script (accepting once the script runs out).
#[derive(Default)]
pub struct ScriptedView {
    pub events: Mutex<Vec<ViewEvent>>,
    pub confirm_answers: Mutex<VecDeque<bool>>,
}

impl ScriptedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: &[bool]) -> Self {
        Self {
            confirm_answers: Mutex::new(answers.iter().copied().collect()),
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.notices(|n| match n {
            Notice::Alert(m) => Some(m),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.notices(|n| match n {
            Notice::Warning(m) => Some(m),
            _ => None,
        })
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices(|n| match n {
            Notice::Success(m) => Some(m),
            _ => None,
        })
    }

    pub fn confirms(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Confirm(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn patches(&self) -> Vec<ViewPatch> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Patch(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// The suggestion lists rendered, in order.
    pub fn rendered_suggestions(&self) -> Vec<Vec<String>> {
        self.patches().into_iter().filter_map(|p| p.suggestions).collect()
    }

    /// Busy transitions for one indicator, in order.
    pub fn busy_transitions(&self, indicator: Indicator) -> Vec<bool> {
        self.patches()
            .into_iter()
            .filter_map(|p| match p.busy {
                Some((i, on)) if i == indicator => Some(on),
                _ => None,
            })
            .collect()
    }

    fn notices(&self, pick: impl Fn(Notice) -> Option<String>) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Notice(n) => pick(n),
                _ => None,
            })
            .collect()
    }
}

impl FormView for ScriptedView {
    fn apply(&self, patch: &ViewPatch) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Patch(patch.clone()));
    }

    fn notify(&self, notice: &Notice) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Notice(notice.clone()));
    }

    fn clear(&self, kind: MessageKind) {
        self.events.lock().unwrap().push(ViewEvent::Cleared(kind));
    }

    fn confirm(&self, message: &str) -> bool {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Confirm(message.to_string()));
        self.confirm_answers.lock().unwrap().pop_front().unwrap_or(true)
    }
}

/// Scripted gateway: preset results, captured calls.
pub struct StubGateway {
    pub names_result: Mutex<GatewayResult<Vec<RosterEntry>>>,
    pub add_name_result: Mutex<GatewayResult<()>>,
    pub add_payment_result: Mutex<GatewayResult<()>>,
    pub tx_ref_result: Mutex<GatewayResult<String>>,
    pub fetches: Mutex<Vec<(String, String)>>,
    pub registrations: Mutex<Vec<RegistrationRecord>>,
    pub payments: Mutex<Vec<PaymentRecord>>,
    pub tx_ref_requests: Mutex<Vec<(String, bool)>>,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            names_result: Mutex::new(Ok(Vec::new())),
            add_name_result: Mutex::new(Ok(())),
            add_payment_result: Mutex::new(Ok(())),
            tx_ref_result: Mutex::new(Ok("tx-test".to_string())),
            fetches: Mutex::new(Vec::new()),
            registrations: Mutex::new(Vec::new()),
            payments: Mutex::new(Vec::new()),
            tx_ref_requests: Mutex::new(Vec::new()),
        }
    }
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(entries: Vec<RosterEntry>) -> Self {
        Self {
            names_result: Mutex::new(Ok(entries)),
            ..Self::default()
        }
    }
}

#[async_trait]
impl RosterReader for StubGateway {
    async fn fetch_names(&self, part: &str, fee_type: &str) -> GatewayResult<Vec<RosterEntry>> {
        self.fetches
            .lock()
            .unwrap()
            .push((part.to_string(), fee_type.to_string()));
        self.names_result.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordWriter for StubGateway {
    async fn add_name(&self, record: &RegistrationRecord) -> GatewayResult<()> {
        self.registrations.lock().unwrap().push(record.clone());
        self.add_name_result.lock().unwrap().clone()
    }

    async fn add_payment(&self, record: &PaymentRecord) -> GatewayResult<()> {
        self.payments.lock().unwrap().push(record.clone());
        self.add_payment_result.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxRefIssuer for StubGateway {
    async fn issue_tx_ref(&self, part: &str, donation: bool) -> GatewayResult<String> {
        self.tx_ref_requests
            .lock()
            .unwrap()
            .push((part.to_string(), donation));
        self.tx_ref_result.lock().unwrap().clone()
    }
}

/// The two-entry roster used throughout the source scenarios.
pub fn sample_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new("Jane Doe", "123"),
        RosterEntry::new("Jan Smith", "456"),
    ]
}
