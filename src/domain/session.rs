use crate::domain::roster::Roster;

/// Active submission mode of the portal form. Exactly one is active at a
/// time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Adding people (or a whole roster file) to a fee roster.
    #[default]
    Registration,
    /// Recording a payment against a roster entry.
    Payment,
}

impl Mode {
    /// The other mode, as swapped by the toggle control.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Registration => Mode::Payment,
            Mode::Payment => Mode::Registration,
        }
    }

    /// Caption shown on the mode toggle control.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Registration => "name registration",
            Mode::Payment => "payment submission",
        }
    }
}

/// File staged for a registration upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// All mutable state of one page session, passed explicitly to each handler.
///
/// Confined to a single session; discarded on navigation. Field values mirror
/// the form inputs, the roster cache mirrors the most recent successful fetch
/// for the current (part, fee type) selection.
#[derive(Clone, Debug, Default)]
pub struct FormSession {
    pub mode: Mode,
    pub fee_type: String,
    pub part: String,
    pub name: String,
    pub identifier: String,
    pub amount: String,
    pub attachment: Option<Attachment>,
    /// Public-page donate opt-in; waives the roster match requirement.
    pub donate: bool,
    pub roster: Roster,
    /// Set once a roster fetch has succeeded; the name input stays disabled
    /// until then.
    pub roster_ready: bool,
    /// A roster file was already uploaded in this session, so the next upload
    /// destructively replaces it.
    pub replacing_upload: bool,
}

impl FormSession {
    /// Fresh session for the given initial selection.
    pub fn new(fee_type: impl Into<String>, part: impl Into<String>) -> Self {
        Self {
            fee_type: fee_type.into(),
            part: part.into(),
            ..Self::default()
        }
    }

    /// Clears the name and identifier inputs, as every roster sync does.
    pub fn clear_entry_fields(&mut self) {
        self.name.clear();
        self.identifier.clear();
    }
}
