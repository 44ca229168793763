use crate::domain::session::Attachment;
use crate::domain::types::Amount;

/// Multipart payload for a registration write: new roster entry and/or a
/// replacement roster file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub fee_type: String,
    pub part: String,
    pub name: String,
    pub identifier: String,
    pub attachment: Option<Attachment>,
}

/// JSON payload for a payment write. `donation` is derived from whether the
/// final part selection equals the donation part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentRecord {
    pub fee_type: String,
    pub part: String,
    pub name: String,
    pub amount: Amount,
    pub identifier: String,
    pub donation: bool,
}
