use validator::Validate;

use crate::domain::session::{Attachment, FormSession};
use crate::domain::types::{Amount, TypeConstraintError};
use crate::dto::records::{PaymentRecord, RegistrationRecord};

/// Payment-mode snapshot of the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PaymentForm {
    #[validate(length(min = 1))]
    pub fee_type: String,
    #[validate(length(min = 1))]
    pub part: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub identifier: String,
    pub amount: Amount,
}

impl PaymentForm {
    /// Reads all payment fields from the session in one snapshot. The amount
    /// input is parsed through [`Amount`] and fails on zero or non-numeric
    /// values.
    pub fn from_session(session: &FormSession) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            fee_type: session.fee_type.clone(),
            part: session.part.clone(),
            name: session.name.clone(),
            identifier: session.identifier.clone(),
            amount: session.amount.parse()?,
        })
    }

    pub fn into_record(self, donation: bool) -> PaymentRecord {
        PaymentRecord {
            fee_type: self.fee_type,
            part: self.part,
            name: self.name,
            amount: self.amount,
            identifier: self.identifier,
            donation,
        }
    }
}

/// Registration-mode snapshot of the entry form. Name and identifier are
/// optional when a roster file is attached; the coordinator enforces that at
/// least one of the two shapes is present.
#[derive(Debug, Clone, Validate)]
pub struct RegistrationForm {
    #[validate(length(min = 1))]
    pub fee_type: String,
    #[validate(length(min = 1))]
    pub part: String,
    pub name: String,
    pub identifier: String,
    pub attachment: Option<Attachment>,
}

impl RegistrationForm {
    pub fn from_session(session: &FormSession) -> Self {
        Self {
            fee_type: session.fee_type.clone(),
            part: session.part.clone(),
            name: session.name.clone(),
            identifier: session.identifier.clone(),
            attachment: session.attachment.clone(),
        }
    }

    pub fn into_record(self) -> RegistrationRecord {
        RegistrationRecord {
            fee_type: self.fee_type,
            part: self.part,
            name: self.name,
            identifier: self.identifier,
            attachment: self.attachment,
        }
    }
}
