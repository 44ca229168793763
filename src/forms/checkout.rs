use validator::Validate;

use crate::domain::session::FormSession;
use crate::domain::types::{Amount, TypeConstraintError};
use crate::dto::checkout::GatewayHandoff;

/// Snapshot of the public payment page's submission form.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CheckoutForm {
    #[validate(length(min = 1))]
    pub fee_type: String,
    #[validate(length(min = 1))]
    pub part: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub amount: Amount,
    pub donation: bool,
}

impl CheckoutForm {
    pub fn from_session(session: &FormSession) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            fee_type: session.fee_type.clone(),
            part: session.part.clone(),
            name: session.name.clone(),
            amount: session.amount.parse()?,
            donation: session.donate,
        })
    }

    /// Fills the hidden hand-off form once a transaction reference is issued.
    pub fn into_handoff(self, tx_ref: String) -> GatewayHandoff {
        GatewayHandoff {
            tx_ref,
            amount: self.amount,
            fee_type: self.fee_type,
            part: self.part,
            donation: self.donation,
            name: self.name,
        }
    }
}
