use crate::domain::types::Amount;

/// Hidden hand-off form for the third-party payment processor.
///
/// Populated after a transaction reference is issued; the adapter performs
/// the actual form POST navigation once the user confirms the redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayHandoff {
    pub tx_ref: String,
    pub amount: Amount,
    pub fee_type: String,
    pub part: String,
    pub donation: bool,
    pub name: String,
}

impl GatewayHandoff {
    /// Field name/value pairs in the processor's integration contract.
    pub fn form_fields(&self) -> [(&'static str, String); 6] {
        [
            ("tx_ref", self.tx_ref.clone()),
            ("amount", self.amount.to_string()),
            ("fee_type", self.fee_type.clone()),
            ("part", self.part.clone()),
            ("donation", self.donation.to_string()),
            ("name", self.name.clone()),
        ]
    }
}
