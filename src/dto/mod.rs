//! Records crossing the gateway boundary and the checkout hand-off.

pub mod checkout;
pub mod records;
