//! Per-operation snapshots of the session's field values.
//!
//! Each form is built from the [`FormSession`](crate::domain::session::FormSession)
//! right before a submission, validated declaratively, then converted into
//! the record the gateway transmits. Conditional requirements that depend on
//! mode or donation state are enforced by the services.

pub mod checkout;
pub mod entry;
