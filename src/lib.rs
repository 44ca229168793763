//! Client-side form controller for a payment/registration portal.
//!
//! The library coordinates two mutually exclusive submission modes against a
//! backend exposing the portal HTTP contract: registering names into a fee
//! roster and recording payments validated against that roster. All page
//! concerns sit behind injected ports so the core is testable without a live
//! document: the [`ui::FormView`] trait receives batched view updates,
//! notices, and confirmation prompts, and the [`gateway`] traits cover the
//! HTTP calls.

pub mod controller;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod gateway;
pub mod models;
pub mod services;
pub mod ui;

/// Part/category that unmatched payment submissions are reclassified into.
pub const DEFAULT_DONATION_PART: &str = "Donations";

/// Wire name of the identifier field used when none is configured.
pub const DEFAULT_IDENTIFIER_FIELD: &str = "reg_no";
