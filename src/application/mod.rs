//! Application layer orchestrating a checkout attempt.
//!
//! `PaymentInitiator` performs the single initiation request and reports
//! failures to the user; `CheckoutButton` adapts it to the payment widget's
//! lifecycle hooks and owns the click state.

pub mod button;
pub mod initiator;
