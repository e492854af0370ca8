//! Domain types and the ports the checkout flow talks through.

pub mod button;
pub mod payment;
pub mod ports;
pub mod ticket;
