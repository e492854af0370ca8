use super::payment::ApprovalUrl;

/// Result of a `create_order` call on a payment button.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonOutcome {
    /// The user cancelled the prompt or entered nothing.
    Aborted,
    /// Initiation failed; the user has already been told why.
    Failed,
    /// Another initiation is still in flight.
    Busy,
    /// The browser context has already been sent to an approval URL.
    AlreadyRedirected,
    Redirected(ApprovalUrl),
}

/// Data the widget hands over when the buyer approves a payment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApprovalData {
    pub order_id: Option<String>,
    pub payer_id: Option<String>,
}
